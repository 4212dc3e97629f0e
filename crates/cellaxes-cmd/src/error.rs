//! Error types for the command system

use thiserror::Error;

use cellaxes_algos::CellError;
use cellaxes_color::ColorError;
use cellaxes_scene::ArrowError;

/// Result type for command operations
pub type CmdResult<T = ()> = Result<T, CmdError>;

/// Errors that can occur during command execution
#[derive(Debug, Error)]
pub enum CmdError {
    /// Command parsing failed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Command not found in registry
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Invalid argument provided
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// Missing required argument
    #[error("missing required argument: {0}")]
    MissingArgument(String),

    /// Object not found
    #[error("object not found: {0}")]
    ObjectNotFound(String),

    /// Object carries no crystallographic symmetry record
    #[error("no symmetry loaded for object: {0}")]
    NoSymmetry(String),

    /// Unit cell geometry failed
    #[error(transparent)]
    Cell(#[from] CellError),

    /// Arrow construction failed
    #[error(transparent)]
    Arrow(#[from] ArrowError),

    /// Color lookup failed
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Generic execution error
    #[error("{0}")]
    Execution(String),
}

/// Errors that can occur during command parsing
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// Unexpected end of input
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Empty command
    #[error("empty command")]
    EmptyCommand,

    /// Unparsed trailing input after the command
    #[error("unexpected trailing input: '{0}'")]
    TrailingInput(String),

    /// Generic parse error with message
    #[error("parse error: {0}")]
    Generic(String),
}

impl From<nom::Err<nom::error::Error<&str>>> for ParseError {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        match err {
            nom::Err::Incomplete(_) => ParseError::UnexpectedEof,
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                ParseError::Generic(format!("at '{}...'", &e.input[..e.input.len().min(20)]))
            }
        }
    }
}

impl CmdError {
    /// Create an invalid argument error
    pub fn invalid_arg(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CmdError::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
