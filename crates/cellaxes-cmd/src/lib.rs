//! Command system for cellaxes-rs
//!
//! Provides the text-command layer over the drawing pipeline:
//!
//! - **Parser**: parses command strings into structured `ParsedCommand`s
//! - **Command trait**: interface for implementing commands
//! - **CommandRegistry**: maps names (and aliases) to implementations
//! - **Commands**: `draw_cell` and `cgo_arrow`
//!
//! # Example
//!
//! ```rust,ignore
//! use cellaxes_cmd::{execute_command, CommandContext, CommandRegistry};
//!
//! let registry = CommandRegistry::with_builtins();
//! let colors = cellaxes_color::NamedColors::new();
//! let mut ctx = CommandContext::new(&mut host, &colors);
//! execute_command(&registry, &mut ctx, "draw_cell 1abc, length=10")?;
//! ```

mod args;
mod command;
pub mod commands;
mod error;
mod parser;

pub use args::{ArgValue, ParsedCommand};
pub use command::{execute_command, Command, CommandContext, CommandRegistry};
pub use error::{CmdError, CmdResult, ParseError};
pub use parser::parse_command;
