//! Command argument types
//!
//! Types representing parsed command arguments: positional or named,
//! string-, number- or list-valued.

use std::fmt;

/// A command argument value
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// String value (object name, color name, etc.)
    String(String),
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// List of values (e.g., coordinates [1.0, 2.0, 3.0])
    List(Vec<ArgValue>),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::String(s) => write!(f, "{}", s),
            ArgValue::Int(i) => write!(f, "{}", i),
            ArgValue::Float(n) => write!(f, "{}", n),
            ArgValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl ArgValue {
    /// Try to get as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ArgValue::Float(f) => Some(*f),
            ArgValue::Int(i) => Some(*i as f64),
            ArgValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Try to get as a list of floats
    pub fn as_float_list(&self) -> Option<Vec<f64>> {
        match self {
            ArgValue::List(items) => items.iter().map(|v| v.as_float()).collect(),
            _ => None,
        }
    }
}

/// A parsed command with its name and arguments
///
/// Positional arguments carry `None` as the name, named arguments
/// `Some(name)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<(Option<String>, ArgValue)>,
}

impl ParsedCommand {
    /// Create a new parsed command with no arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Add a positional argument
    pub fn with_arg(mut self, value: ArgValue) -> Self {
        self.args.push((None, value));
        self
    }

    /// Add a named argument
    pub fn with_named_arg(mut self, name: impl Into<String>, value: ArgValue) -> Self {
        self.args.push((Some(name.into()), value));
        self
    }

    /// Get a positional argument by index (0-based)
    pub fn get_arg(&self, index: usize) -> Option<&ArgValue> {
        self.args
            .iter()
            .filter(|(n, _)| n.is_none())
            .nth(index)
            .map(|(_, v)| v)
    }

    /// Get a named argument by name
    pub fn get_named(&self, name: &str) -> Option<&ArgValue> {
        self.args
            .iter()
            .find(|(n, _)| n.as_deref() == Some(name))
            .map(|(_, v)| v)
    }

    /// Get positional argument as string
    pub fn get_str(&self, index: usize) -> Option<&str> {
        self.get_arg(index).and_then(|v| v.as_str())
    }

    /// Get positional argument as float
    pub fn get_float(&self, index: usize) -> Option<f64> {
        self.get_arg(index).and_then(|v| v.as_float())
    }

    /// Get named argument as string
    pub fn get_named_str(&self, name: &str) -> Option<&str> {
        self.get_named(name).and_then(|v| v.as_str())
    }

    /// Get named argument as float
    pub fn get_named_float(&self, name: &str) -> Option<f64> {
        self.get_named(name).and_then(|v| v.as_float())
    }
}
