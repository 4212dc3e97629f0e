//! Command trait and registry
//!
//! Defines the interface for commands and the registry that maps names
//! to implementations.

use std::sync::Arc;

use ahash::AHashMap;

use cellaxes_color::NamedColors;
use cellaxes_scene::Host;

use crate::args::ParsedCommand;
use crate::error::{CmdError, CmdResult};
use crate::parser::parse_command;

/// Command execution context
///
/// Bundles the host the command reads from and draws into, plus the
/// named-color registry (populated once at startup, read-only here).
pub struct CommandContext<'a> {
    /// The host visualization system
    pub host: &'a mut dyn Host,
    /// Named color registry
    pub colors: &'a NamedColors,
    /// Whether to suppress output messages
    pub quiet: bool,
}

impl<'a> CommandContext<'a> {
    /// Create a new command context
    pub fn new(host: &'a mut dyn Host, colors: &'a NamedColors) -> Self {
        Self {
            host,
            colors,
            quiet: false,
        }
    }

    /// Set the quiet flag
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Print a message (unless quiet mode is enabled)
    pub fn print(&self, msg: &str) {
        if !self.quiet {
            log::info!("{}", msg);
        }
    }

    /// Print an error message (even in quiet mode)
    pub fn error(&self, msg: &str) {
        log::error!("{}", msg);
    }
}

/// Trait for command implementations
pub trait Command: Send + Sync {
    /// Get the command name
    fn name(&self) -> &str;

    /// Execute the command
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &ParsedCommand) -> CmdResult;

    /// Get help text for this command
    fn help(&self) -> &str {
        "No help available."
    }

    /// Get list of command aliases
    fn aliases(&self) -> &[&str] {
        &[]
    }
}

/// Registry mapping command names to implementations
pub struct CommandRegistry {
    commands: AHashMap<String, Arc<dyn Command>>,
    aliases: AHashMap<String, String>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: AHashMap::new(),
            aliases: AHashMap::new(),
        }
    }

    /// Create a registry with all built-in commands registered
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::commands::register_all(&mut registry);
        registry
    }

    /// Register a command, along with any aliases it defines
    pub fn register<C: Command + 'static>(&mut self, cmd: C) {
        let name = cmd.name().to_string();
        let aliases: Vec<String> = cmd.aliases().iter().map(|s| s.to_string()).collect();
        let cmd = Arc::new(cmd);

        for alias in aliases {
            self.aliases.insert(alias, name.clone());
        }

        self.commands.insert(name, cmd);
    }

    /// Look up a command by name or alias
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        if let Some(cmd) = self.commands.get(name) {
            return Some(cmd.clone());
        }

        if let Some(real_name) = self.aliases.get(name) {
            return self.commands.get(real_name).cloned();
        }

        None
    }

    /// Check if a command exists
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name) || self.aliases.contains_key(name)
    }

    /// Get all command names (not including aliases)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(|s| s.as_str())
    }

    /// Get the number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Parse and execute a single command string against a registry
pub fn execute_command(
    registry: &CommandRegistry,
    ctx: &mut CommandContext<'_>,
    input: &str,
) -> CmdResult {
    let parsed = parse_command(input)?;
    let cmd = registry
        .get(&parsed.name)
        .ok_or_else(|| CmdError::UnknownCommand(parsed.name.clone()))?;
    cmd.execute(ctx, &parsed)
}
