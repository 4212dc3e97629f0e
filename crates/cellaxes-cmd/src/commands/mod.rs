//! Command implementations

pub mod arrow;
pub mod cell;

use crate::command::CommandRegistry;

/// Register all built-in commands with the registry
pub fn register_all(registry: &mut CommandRegistry) {
    cell::register(registry);
    arrow::register(registry);
}
