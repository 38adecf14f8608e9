//! Command interpreter and terminal session for termfolio.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered in table order. A `Session` wraps the
//! registry with the REPL state: output log, input buffer, history,
//! suggestions, identity, theme and the project modal.

mod commands;
mod fun_commands;
mod interpreter;
mod portfolio_commands;
mod session;
pub mod timer;

/// Register all built-in commands into a registry, in table order.
pub use commands::register_builtins;
/// The fixed fortune set and the `ascii` banner.
pub use fun_commands::{BANNER, FORTUNES};
/// Render-agnostic output content.
pub use interpreter::{Block, HelpEntry};
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (blocks, silence, clear signal).
pub use interpreter::CommandOutput;
/// Ordered registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Shared mutable environment passed to every command.
pub use interpreter::{Environment, Settings};
/// Hint shown under an unknown-command error.
pub use interpreter::HELP_HINT;
/// The REPL session and its operation results.
pub use session::{Choice, Delays, InputResult, OutputEntry, Session, SubmitStatus};
