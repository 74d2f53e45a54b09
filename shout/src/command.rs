//! Command metadata and the host registry boundary.
//!
//! The host editor owns a process-wide name-to-handler command table. The
//! extension never touches it directly: it talks to whatever implements
//! [`CommandRegistry`], which the embedding adapter supplies. Tests supply
//! a fresh [`crate::test::FakeHost`] per run instead.

use shout_text::Document;
use shout_transform::TransformError;
use std::sync::Arc;
use thiserror::Error;

/// Metadata about a command the extension registers.
///
/// The host surfaces this in its command palette; `name` is also the key
/// the handler is dispatched under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandInfo {
    /// Name the user invokes, e.g. "ToUppercase"
    pub name: String,
    /// Description of what the command does
    pub description: String,
}

/// A command body, invoked by the host with the active document.
pub type CommandHandler = Arc<dyn Fn(&mut Document) -> Result<(), CommandError> + Send + Sync>;

/// The slice of the host's command table the extension is allowed to see.
pub trait CommandRegistry {
    /// Register `handler` under `info.name`.
    fn register(&mut self, info: CommandInfo, handler: CommandHandler);
}

/// Errors surfaced to the host when a command runs.
#[derive(Debug, Clone, Error)]
pub enum CommandError {
    /// A line conversion failed; passed through to the host's error channel
    /// unchanged.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// No handler is registered under the invoked name.
    #[error("unknown command {name:?}")]
    UnknownCommand {
        /// The name the host tried to dispatch.
        name: String,
    },
}
