//! Fake host editor for testing.
//!
//! Simulates the slice of a host editor the extension touches: a command
//! table and one active document. No real editor globals are involved, so
//! every test constructs its own fresh host and there is nothing to tear
//! down between runs.

use crate::command::{CommandError, CommandHandler, CommandInfo, CommandRegistry};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use shout_text::Document;
use std::sync::Arc;

/// In-memory host double.
///
/// Clones share the same command table and document, mirroring how a real
/// host hands the same process-wide state to every caller.
#[derive(Clone, Default)]
pub struct FakeHost {
    inner: Arc<Mutex<FakeHostInner>>,
}

#[derive(Default)]
struct FakeHostInner {
    /// Registered commands by name
    commands: FxHashMap<String, RegisteredCommand>,
    /// The currently active document
    document: Document,
}

struct RegisteredCommand {
    info: CommandInfo,
    handler: CommandHandler,
}

impl FakeHost {
    /// A host with an empty command table and an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose active document is `document`.
    pub fn with_document(document: Document) -> Self {
        let host = Self::new();
        host.set_document(document);
        host
    }

    /// Replace the active document.
    pub fn set_document(&self, document: Document) {
        self.inner.lock().document = document;
    }

    /// Snapshot of the active document.
    pub fn document(&self) -> Document {
        self.inner.lock().document.clone()
    }

    /// Names of all registered commands, unordered.
    pub fn command_names(&self) -> Vec<String> {
        self.inner.lock().commands.keys().cloned().collect()
    }

    /// Palette metadata for the command registered under `name`.
    pub fn command_info(&self, name: &str) -> Option<CommandInfo> {
        self.inner
            .lock()
            .commands
            .get(name)
            .map(|command| command.info.clone())
    }

    /// Dispatch `name` against the active document, as the host would when
    /// the user invokes the command.
    pub fn invoke(&self, name: &str) -> Result<(), CommandError> {
        let mut inner = self.inner.lock();
        let handler = match inner.commands.get(name) {
            Some(command) => Arc::clone(&command.handler),
            None => {
                return Err(CommandError::UnknownCommand {
                    name: name.to_string(),
                })
            },
        };
        let result = handler(&mut inner.document);
        if let Err(error) = &result {
            tracing::error!(command = name, %error, "command failed");
        }
        result
    }
}

impl CommandRegistry for FakeHost {
    fn register(&mut self, info: CommandInfo, handler: CommandHandler) {
        self.inner
            .lock()
            .commands
            .insert(info.name.clone(), RegisteredCommand { info, handler });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoking_an_unregistered_command_fails() {
        let host = FakeHost::new();
        let error = host.invoke("ToUppercase").expect_err("nothing registered");
        assert!(matches!(error, CommandError::UnknownCommand { .. }));
        assert!(error.to_string().contains("ToUppercase"));
    }

    #[test]
    fn registered_handler_sees_the_active_document() {
        let mut host = FakeHost::with_document(Document::from_lines(["a", "b"]));
        host.register(
            CommandInfo {
                name: "CountLines".to_string(),
                description: "test".to_string(),
            },
            Arc::new(|doc| {
                assert_eq!(doc.line_count(), 2);
                Ok(())
            }),
        );
        host.invoke("CountLines").expect("handler runs");
    }

    #[test]
    fn clones_share_the_command_table() {
        let mut host = FakeHost::new();
        let observer = host.clone();
        host.register(
            CommandInfo {
                name: "Noop".to_string(),
                description: "test".to_string(),
            },
            Arc::new(|_| Ok(())),
        );
        assert_eq!(observer.command_names(), vec!["Noop".to_string()]);
    }
}
