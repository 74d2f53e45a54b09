//! Shout: an editor extension that uppercases the active document.
//!
//! The extension registers a single host command (by default named
//! `ToUppercase`) which rewrites every line of the currently open document
//! in uppercase. The host editor owns command registration and buffer I/O;
//! this crate plugs into it through the [`CommandRegistry`] trait and the
//! [`Document`] view, so tests run against a fake host instead of real
//! editor globals.
//!
//! The two operations an embedder needs are re-exported here:
//!
//! - [`to_uppercase`] - the pure per-line transform
//! - [`setup`] - register the command with the host
//!
//! # Modules
//!
//! - [`actions`]: command bodies operating on a [`Document`]
//! - [`command`]: command metadata, registry trait, and errors
//! - [`config`]: TOML-deserialized extension settings

pub mod actions;
pub mod command;
pub mod config;


use std::sync::Arc;

pub use command::{CommandError, CommandHandler, CommandInfo, CommandRegistry};
pub use config::Config;
pub use shout_text::{Document, Value};
pub use shout_transform::{to_uppercase, TransformError};

/// Register the uppercase command with the host, using default settings.
pub fn setup(registry: &mut dyn CommandRegistry) {
    setup_with_config(registry, &Config::default());
}

/// Register the uppercase command under the name the config chooses.
pub fn setup_with_config(registry: &mut dyn CommandRegistry, config: &Config) {
    let info = CommandInfo {
        name: config.command.name.clone(),
        description: config.command.description.clone(),
    };
    tracing::debug!(command = %info.name, "registering uppercase command");
    let handler: CommandHandler = Arc::new(actions::uppercase::convert_document);
    registry.register(info, handler);
}
