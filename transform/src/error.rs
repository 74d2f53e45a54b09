use thiserror::Error;

/// Errors raised by the case transform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The transform was handed a non-text host value.
    ///
    /// This is a contract violation by the caller, not a recoverable
    /// condition; it propagates untouched to the host's error channel.
    #[error("to_uppercase requires a string, got {type_name}")]
    InvalidArgumentType {
        /// Host-side name of the offending value's type.
        type_name: &'static str,
    },
}
