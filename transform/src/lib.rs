//! Case transform for Shout
//!
//! The one piece of domain logic in the extension: converting a line of
//! text to uppercase. Two entry points cover the two ways a line reaches
//! the transform:
//!
//! - [`convert_line`] - statically typed, infallible, for callers that
//!   already hold a `&str`
//! - [`to_uppercase`] - the boundary form taking a host [`Value`], which
//!   rejects non-text input with [`TransformError::InvalidArgumentType`]
//!
//! Both are pure: no side effects, value semantics, and applying either
//! twice gives the same result as applying it once.
//!
//! [`Value`]: shout_text::Value

mod case;
mod error;

pub use case::{convert_line, to_uppercase};
pub use error::TransformError;
