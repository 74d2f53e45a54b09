//! Host-side text model for Shout
//!
//! This crate mirrors the document surface a scripting host hands to an
//! extension: an ordered sequence of lines, where each line arrives as a
//! dynamically typed [`Value`] rather than a guaranteed string.
//!
//! The key components are:
//! - [`value::Value`] - The host's dynamically typed scripting value
//! - [`document::Document`] - Ordered lines with replace-only mutation

pub mod document;
pub mod value;

pub use document::Document;
pub use value::Value;
