//! Command bodies for the Shout extension.
//!
//! Each submodule holds one command's implementation together with its
//! tests. Command bodies take the active [`Document`] the host passes in,
//! mutate it through replacement writes only, and propagate transform
//! errors to the dispatching host.
//!
//! [`Document`]: shout_text::Document

pub mod uppercase;
