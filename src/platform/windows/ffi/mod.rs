//! Helpers around the Win32 bindings from the `windows` crate.

pub mod types;

pub use types::*;
