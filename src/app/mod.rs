//! Application facade.
//!
//! This module wires the input sources, the window directory and the target
//! group together behind the operations the presentation layer calls.

pub mod controller;

pub use controller::Controller;
