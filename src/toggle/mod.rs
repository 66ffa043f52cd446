//! Window enumeration, visibility control and the target group.
//!
//! Everything here talks to the OS through [`WindowSystem`], so the whole
//! module runs against an in-memory fake in tests.

pub mod directory;
pub mod system;
pub mod target_group;
pub mod visibility;

pub use directory::{RefreshReport, WindowDirectory};
pub use system::WindowSystem;
pub use target_group::TargetGroup;
pub use visibility::VisibilityController;
