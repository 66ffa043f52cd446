//! Settings storage.
//!
//! Persists the settings bag to a JSON file in the platform config dir.

mod config;

pub use config::{default_config_path, load_settings, save_settings, Settings};
