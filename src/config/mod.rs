//! Configuration module for linkpaste
//!
//! This module handles the user's paste preferences, including
//! serialization to/from JSON and persistent storage in the
//! platform-specific config directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
