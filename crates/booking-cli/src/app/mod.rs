//! Application-level utilities for the Bookings CLI.
//!
//! This module provides:
//! - Path resolution for the config file and booking store
//! - A context bundling CLI flags with the lazily-read config

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{missing_store_message, resolve_config_path, resolve_store_dir};
