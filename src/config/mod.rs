//! Configuration loading and merging
//!
//! Handles loading from config files, environment variables, and CLI arguments
//! with proper precedence (CLI > Env > File).

pub mod loader;
pub mod merge;

pub use loader::{default_search_dirs, load_config};
pub use merge::{resolve_api_key, CliOverrides};
