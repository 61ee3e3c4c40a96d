//! Configuration loading
//!
//! Environment variables (optionally seeded from a `.env` file) take
//! precedence; a JSON or TOML file is the fallback.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
