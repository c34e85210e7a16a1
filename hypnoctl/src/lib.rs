//! Command-line browser for the HypnoCentral portfolio.
//!
//! The library half holds the config loader, the clap definitions and the
//! renderers so they can be tested without spawning the binary.

pub mod cli;
pub mod loader;
pub mod models;

pub use cli::{Cli, Command, RunSettings, run};
pub use loader::{ConfigLoader, error::ConfigLoadError};
pub use models::{CliConfig, CliConfigSource, OutputFormat};
