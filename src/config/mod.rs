#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

/// Input file used when nothing else is configured.
pub const DEFAULT_INPUT_PATH: &str = "input";
