pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::file_source::FileSource;
pub use crate::core::{engine::FuelEngine, report::run};
pub use domain::model::{FuelReport, MissingInputPolicy, ModuleList};
pub use utils::error::{FuelError, Result};
