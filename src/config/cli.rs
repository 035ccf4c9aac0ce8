use crate::config::DEFAULT_INPUT_PATH;
use crate::core::{ConfigProvider, MissingInputPolicy};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "fuel-counter")]
#[command(about = "Computes fuel requirements for a list of spacecraft module masses")]
pub struct CliConfig {
    /// File with one module mass per line [default: input]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Treat a missing input file as an empty module list
    #[arg(long)]
    pub allow_missing_input: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or(DEFAULT_INPUT_PATH)
    }

    fn missing_input_policy(&self) -> MissingInputPolicy {
        if self.allow_missing_input {
            MissingInputPolicy::Empty
        } else {
            MissingInputPolicy::Fail
        }
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("--input", self.input_path())?;
        if let Some(config) = &self.config {
            validate_path("--config", config)?;
        }
        Ok(())
    }
}
