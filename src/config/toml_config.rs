use crate::config::DEFAULT_INPUT_PATH;
use crate::core::{ConfigProvider, MissingInputPolicy};
use crate::utils::error::{FuelError, Result};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
    /// "fail" or "empty"
    pub on_missing: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| FuelError::ConfigError {
            message: format!(
                "Cannot read config file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FuelError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FUEL_INPUT_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FuelError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 命令列參數優先於檔案設定
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(input) = &cli.input {
            tracing::debug!("Input path overridden to: {}", input);
            self.input.path = Some(input.clone());
        }
        if cli.allow_missing_input {
            self.input.on_missing = Some("empty".to_string());
        }
        if cli.verbose {
            self.logging.get_or_insert_with(LoggingConfig::default).verbose = Some(true);
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        self.input.path.as_deref().unwrap_or(DEFAULT_INPUT_PATH)
    }

    fn missing_input_policy(&self) -> MissingInputPolicy {
        self.input
            .on_missing
            .as_deref()
            .and_then(MissingInputPolicy::from_name)
            .unwrap_or_default()
    }

    fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.path", self.input_path())?;

        if let Some(on_missing) = &self.input.on_missing {
            validate_one_of(
                "input.on_missing",
                on_missing,
                &MissingInputPolicy::VALID_VALUES,
            )?;
        }

        Ok(())
    }
}
