use crate::core::square::DEFAULT_SQUARE_DELAY;
use crate::core::ConfigProvider;
use crate::domain::model::LogFormat;
use crate::utils::error::{Result, ToolkitError};
use crate::utils::validation::{validate_one_of, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MAX_SQUARE_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub square: Option<SquareConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SquareConfig {
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ToolkitError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ToolkitError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DELAY_MS})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ToolkitError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        // 所有欄位皆為選填，只檢查有給的值
        if let Some(delay_ms) = self.square.as_ref().and_then(|s| s.delay_ms) {
            validate_range("square.delay_ms", delay_ms, 0, MAX_SQUARE_DELAY_MS)?;
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            validate_one_of("logging.format", format, &LogFormat::VALID)?;
        }

        Ok(())
    }

    pub fn set_square_delay_ms(&mut self, delay_ms: u64) {
        self.square.get_or_insert_with(SquareConfig::default).delay_ms = Some(delay_ms);
    }

    pub fn set_log_format(&mut self, format: LogFormat) {
        let name = match format {
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        };
        self.logging.get_or_insert_with(LoggingConfig::default).format = Some(name.to_string());
    }
}

impl ConfigProvider for TomlConfig {
    fn square_delay(&self) -> Duration {
        self.square
            .as_ref()
            .and_then(|s| s.delay_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SQUARE_DELAY)
    }

    fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
