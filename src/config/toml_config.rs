use crate::core::enrollment::EmptyCheckout;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub checkout: CheckoutConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: "./storefront-data".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// 允許空的選課清單結帳 (總額 0)
    pub allow_empty: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "Rand".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<LogFormat>,
}

impl StorefrontConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StorefrontError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StorefrontError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STOREFRONT_HOME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StorefrontError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn store_path(&self) -> &str {
        &self.store.path
    }

    pub fn empty_checkout(&self) -> EmptyCheckout {
        if self.checkout.allow_empty.unwrap_or(false) {
            EmptyCheckout::Allow
        } else {
            EmptyCheckout::Reject
        }
    }

    pub fn currency(&self) -> &str {
        &self.display.currency
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.format.unwrap_or_default()
    }
}

impl Validate for StorefrontConfig {
    fn validate(&self) -> Result<()> {
        validate_path("store.path", &self.store.path)?;

        // ${VAR} left in place means the variable was not set
        if self.store.path.contains("${") {
            return Err(StorefrontError::InvalidConfigValueError {
                field: "store.path".to_string(),
                value: self.store.path.clone(),
                reason: "Unresolved environment variable".to_string(),
            });
        }

        validate_non_empty_string("display.currency", &self.display.currency)?;
        Ok(())
    }
}
