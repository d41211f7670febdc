use crate::config::pricing::PricingTable;
use crate::domain::ports::PricingSource;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub calculator: Option<CalculatorInfo>,
    #[serde(default)]
    pub pricing: PricingTable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

impl PricingConfig {
    /// 從 TOML 檔案載入定價表
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析定價表
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;
        let config: PricingConfig = toml::from_str(&processed_content)?;
        tracing::debug!(
            "Parsed pricing config: currency={}, {} count bands",
            config.pricing.currency,
            config.pricing.video.count_bands.len()
        );
        Ok(config)
    }

    /// Renders the effective configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 替換環境變數 (例如 ${GRAPHIC_BASE_PRICE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QuoteError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn calculator_name(&self) -> &str {
        self.calculator
            .as_ref()
            .map(|info| info.name.as_str())
            .unwrap_or("quote-calc")
    }
}

impl PricingSource for PricingConfig {
    fn pricing(&self) -> &PricingTable {
        &self.pricing
    }
}

impl Validate for PricingConfig {
    fn validate(&self) -> Result<()> {
        if let Some(info) = &self.calculator {
            validate_non_empty_string("calculator.name", &info.name)?;
        }
        self.pricing.validate()
    }
}
