use crate::core::command::Command;
use crate::utils::error::{OrderDeskError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A TOML scenario: settings plus an ordered list of store commands.
///
/// ```toml
/// [settings]
/// name = "morning-shift"
/// strict_assignment = false
///
/// [[steps]]
/// op = "add_order"
/// id = "A"
/// delivery_time = "09:00"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioScript {
    pub settings: ScenarioSettings,
    #[serde(default)]
    pub steps: Vec<Command>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSettings {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub strict_assignment: bool,
}

impl ScenarioScript {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| OrderDeskError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value. Unset variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OrderDeskError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for ScenarioScript {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("settings.name", &self.settings.name)?;

        for (index, step) in self.steps.iter().enumerate() {
            step.validate().map_err(|e| match e {
                OrderDeskError::InvalidConfigValueError {
                    field,
                    value,
                    reason,
                } => OrderDeskError::InvalidConfigValueError {
                    field: format!("steps[{}].{}", index, field),
                    value,
                    reason,
                },
                other => other,
            })?;
        }

        Ok(())
    }
}
