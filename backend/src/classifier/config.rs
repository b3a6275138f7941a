use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const MODEL_CONFIG_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ModelConfigError {
    #[error("failed to read model config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse model config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("model config has no classes")]
    NoClasses,
    #[error("unsupported model config version {0} (expected {expected})", expected = MODEL_CONFIG_VERSION)]
    UnsupportedVersion(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub version: u32,
    pub classes: Vec<ClassSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSpec {
    pub label: String,
    pub centroid: [f64; 4],
}

impl Default for ModelConfig {
    fn default() -> Self {
        let class = |label: &str, centroid| ClassSpec {
            label: label.to_string(),
            centroid,
        };
        Self {
            version: MODEL_CONFIG_VERSION,
            classes: vec![
                class("setosa", [5.006, 3.428, 1.462, 0.246]),
                class("versicolor", [5.936, 2.770, 4.260, 1.326]),
                class("virginica", [6.588, 2.974, 5.552, 2.026]),
            ],
        }
    }
}

impl ModelConfig {
    pub fn load(path: &Path) -> Result<Self, ModelConfigError> {
        let config_str = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&config_str)
    }

    pub fn from_yaml_str(config_str: &str) -> Result<Self, ModelConfigError> {
        let config: ModelConfig = serde_yaml::from_str(config_str)?;
        if config.version != MODEL_CONFIG_VERSION {
            return Err(ModelConfigError::UnsupportedVersion(config.version));
        }
        if config.classes.is_empty() {
            return Err(ModelConfigError::NoClasses);
        }
        Ok(config)
    }
}
