use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,
    /// Generic model name -> backend model name.
    #[serde(default)]
    pub model_aliases: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_name")]
    pub name: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Model used when a request names nothing the backend knows.
    pub model: String,
    /// Other backend models that may be requested by their own name.
    #[serde(default)]
    pub models: Vec<String>,
}

fn default_backend_name() -> String {
    "LM Studio".to_string()
}

fn default_api_base() -> String {
    "http://localhost:1234/v1".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn resolve_model(&self, model: &str) -> String {
        // Aliases win over direct names
        if let Some(target) = self.model_aliases.get(model) {
            return target.clone();
        }

        if model == self.backend.model || self.backend.models.iter().any(|m| m == model) {
            return model.to_string();
        }

        self.backend.model.clone()
    }
}
