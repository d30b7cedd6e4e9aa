use serde::{Deserialize, Serialize};

use crate::config::constants::{DEFAULT_API_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_MODEL};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: String,
    pub max_retries: u32,
    pub backup: bool,
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            backup: false,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
