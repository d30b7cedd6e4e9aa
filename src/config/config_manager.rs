use std::fs;
use std::path::PathBuf;

use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{LazyDevError, LazyDevResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load() -> LazyDevResult<Config> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                log::info!("📋 Loading config from: {}", path.display());
                let content = fs::read_to_string(&path)
                    .map_err(|e| LazyDevError::config_error(&path, &e.to_string()))?;
                let config: Config = toml::from_str(&content)
                    .map_err(|e| LazyDevError::config_error(&path, e.message()))?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    pub fn create_sample_config() -> LazyDevResult<PathBuf> {
        let path = Self::config_path().ok_or_else(|| {
            LazyDevError::invalid_argument("could not determine the home directory", None)
        })?;

        if path.exists() {
            return Err(LazyDevError::config_error(
                &path,
                "a configuration file already exists; edit it instead",
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| LazyDevError::config_error(&path, &e.to_string()))?;
        }

        let sample_config = r#"# LazyDev Configuration

# Model identifier sent with every request
model = "gpt-4-turbo"

# How many times to re-ask the model when its response does not parse
max_retries = 3

# Write <file>.bak with the original contents before overwriting
backup = false

# Chat-completions endpoint base URL
api_base_url = "https://api.openai.com/v1"
"#;

        fs::write(&path, sample_config)
            .map_err(|e| LazyDevError::config_error(&path, &e.to_string()))?;

        Ok(path)
    }
}
