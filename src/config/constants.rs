pub const DEFAULT_MODEL: &str = "gpt-4-turbo";
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const OPENAI_ORGANIZATION_ENV: &str = "OPENAI_ORGANIZATION";
pub const OPENAI_PROJECT_ENV: &str = "OPENAI_PROJECT";

pub const CONFIG_DIR_NAME: &str = "lazydev";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Placeholder names the rendered message template is built from
pub const FILE_CONTENTS_VAR: &str = "file_contents";
pub const PROMPT_VAR: &str = "prompt";

pub const BACKUP_SUFFIX: &str = "bak";
