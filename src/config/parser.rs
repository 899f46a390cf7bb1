use std::path::Path;

use crate::config::types::{Config, NotionConfig};
use crate::config::validation::validate;
use crate::ConfigError;

/// Environment variable holding the Notion integration token
pub const API_KEY_ENV: &str = "APPTRACK_NOTION_API_KEY";

/// Environment variable holding the tracking database id
pub const DATABASE_ID_ENV: &str = "APPTRACK_NOTION_DATABASE_ID";

/// Loads and parses a configuration file from the given path
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use apptrack::config::load_config;
///
/// let config = load_config(Path::new("apptrack.toml")).unwrap();
/// println!("Database: {}", config.notion.database_id);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Builds a configuration from the environment variables
pub fn config_from_env() -> Result<Config, ConfigError> {
    let api_key = std::env::var(API_KEY_ENV)
        .map_err(|_| ConfigError::MissingCredentials(format!("{} is not set", API_KEY_ENV)))?;
    let database_id = std::env::var(DATABASE_ID_ENV)
        .map_err(|_| ConfigError::MissingCredentials(format!("{} is not set", DATABASE_ID_ENV)))?;

    let config = Config {
        notion: NotionConfig {
            api_key,
            database_id,
        },
    };
    validate(&config)?;
    Ok(config)
}

/// Resolves the configuration: an explicit file when given, the environment
/// otherwise
pub fn resolve_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => config_from_env(),
    }
}
