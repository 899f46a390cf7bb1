use crate::config::types::Config;
use crate::ConfigError;

/// Validates a loaded configuration
///
/// Credentials must be non-empty; everything else about them is only
/// checked by the Notion API itself.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.notion.api_key.trim().is_empty() {
        return Err(ConfigError::Validation(
            "notion.api-key must not be empty".to_string(),
        ));
    }
    if config.notion.database_id.trim().is_empty() {
        return Err(ConfigError::Validation(
            "notion.database-id must not be empty".to_string(),
        ));
    }
    Ok(())
}
