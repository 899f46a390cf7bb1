use serde::Deserialize;

/// Main configuration structure for apptrack
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub notion: NotionConfig,
}

/// Notion record-store credentials
#[derive(Debug, Clone, Deserialize)]
pub struct NotionConfig {
    /// Integration token used as the bearer credential
    #[serde(rename = "api-key")]
    pub api_key: String,

    /// Id of the tracking database new pages are created in
    #[serde(rename = "database-id")]
    pub database_id: String,
}
