//! Notion record-store client
//!
//! Builds the page-creation payload from a finished [`JobRecord`] and issues
//! the request. Credentials arrive as explicit configuration through the
//! constructor; nothing here reads the environment.

use chrono::Local;
use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::NotionConfig;
use crate::record::JobRecord;

const NOTION_API_URL: &str = "https://api.notion.com/v1/pages";
const NOTION_VERSION: &str = "2022-06-28";

/// Errors from the record-store boundary
#[derive(Debug, Error)]
pub enum NotionError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Notion API returned {status} (code: {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
}

/// How the new entry is filed in the tracking database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    /// Applied today; the entry gets a Date Applied stamp
    Applied,

    /// Saved to apply later; no date is stamped
    ReadyToApply,
}

impl ApplicationStatus {
    /// The status option name as it appears in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::ReadyToApply => "Ready to apply",
        }
    }

    fn stamps_date(&self) -> bool {
        matches!(self, ApplicationStatus::Applied)
    }
}

/// Client for creating pages in the tracking database
pub struct NotionClient {
    client: Client,
    api_url: String,
    api_key: String,
    database_id: String,
}

impl NotionClient {
    /// Creates a client from explicit credentials
    pub fn new(config: &NotionConfig) -> Result<Self, NotionError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_url: NOTION_API_URL.to_string(),
            api_key: config.api_key.clone(),
            database_id: config.database_id.clone(),
        })
    }

    /// Overrides the API endpoint so tests can target a mock server
    #[cfg(test)]
    fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }

    /// Creates the database entry for a finished record.
    ///
    /// On a non-success response the body's `code` and `message` fields are
    /// surfaced in the error when present.
    pub async fn create_entry(
        &self,
        record: &JobRecord,
        status: ApplicationStatus,
    ) -> Result<(), NotionError> {
        let applied_on = if status.stamps_date() {
            Some(Local::now().format("%Y-%m-%d").to_string())
        } else {
            None
        };
        let payload = build_payload(record, status, &self.database_id, applied_on.as_deref());

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Notion-Version", NOTION_VERSION)
            .json(&payload)
            .send()
            .await?;

        let status_code = response.status();
        if status_code.is_success() {
            tracing::info!("Entry created in Notion database");
            return Ok(());
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        let code = body
            .get("code")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown")
            .to_string();
        let message = body
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("no message")
            .to_string();
        Err(NotionError::Api {
            status: status_code.as_u16(),
            code,
            message,
        })
    }
}

/// Builds the page-creation payload for a record.
///
/// Property shapes match the tracking database schema: Company is the title
/// property, Position and Location are rich text, Link is a url, Status is a
/// status option, and Date Applied is only present when a date is given.
pub fn build_payload(
    record: &JobRecord,
    status: ApplicationStatus,
    database_id: &str,
    applied_on: Option<&str>,
) -> Value {
    let mut properties = serde_json::Map::new();

    properties.insert(
        "Company".to_string(),
        json!({
            "type": "title",
            "title": [{
                "type": "text",
                "text": { "content": record.company.as_deref().unwrap_or_default() },
            }],
        }),
    );
    properties.insert(
        "Position".to_string(),
        json!({
            "rich_text": [{
                "type": "text",
                "text": { "content": record.position.as_deref().unwrap_or_default() },
            }],
        }),
    );
    properties.insert(
        "Location".to_string(),
        json!({
            "rich_text": [{
                "type": "text",
                "text": { "content": record.location.as_deref().unwrap_or_default() },
            }],
        }),
    );
    properties.insert(
        "Link".to_string(),
        json!({
            "type": "url",
            "url": record.link,
        }),
    );
    properties.insert(
        "Status".to_string(),
        json!({
            "type": "status",
            "status": { "name": status.as_str() },
        }),
    );
    if let Some(date) = applied_on {
        properties.insert(
            "Date Applied".to_string(),
            json!({
                "type": "date",
                "date": { "start": date },
            }),
        );
    }

    json!({
        "parent": {
            "type": "database_id",
            "database_id": database_id,
        },
        "properties": properties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Field;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn finished_record() -> JobRecord {
        let mut record = JobRecord::new();
        record.set(Field::Company, "Acme Corp".to_string());
        record.set(Field::Position, "Senior Engineer".to_string());
        record.set(Field::Location, "Berlin".to_string());
        record.link = "https://www.linkedin.com/jobs/view/3769215487".to_string();
        record
    }

    #[test]
    fn test_payload_property_shapes() {
        let payload = build_payload(
            &finished_record(),
            ApplicationStatus::Applied,
            "db-123",
            Some("2026-08-27"),
        );

        assert_eq!(payload["parent"]["type"], "database_id");
        assert_eq!(payload["parent"]["database_id"], "db-123");

        let props = &payload["properties"];
        assert_eq!(props["Company"]["title"][0]["text"]["content"], "Acme Corp");
        assert_eq!(
            props["Position"]["rich_text"][0]["text"]["content"],
            "Senior Engineer"
        );
        assert_eq!(props["Location"]["rich_text"][0]["text"]["content"], "Berlin");
        assert_eq!(
            props["Link"]["url"],
            "https://www.linkedin.com/jobs/view/3769215487"
        );
        assert_eq!(props["Status"]["status"]["name"], "Applied");
        assert_eq!(props["Date Applied"]["date"]["start"], "2026-08-27");
    }

    #[test]
    fn test_saved_entry_has_no_date() {
        let payload = build_payload(
            &finished_record(),
            ApplicationStatus::ReadyToApply,
            "db-123",
            None,
        );

        let props = &payload["properties"];
        assert_eq!(props["Status"]["status"]["name"], "Ready to apply");
        assert!(props.get("Date Applied").is_none());
    }

    #[tokio::test]
    async fn test_create_entry_sends_auth_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/pages"))
            .and(header("Authorization", "Bearer secret-token"))
            .and(header("Notion-Version", NOTION_VERSION))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "page-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let config = NotionConfig {
            api_key: "secret-token".to_string(),
            database_id: "db-123".to_string(),
        };
        let client = NotionClient::new(&config)
            .unwrap()
            .with_api_url(format!("{}/v1/pages", server.uri()));

        client
            .create_entry(&finished_record(), ApplicationStatus::Applied)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_entry_surfaces_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": "validation_error",
                "message": "Status is expected to be status.",
            })))
            .mount(&server)
            .await;

        let config = NotionConfig {
            api_key: "secret-token".to_string(),
            database_id: "db-123".to_string(),
        };
        let client = NotionClient::new(&config)
            .unwrap()
            .with_api_url(server.uri());

        let err = client
            .create_entry(&finished_record(), ApplicationStatus::Applied)
            .await
            .unwrap_err();

        match err {
            NotionError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(code, "validation_error");
                assert_eq!(message, "Status is expected to be status.");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }
}
