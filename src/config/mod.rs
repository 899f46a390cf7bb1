//! Configuration loading and validation
//!
//! Credentials for the Notion record store come from a TOML file or, when
//! none is given, from the environment. Either way they end up in an
//! explicit [`Config`] that is handed to the client constructor — nothing
//! downstream reads the environment ambiently.

pub mod parser;
pub mod types;
pub mod validation;

pub use parser::{config_from_env, load_config, resolve_config, API_KEY_ENV, DATABASE_ID_ENV};
pub use types::{Config, NotionConfig};
pub use validation::validate;
