//! App Configuration
//!
//! Storage keys, default locale, and log level. Defaults can be overridden
//! by a JSON object stored under `kanbanConfig`.

use serde::Deserialize;
use tracing::Level;

use crate::i18n::Locale;
use crate::storage;

/// Key holding optional config overrides
pub const CONFIG_KEY: &str = "kanbanConfig";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub columns_key: String,
    pub tasks_key: String,
    pub user_key: String,
    pub locale_key: String,
    pub default_locale: Locale,
    /// trace | debug | info | warn | error
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            columns_key: "kanbanColumns".to_string(),
            tasks_key: "kanbanTasks".to_string(),
            user_key: "kanbanUser".to_string(),
            locale_key: "kanbanLocale".to_string(),
            default_locale: Locale::En,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read overrides from local storage.
    ///
    /// Returns the config plus a parse error to report once logging is up.
    pub fn load() -> (Self, Option<String>) {
        match storage::read_key(CONFIG_KEY) {
            Some(raw) => match Self::from_json(&raw) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e.to_string())),
            },
            None => (Self::default(), None),
        }
    }

    /// Parsed log level; unknown values fall back to INFO
    pub fn max_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}
