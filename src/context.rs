//! Application Context
//!
//! Shared UI state provided via Leptos Context API.

use kanban_core::{IdentityProvider, TaskId};
use leptos::prelude::*;

use crate::auth::LocalIdentity;
use crate::config::AppConfig;
use crate::i18n::{self, Key, Locale};
use crate::storage;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current UI language - read
    pub locale: ReadSignal<Locale>,
    /// Current UI language - write
    set_locale: WriteSignal<Locale>,
    /// Task whose detail panel is open
    pub selected_task: RwSignal<Option<TaskId>>,
    config: StoredValue<AppConfig>,
    identity: StoredValue<LocalIdentity>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let stored_locale = storage::read_key(&config.locale_key).and_then(|code| Locale::from_code(&code));
        let (locale, set_locale) = signal(stored_locale.unwrap_or(config.default_locale));
        let identity = LocalIdentity::new(&config);
        Self {
            locale,
            set_locale,
            selected_task: RwSignal::new(None),
            config: StoredValue::new(config),
            identity: StoredValue::new(identity),
        }
    }

    /// Translate a key in the current locale (reactive)
    pub fn t(&self, key: Key) -> &'static str {
        i18n::t(self.locale.get(), key)
    }

    /// Switch language and remember it
    pub fn set_locale(&self, locale: Locale) {
        let key = self.config.with_value(|c| c.locale_key.clone());
        storage::write_key(&key, locale.code());
        self.set_locale.set(locale);
    }

    pub fn identity(&self) -> LocalIdentity {
        self.identity.get_value()
    }

    pub fn current_user(&self) -> Option<kanban_core::User> {
        self.identity.with_value(|i| i.current_user())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
