//! Language Switcher Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::{Key, Locale};

/// Locale dropdown
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <label class="language-switcher">
            <span class="sr-only">{move || ctx.t(Key::Language)}</span>
            <select
                prop:value=move || ctx.locale.get().code()
                on:change=move |ev| {
                    if let Some(locale) = Locale::from_code(&event_target_value(&ev)) {
                        ctx.set_locale(locale);
                    }
                }
            >
                {Locale::ALL.iter().map(|locale| view! {
                    <option value=locale.code()>{locale.display_name()}</option>
                }).collect_view()}
            </select>
        </label>
    }
}
