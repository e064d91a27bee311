//! Login Page Component
//!
//! Email-only sign-in form shown while no user is present.

use kanban_core::{AuthError, IdentityProvider};
use leptos::prelude::*;

use crate::components::LanguageSwitcher;
use crate::context::use_app_context;
use crate::i18n::Key;
use crate::store::{store_sign_in, use_app_store};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal::<Option<Key>>(None);

    let sign_in = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.identity().sign_in(&email.get()) {
            Ok(user) => {
                set_error.set(None);
                store_sign_in(&store, user);
            }
            Err(AuthError::InvalidEmail(_)) => set_error.set(Some(Key::EmailInvalid)),
            Err(e) => {
                tracing::error!(error = %e, "sign-in failed");
                set_error.set(Some(Key::LoginFailed));
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-toolbar">
                <LanguageSwitcher />
            </div>
            <form class="login-card" on:submit=sign_in>
                <h1>{move || ctx.t(Key::LoginTitle)}</h1>
                <p class="login-description">{move || ctx.t(Key::LoginDescription)}</p>

                <label for="login-email">{move || ctx.t(Key::EmailLabel)}</label>
                <input
                    id="login-email"
                    type="email"
                    placeholder=move || ctx.t(Key::EmailPlaceholder)
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                {move || error.get().map(|key| view! {
                    <p class="form-error" role="alert">{ctx.t(key)}</p>
                })}

                <button type="submit" class="primary-btn">{move || ctx.t(Key::SignIn)}</button>
            </form>
        </div>
    }
}
