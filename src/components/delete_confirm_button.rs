//! Delete Confirm Button Component
//!
//! Reusable inline delete confirmation button with confirm/cancel actions.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::Key;

/// Inline delete confirmation button
///
/// Shows a button labelled `label` initially. When clicked, shows the
/// `warning` text (if any) with ✓/✗ buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `label` - Text key for the initial button
/// * `warning` - Optional text key shown while confirming
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    label: Key,
    #[prop(optional)] warning: Option<Key>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                type="button"
                class=button_class.clone()
                title=move || ctx.t(label)
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "×"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                {move || warning.map(|w| view! { <span class="delete-confirm-warning">{ctx.t(w)}</span> })}
                <span class="delete-confirm-text">{move || ctx.t(Key::ConfirmDelete)}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
