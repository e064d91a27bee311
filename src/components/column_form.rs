//! Column Form Component
//!
//! Add/edit form for a column's title and HEX color.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::Key;
use crate::validation::{column_fields, FormError, COLUMN_TITLE_MAX};

/// Color used when adding a new column
pub const NEW_COLUMN_COLOR: &str = "#E5E7EB";

#[component]
pub fn ColumnForm(
    /// Heading shown above the fields
    heading: Key,
    #[prop(into, optional)] initial_title: String,
    #[prop(into, default = NEW_COLUMN_COLOR.to_string())] initial_color: String,
    /// Receives the validated (title, color)
    #[prop(into)] on_save: Callback<(String, String)>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(initial_title);
    let (color, set_color) = signal(initial_color);
    let (error, set_error) = signal::<Option<FormError>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match column_fields(&title.get(), &color.get()) {
            Ok(fields) => {
                set_error.set(None);
                on_save.run(fields);
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <form class="column-form" on:submit=submit on:click=|ev| ev.stop_propagation()>
            <h3>{move || ctx.t(heading)}</h3>

            <label>
                <span>{move || ctx.t(Key::ColumnTitle)}</span>
                <input
                    type="text"
                    maxlength=COLUMN_TITLE_MAX
                    placeholder=move || ctx.t(Key::ColumnTitlePlaceholder)
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </label>

            <label>
                <span>{move || ctx.t(Key::ColumnColor)}</span>
                <div class="color-row">
                    <input
                        type="color"
                        prop:value=move || color.get()
                        on:input=move |ev| set_color.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        class="color-text"
                        prop:value=move || color.get()
                        on:input=move |ev| set_color.set(event_target_value(&ev))
                    />
                </div>
            </label>

            {move || error.get().map(|e| view! {
                <p class="form-error" role="alert">{ctx.t(e.message_key())}</p>
            })}

            <div class="form-actions">
                <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                    {move || ctx.t(Key::Cancel)}
                </button>
                <button type="submit" class="primary-btn">{move || ctx.t(Key::Save)}</button>
            </div>
        </form>
    }
}
