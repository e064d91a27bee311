//! Board View Component
//!
//! Signed-in page: header bar, the column strip and the task detail panel.

use kanban_core::{BoardAction, Column, IdentityProvider};
use leptos::prelude::*;
use leptos_dragdrop::create_dnd_signals;

use crate::components::{ColumnForm, KanbanColumn, LanguageSwitcher, TaskDetail};
use crate::context::use_app_context;
use crate::i18n::Key;
use crate::store::{store_columns, store_dispatch, store_sign_out, store_user, use_app_store};

#[component]
pub fn BoardView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    provide_context(create_dnd_signals());

    let (adding_column, set_adding_column) = signal(false);

    let user_name = move || {
        store_user(&store)
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };

    let sign_out = move |_| {
        if let Err(e) = ctx.identity().sign_out() {
            tracing::error!(error = %e, "sign-out failed");
        }
        ctx.selected_task.set(None);
        store_sign_out(&store);
    };

    let add_column = move |(title, color): (String, String)| {
        store_dispatch(&store, BoardAction::AddColumn { title, color });
        set_adding_column.set(false);
    };

    view! {
        <div class="board-page">
            <header class="app-header">
                <h1>{move || ctx.t(Key::AppTitle)}</h1>
                <div class="header-actions">
                    <button type="button" class="primary-btn" on:click=move |_| set_adding_column.set(true)>
                        {move || ctx.t(Key::AddColumn)}
                    </button>
                    <LanguageSwitcher />
                    <span class="user-name">{user_name}</span>
                    <button type="button" class="secondary-btn" on:click=sign_out>
                        {move || ctx.t(Key::SignOut)}
                    </button>
                </div>
            </header>

            <Show when=move || adding_column.get()>
                <div class="modal-backdrop" on:click=move |_| set_adding_column.set(false)>
                    <ColumnForm
                        heading=Key::AddColumn
                        on_save=add_column
                        on_cancel=move |_| set_adding_column.set(false)
                    />
                </div>
            </Show>

            <main class="board">
                <For
                    each=move || store_columns(&store)
                    key=|column: &Column| column.clone()
                    children=|column| view! { <KanbanColumn column=column /> }
                />
            </main>

            <TaskDetail />
        </div>
    }
}
