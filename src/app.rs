//! Kanban Board Frontend App
//!
//! Provides the store and UI context, restores a remembered user and
//! switches between the login page and the board.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BoardView, LoginPage};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::storage;
use crate::store::{store_restore, store_user, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new(storage::board_store(&config)));
    let ctx = AppContext::new(config);
    provide_context(store);
    provide_context(ctx);

    store_restore(&store, ctx.current_user());

    view! {
        <Show when=move || store_user(&store).is_some() fallback=|| view! { <LoginPage /> }>
            <BoardView />
        </Show>
    }
}
