//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The board session
//! is only touched through the helpers below, so every mutation goes through
//! `BoardSession::dispatch` and gets persisted.

use kanban_core::ordering::tasks_in_column;
use kanban_core::{Applied, BoardAction, BoardSession, Column, ColumnId, Task, TaskId, User};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::storage::LocalStorageStore;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Signed-in user and their board
    pub session: BoardSession<LocalStorageStore>,
}

impl AppState {
    pub fn new(store: LocalStorageStore) -> Self {
        Self {
            session: BoardSession::new(store),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_user(store: &AppStore) -> Option<User> {
    store.session().with(|s| s.user().cloned())
}

/// Columns in display order (empty while signed out)
pub fn store_columns(store: &AppStore) -> Vec<Column> {
    store
        .session()
        .with(|s| s.board().map(|b| b.columns().to_vec()).unwrap_or_default())
}

pub fn store_column(store: &AppStore, column_id: &ColumnId) -> Option<Column> {
    store
        .session()
        .with(|s| s.board().and_then(|b| b.column(column_id).cloned()))
}

/// Tasks of one column, sorted for display
pub fn store_tasks_in_column(store: &AppStore, column_id: &ColumnId) -> Vec<Task> {
    store.session().with(|s| {
        s.board()
            .map(|b| tasks_in_column(b, column_id).into_iter().cloned().collect())
            .unwrap_or_default()
    })
}

pub fn store_task(store: &AppStore, task_id: &TaskId) -> Option<Task> {
    store
        .session()
        .with(|s| s.board().and_then(|b| b.task(task_id).cloned()))
}

pub fn store_task_count(store: &AppStore, column_id: &ColumnId) -> usize {
    store
        .session()
        .with(|s| s.board().map(|b| b.task_count(column_id)).unwrap_or(0))
}

/// Apply a board action and persist it
pub fn store_dispatch(store: &AppStore, action: BoardAction) -> Option<Applied> {
    let mut applied = None;
    store.session().update(|s| applied = s.dispatch(action));
    applied
}

/// Resume the remembered user, or clear leftovers when there is none
pub fn store_restore(store: &AppStore, user: Option<User>) {
    store.session().update(|s| s.restore(user));
}

pub fn store_sign_in(store: &AppStore, user: User) {
    store.session().update(|s| s.sign_in(user));
}

pub fn store_sign_out(store: &AppStore) {
    store.session().update(|s| s.sign_out());
}
