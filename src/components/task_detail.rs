//! Task Detail Component
//!
//! Side panel for the selected task: full fields, edit and delete.

use kanban_core::{Assignee, BoardAction, TaskDraft};
use leptos::either::Either;
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, TaskForm};
use crate::context::use_app_context;
use crate::i18n::{priority_key, Key};
use crate::store::{store_column, store_dispatch, store_task, use_app_store};

#[component]
pub fn TaskDetail() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (editing, set_editing) = signal(false);

    let close = move || {
        set_editing.set(false);
        ctx.selected_task.set(None);
    };

    move || {
        // Closes itself once the task is gone (deleted, or its column was)
        let task = ctx.selected_task.get().and_then(|id| store_task(&store, &id))?;
        let status = store_column(&store, &task.column_id).map(|c| c.title).unwrap_or_default();
        let task_id = task.id.clone();

        let body = if editing.get() {
            let task_id = task_id.clone();
            Either::Left(view! {
                <TaskForm
                    heading=Key::EditTask
                    initial=task.to_draft()
                    on_save=move |draft: TaskDraft| {
                        store_dispatch(&store, BoardAction::EditTask { task_id: task_id.clone(), draft });
                        set_editing.set(false);
                    }
                    on_cancel=move |_| set_editing.set(false)
                />
            })
        } else {
            let priority = task.priority;
            let delete_id = task_id.clone();
            Either::Right(view! {
                <div class="task-detail-body">
                    <h2 class="task-detail-title">{task.title.clone()}</h2>
                    <dl class="task-detail-fields">
                        <dt>{move || ctx.t(Key::Status)}</dt>
                        <dd>{status}</dd>
                        <dt>{move || ctx.t(Key::Priority)}</dt>
                        <dd>
                            <span class=format!("priority-badge priority-{}", priority.as_str().to_lowercase())>
                                {move || ctx.t(priority_key(priority))}
                            </span>
                        </dd>
                        <dt>{move || ctx.t(Key::Assignee)}</dt>
                        <dd>
                            {match task.assignee_name.clone() {
                                Some(name) => Either::Left(view! {
                                    <span class="assignee-avatar">{Assignee::initials(&name)}</span>
                                    <span class="assignee-name">{name}</span>
                                }),
                                None => Either::Right(move || ctx.t(Key::Unassigned)),
                            }}
                        </dd>
                        <dt>{move || ctx.t(Key::DueDate)}</dt>
                        <dd>
                            {match task.due_date {
                                Some(d) => Either::Left(d.format("%Y-%m-%d").to_string()),
                                None => Either::Right(move || ctx.t(Key::NoDueDate)),
                            }}
                        </dd>
                    </dl>
                    {task.description.clone().map(|d| view! {
                        <div class="task-detail-description">
                            <h3>{move || ctx.t(Key::Description)}</h3>
                            <p>{d}</p>
                        </div>
                    })}
                    <div class="form-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| set_editing.set(true)>
                            {move || ctx.t(Key::Edit)}
                        </button>
                        <DeleteConfirmButton
                            button_class="delete-btn"
                            label=Key::DeleteTask
                            on_confirm=move |_| {
                                store_dispatch(&store, BoardAction::DeleteTask { task_id: delete_id.clone() });
                                close();
                            }
                        />
                    </div>
                </div>
            })
        };

        Some(view! {
            <div class="modal-backdrop" on:click=move |_| close()>
                <aside class="task-detail" on:click=|ev| ev.stop_propagation()>
                    <button
                        type="button"
                        class="close-btn"
                        title=move || ctx.t(Key::Close)
                        on:click=move |_| close()
                    >
                        "×"
                    </button>
                    {body}
                </aside>
            </div>
        })
    }
}
