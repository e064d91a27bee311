//! Kanban Column Component
//!
//! One board column: drag handle, header actions, and its sorted task cards.
//! The whole column is a drop target for task moves and column reorders.

use kanban_core::{BoardAction, Column, DropIntent, DropZone, Task, TaskDraft};
use leptos::prelude::*;
use leptos_dragdrop::{
    drop_zone_for, is_dragging_column, make_on_column_body_dragstart, make_on_column_dragleave,
    make_on_column_dragover, make_on_column_drop, make_on_dragend, make_on_handle_dragstart, DndSignals,
};

use crate::components::{ColumnForm, DeleteConfirmButton, TaskCard, TaskForm};
use crate::context::use_app_context;
use crate::i18n::Key;
use crate::store::{store_dispatch, store_task_count, store_tasks_in_column, use_app_store};

#[component]
pub fn KanbanColumn(column: Column) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let dnd = expect_context::<DndSignals>();

    let (adding_task, set_adding_task) = signal(false);
    let (editing, set_editing) = signal(false);

    let zone = drop_zone_for(dnd, column.id.clone());
    let dragging_self = is_dragging_column(dnd, column.id.clone());
    let column_class = {
        let zone = zone.clone();
        move || {
            let mut class = String::from("kanban-column");
            // zone is None unless this column is hovered during a drag
            match zone() {
                DropZone::Task => class.push_str(" drag-over task-drop-zone"),
                DropZone::Column => class.push_str(" drag-over column-drop-zone"),
                DropZone::None => {}
            }
            if dragging_self() {
                class.push_str(" dragging");
            }
            class
        }
    };

    let on_drop = move |intent: DropIntent| {
        store_dispatch(&store, intent.into_action());
    };

    let tasks = {
        let id = column.id.clone();
        move || store_tasks_in_column(&store, &id)
    };
    let count = {
        let id = column.id.clone();
        move || store_task_count(&store, &id)
    };

    let save_column = {
        let id = column.id.clone();
        move |(title, color): (String, String)| {
            store_dispatch(&store, BoardAction::EditColumn { column_id: id.clone(), title, color });
            set_editing.set(false);
        }
    };
    let delete_column = {
        let id = column.id.clone();
        move |_: ()| {
            store_dispatch(&store, BoardAction::DeleteColumn { column_id: id.clone() });
        }
    };
    let add_task = {
        let id = column.id.clone();
        move |draft: TaskDraft| {
            store_dispatch(&store, BoardAction::AddTask { column_id: id.clone(), draft });
            set_adding_task.set(false);
        }
    };

    let empty_text = move || if zone() == DropZone::Task { ctx.t(Key::DropHere) } else { ctx.t(Key::NoTasks) };
    let is_empty = {
        let count = count.clone();
        move || count() == 0
    };
    let title = column.title.clone();
    let color = column.color.clone();

    view! {
        <section
            class=column_class
            style=format!("--column-color: {}", column.color)
            on:dragover=make_on_column_dragover(dnd, column.id.clone())
            on:dragleave=make_on_column_dragleave(dnd, column.id.clone())
            on:drop=make_on_column_drop(dnd, column.id.clone(), on_drop)
        >
            <header class="column-header">
                <span
                    class="drag-handle"
                    draggable="true"
                    title=move || ctx.t(Key::DragHandle)
                    on:dragstart=make_on_handle_dragstart(dnd, column.id.clone())
                    on:dragend=make_on_dragend(dnd)
                >
                    "⋮⋮"
                </span>
                <h2 class="column-title">{column.title.clone()}</h2>
                <span class="task-count">{count}</span>
                <div class="column-actions">
                    <button
                        type="button"
                        class="icon-btn"
                        title=move || ctx.t(Key::AddTask)
                        on:click=move |_| set_adding_task.set(true)
                    >
                        "+"
                    </button>
                    <button
                        type="button"
                        class="icon-btn"
                        title=move || ctx.t(Key::EditColumn)
                        on:click=move |_| set_editing.set(true)
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton
                        button_class="icon-btn delete-btn"
                        label=Key::DeleteColumn
                        warning=Key::DeleteColumnWarning
                        on_confirm=delete_column
                    />
                </div>
            </header>

            <Show when=move || editing.get()>
                <ColumnForm
                    heading=Key::EditColumn
                    initial_title=title.clone()
                    initial_color=color.clone()
                    on_save=save_column.clone()
                    on_cancel=move |_| set_editing.set(false)
                />
            </Show>

            <div class="column-body" on:dragstart=make_on_column_body_dragstart(dnd, column.id.clone())>
                <Show when=move || adding_task.get()>
                    <TaskForm
                        heading=Key::AddTask
                        on_save=add_task.clone()
                        on_cancel=move |_| set_adding_task.set(false)
                    />
                </Show>

                <For
                    each=tasks
                    key=|task: &Task| task.clone()
                    children=|task| view! { <TaskCard task=task /> }
                />

                <Show when=is_empty.clone()>
                    <p class="column-empty">{empty_text.clone()}</p>
                </Show>
            </div>
        </section>
    }
}
