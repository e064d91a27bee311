//! Task Card Component
//!
//! Draggable summary of a task inside a column.

use kanban_core::{Assignee, Task};
use leptos::prelude::*;
use leptos_dragdrop::{is_dragging_task, make_on_dragend, make_on_task_dragstart, DndSignals};

use crate::context::use_app_context;
use crate::i18n::priority_key;

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let dnd = expect_context::<DndSignals>();

    let dragging = is_dragging_task(dnd, task.id.clone());
    let open_id = task.id.clone();
    let priority = task.priority;
    let badge_class = format!("priority-badge priority-{}", priority.as_str().to_lowercase());

    view! {
        <div
            class=move || if dragging() { "task-card dragging" } else { "task-card" }
            draggable="true"
            on:dragstart=make_on_task_dragstart(dnd, task.id.clone())
            on:dragend=make_on_dragend(dnd)
            on:click=move |_| ctx.selected_task.set(Some(open_id.clone()))
        >
            <div class="task-card-header">
                <span class=badge_class>{move || ctx.t(priority_key(priority))}</span>
                {task.assignee_name.clone().map(|name| view! {
                    <span class="assignee-avatar" title=name.clone()>{Assignee::initials(&name)}</span>
                })}
            </div>
            <p class="task-title">{task.title.clone()}</p>
            {task.description.clone().map(|d| view! { <p class="task-description">{d}</p> })}
            {task.due_date.map(|d| view! {
                <span class="task-due-date">{d.format("%Y-%m-%d").to_string()}</span>
            })}
        </div>
    }
}
