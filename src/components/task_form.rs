//! Task Form Component
//!
//! Add/edit form for a task: title, description, priority, assignee, due date.

use kanban_core::domain::ASSIGNEES;
use kanban_core::{Priority, TaskDraft};
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::{priority_key, Key};
use crate::validation::{task_draft, FormError, TaskFormInput, DESCRIPTION_MAX, TASK_TITLE_MAX, UNASSIGNED};

#[component]
pub fn TaskForm(
    heading: Key,
    /// Prefilled values (empty draft when adding)
    #[prop(optional)] initial: TaskDraft,
    #[prop(into)] on_save: Callback<TaskDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let input = RwSignal::new(TaskFormInput::from_draft(&initial));
    let (error, set_error) = signal::<Option<FormError>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match input.with(task_draft) {
            Ok(draft) => {
                set_error.set(None);
                on_save.run(draft);
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <form class="task-form" on:submit=submit on:click=|ev| ev.stop_propagation()>
            <h3>{move || ctx.t(heading)}</h3>

            <label>
                <span>{move || ctx.t(Key::TaskTitle)}</span>
                <input
                    type="text"
                    maxlength=TASK_TITLE_MAX
                    placeholder=move || ctx.t(Key::TaskTitlePlaceholder)
                    prop:value=move || input.with(|i| i.title.clone())
                    on:input=move |ev| input.update(|i| i.title = event_target_value(&ev))
                />
            </label>

            <label>
                <span>{move || ctx.t(Key::Description)}</span>
                <textarea
                    rows=3
                    maxlength=DESCRIPTION_MAX
                    placeholder=move || ctx.t(Key::DescriptionPlaceholder)
                    prop:value=move || input.with(|i| i.description.clone())
                    on:input=move |ev| input.update(|i| i.description = event_target_value(&ev))
                ></textarea>
            </label>

            <div class="form-row">
                <label>
                    <span>{move || ctx.t(Key::Priority)}</span>
                    <select
                        prop:value=move || input.with(|i| i.priority.clone())
                        on:change=move |ev| input.update(|i| i.priority = event_target_value(&ev))
                    >
                        {Priority::ALL.iter().map(|p| {
                            let p = *p;
                            view! { <option value=p.as_str()>{move || ctx.t(priority_key(p))}</option> }
                        }).collect_view()}
                    </select>
                </label>

                <label>
                    <span>{move || ctx.t(Key::Assignee)}</span>
                    <select
                        prop:value=move || input.with(|i| i.assignee_id.clone())
                        on:change=move |ev| input.update(|i| i.assignee_id = event_target_value(&ev))
                    >
                        <option value=UNASSIGNED>{move || ctx.t(Key::Unassigned)}</option>
                        {ASSIGNEES.iter().map(|a| view! {
                            <option value=a.id>{a.name}</option>
                        }).collect_view()}
                    </select>
                </label>

                <label>
                    <span>{move || ctx.t(Key::DueDate)}</span>
                    <input
                        type="date"
                        prop:value=move || input.with(|i| i.due_date.clone())
                        on:input=move |ev| input.update(|i| i.due_date = event_target_value(&ev))
                    />
                </label>
            </div>

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
