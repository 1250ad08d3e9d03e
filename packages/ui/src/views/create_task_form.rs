use api::actions;
use dioxus::prelude::*;
use store::{due_date, NewTask, TaskStatus, User};

use crate::components::{Button, FormField, Label};
use crate::validation::{validate_task, FieldErrors};

use super::project_detail::use_detail;

/// Inline form for adding a task to the current project.
#[component]
pub fn CreateTaskForm(members: Vec<User>, on_done: EventHandler<()>) -> Element {
    let handle = use_detail();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut due = use_signal(String::new);
    let mut assignee = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let problems = validate_task(&title(), &description(), &due());
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }
        let Ok(wire_due) = due_date::to_wire(&due()) else {
            return;
        };
        let assignee_id = assignee();
        let task = NewTask {
            title: title().trim().to_string(),
            description: description().trim().to_string(),
            due_date: wire_due,
            assignee_id: (!assignee_id.is_empty()).then_some(assignee_id),
            status: TaskStatus::Pending,
        };
        handle.run_silent(move |client, project_id| async move {
            actions::create_task(&client, &project_id, &task).await
        });
        on_done.call(());
    };

    rsx! {
        form {
            class: "create-task",
            onsubmit: submit,
            FormField {
                id: "task-title",
                label: "Title",
                value: title(),
                error: errors().get("title"),
                oninput: move |v| title.set(v),
            }
            FormField {
                id: "task-description",
                label: "Description",
                value: description(),
                error: errors().get("description"),
                oninput: move |v| description.set(v),
            }
            FormField {
                id: "task-due-date",
                label: "Due Date",
                input_type: "date",
                value: due(),
                error: errors().get("due_date"),
                oninput: move |v| due.set(v),
            }
            div {
                class: "form-field",
                Label { html_for: "task-assignee", "Assignee" }
                select {
                    id: "task-assignee",
                    class: "select",
                    onchange: move |evt: FormEvent| assignee.set(evt.value()),
                    option { value: "", "Select an assignee" }
                    for member in members.iter() {
                        option { key: "{member.id}", value: "{member.id}", "{member.full_name()}" }
                    }
                }
            }
            Button { r#type: "submit", class: "w-full", "Create Task" }
        }
    }
}
