use api::actions;
use dioxus::prelude::*;
use store::due_date;
use store::{Task, TaskStatus, TaskUpdate, User};

use crate::components::{Button, ButtonVariant, FormField, Label};
use crate::entitlement::use_can_write;
use crate::validation::{validate_task, FieldErrors};

use super::project_detail::use_detail;

/// Dialog for a single task: read-only details, plus edit and delete for
/// entitled sessions. Deleting takes two clicks.
#[component]
pub fn TaskDetail(task: Task, members: Vec<User>, on_close: EventHandler<()>) -> Element {
    let handle = use_detail();
    let entitled = use_can_write();
    let mut editing = use_signal(|| false);
    let mut confirming_delete = use_signal(|| false);

    if editing() && entitled {
        return rsx! {
            TaskEditForm {
                task,
                members,
                on_done: move |_| editing.set(false),
            }
        };
    }

    let task_id = task.id.clone();
    let delete = move |_: MouseEvent| {
        let task_id = task_id.clone();
        handle.run_silent(move |client, project_id| async move {
            actions::delete_task(&client, &project_id, &task_id).await
        });
        on_close.call(());
    };

    let assignee = task
        .assignee_id
        .as_ref()
        .and_then(|id| members.iter().find(|m| &m.id == id))
        .map(|m| m.full_name())
        .unwrap_or_else(|| "Unassigned".to_string());
    let due = task
        .due_date
        .as_deref()
        .and_then(due_date::to_display)
        .unwrap_or_else(|| "No due date".to_string());

    rsx! {
        div {
            class: "task-detail",
            div {
                class: "task-detail-header",
                h2 { "{task.title}" }
                div {
                    class: "form-actions",
                    if entitled {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| editing.set(true),
                            "Edit"
                        }
                        if confirming_delete() {
                            Button {
                                variant: ButtonVariant::Destructive,
                                onclick: delete,
                                "Confirm delete"
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| confirming_delete.set(false),
                                "Keep"
                            }
                        } else {
                            Button {
                                variant: ButtonVariant::Destructive,
                                onclick: move |_| confirming_delete.set(true),
                                "Delete"
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
            p { class: "muted", "{task.description}" }
            dl {
                class: "task-facts",
                dt { "Status" }
                dd { "{task.status.label()}" }
                dt { "Assignee" }
                dd { "{assignee}" }
                dt { "Due Date" }
                dd { "{due}" }
            }
        }
    }
}

#[component]
fn TaskEditForm(task: Task, members: Vec<User>, on_done: EventHandler<()>) -> Element {
    let handle = use_detail();
    let mut title = use_signal(|| task.title.clone());
    let mut description = use_signal(|| task.description.clone());
    let mut status = use_signal(|| task.status);
    let mut assignee = use_signal(|| task.assignee_id.clone().unwrap_or_default());
    let mut due = use_signal(|| {
        task.due_date
            .as_deref()
            .and_then(due_date::to_input)
            .unwrap_or_default()
    });
    let mut errors = use_signal(FieldErrors::default);

    let task_id = task.id.clone();
    let save = move |evt: FormEvent| {
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
        let update = TaskUpdate {
            title: Some(title().trim().to_string()),
            description: Some(description().trim().to_string()),
            status: Some(status()),
            assignee_id: Some((!assignee_id.is_empty()).then_some(assignee_id)),
            due_date: Some(wire_due),
        };
        let task_id = task_id.clone();
        handle.run_silent(move |client, project_id| async move {
            actions::update_task(&client, &project_id, &task_id, &update).await
        });
        on_done.call(());
    };

    rsx! {
        form {
            class: "task-edit",
            onsubmit: save,
            FormField {
                id: "task-edit-title",
                label: "Title",
                value: title(),
                error: errors().get("title"),
                oninput: move |v| title.set(v),
            }
            FormField {
                id: "task-edit-description",
                label: "Description",
                value: description(),
                error: errors().get("description"),
                oninput: move |v| description.set(v),
            }
            div {
                class: "form-grid",
                div {
                    class: "form-field",
                    Label { html_for: "task-edit-status", "Status" }
                    select {
                        id: "task-edit-status",
                        class: "select",
                        onchange: move |evt: FormEvent| {
                            if let Ok(parsed) = evt.value().parse::<TaskStatus>() {
                                status.set(parsed);
                            }
                        },
                        for option_status in TaskStatus::ALL {
                            option {
                                key: "{option_status.as_str()}",
                                value: "{option_status.as_str()}",
                                selected: option_status == status(),
                                "{option_status.label()}"
                            }
                        }
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "task-edit-assignee", "Assignee" }
                    select {
                        id: "task-edit-assignee",
                        class: "select",
                        onchange: move |evt: FormEvent| assignee.set(evt.value()),
                        option { value: "", selected: assignee().is_empty(), "Unassigned" }
                        for member in members.iter() {
                            option {
                                key: "{member.id}",
                                value: "{member.id}",
                                selected: member.id == assignee(),
                                "{member.full_name()}"
                            }
                        }
                    }
                }
            }
            FormField {
                id: "task-edit-due",
                label: "Due Date",
                input_type: "date",
                value: due(),
                error: errors().get("due_date"),
                oninput: move |v| due.set(v),
            }
            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    r#type: "button",
                    onclick: move |_| on_done.call(()),
                    "Cancel"
                }
                Button { r#type: "submit", "Save" }
            }
        }
    }
}
