use api::actions;
use dioxus::prelude::*;
use store::{Task, TaskStatus, User};

use crate::components::{Button, ButtonVariant, ModalOverlay};
use crate::entitlement::use_can_write;

use super::project_detail::use_detail;
use super::{CreateTaskForm, TaskDetail};

/// Tasks of the current project with inline status and assignee controls.
#[component]
pub fn TaskList(tasks: Vec<Task>, members: Vec<User>) -> Element {
    let entitled = use_can_write();
    let mut show_form = use_signal(|| false);
    let mut selected = use_signal(|| None::<String>);

    let open_task = selected().and_then(|id| tasks.iter().find(|t| t.id == id).cloned());

    rsx! {
        div {
            class: "card",
            div {
                class: "card-header",
                h2 { "Tasks" }
                if entitled {
                    Button {
                        onclick: move |_| show_form.set(!show_form()),
                        if show_form() { "Cancel" } else { "Add Task" }
                    }
                }
            }

            if show_form() && entitled {
                CreateTaskForm {
                    members: members.clone(),
                    on_done: move |_| show_form.set(false),
                }
            }

            div {
                class: "task-rows",
                for task in tasks.iter() {
                    TaskRow {
                        key: "{task.id}",
                        task: task.clone(),
                        members: members.clone(),
                        on_open: move |id| selected.set(Some(id)),
                    }
                }
                if tasks.is_empty() {
                    p { class: "muted empty", "No tasks yet" }
                }
            }
        }

        if let Some(task) = open_task {
            ModalOverlay {
                on_close: move |_| selected.set(None),
                TaskDetail {
                    task,
                    members: members.clone(),
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}

#[component]
fn TaskRow(task: Task, members: Vec<User>, on_open: EventHandler<String>) -> Element {
    let handle = use_detail();
    let entitled = use_can_write();

    let status_handle = handle.clone();
    let task_id = task.id.clone();
    let on_status = move |evt: FormEvent| {
        let Ok(status) = evt.value().parse::<TaskStatus>() else {
            tracing::warn!(value = %evt.value(), "ignoring unknown status");
            return;
        };
        let task_id = task_id.clone();
        status_handle.run_silent(move |client, project_id| async move {
            actions::set_task_status(&client, &project_id, &task_id, status).await
        });
    };

    let assignee_handle = handle.clone();
    let task_id = task.id.clone();
    let on_assignee = move |evt: FormEvent| {
        let value = evt.value();
        let assignee_id = (!value.is_empty()).then_some(value);
        let task_id = task_id.clone();
        assignee_handle.run_silent(move |client, project_id| async move {
            actions::set_task_assignee(&client, &project_id, &task_id, assignee_id).await
        });
    };

    let assignee_name = task
        .assignee_id
        .as_ref()
        .and_then(|id| members.iter().find(|m| &m.id == id))
        .map(|m| m.full_name())
        .unwrap_or_else(|| "Unassigned".to_string());
    let current_assignee = task.assignee_id.clone().unwrap_or_default();
    let open_id = task.id.clone();

    rsx! {
        div {
            class: "task-row",
            div {
                class: "task-summary",
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "task-title",
                    onclick: move |_| on_open.call(open_id.clone()),
                    "{task.title}"
                }
                p { class: "muted", "{task.description}" }
            }
            if entitled {
                div {
                    class: "task-controls",
                    select {
                        class: "select",
                        value: "{current_assignee}",
                        onchange: on_assignee,
                        option { value: "", selected: current_assignee.is_empty(), "Unassigned" }
                        for member in members.iter() {
                            option {
                                key: "{member.id}",
                                value: "{member.id}",
                                selected: member.id == current_assignee,
                                "{member.full_name()}"
                            }
                        }
                    }
                    select {
                        class: "select",
                        value: "{task.status.as_str()}",
                        onchange: on_status,
                        for status in TaskStatus::ALL {
                            option {
                                key: "{status.as_str()}",
                                value: "{status.as_str()}",
                                selected: status == task.status,
                                "{status.label()}"
                            }
                        }
                    }
                }
            } else {
                div {
                    class: "task-controls",
                    span { class: "muted", "{assignee_name}" }
                    span { class: "status-pill", "data-status": task.status.as_str(), "{task.status.label()}" }
                }
            }
        }
    }
}
