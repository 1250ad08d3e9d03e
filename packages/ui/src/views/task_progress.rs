use dioxus::prelude::*;
use store::{Task, TaskProgress};

/// Stacked completed / in-progress bar with status counts.
#[component]
pub fn TaskProgressBar(tasks: Vec<Task>) -> Element {
    let progress = TaskProgress::from_tasks(&tasks);
    let completed = progress.completed_percent();
    let in_progress = progress.in_progress_percent();
    let headline = progress.completed_percent_rounded();

    rsx! {
        div {
            class: "card task-progress",
            div {
                class: "card-header",
                h2 { "Project Progress" }
                span { class: "progress-headline", "{headline}%" }
            }
            div {
                class: "progress-track",
                div { class: "progress-completed", style: "width: {completed:.1}%" }
                div { class: "progress-in-progress", style: "width: {in_progress:.1}%" }
            }
            div {
                class: "progress-counts",
                span { "Total: {progress.total}" }
                span { class: "status-completed", "Completed: {progress.completed}" }
                span { class: "status-in-progress", "In Progress: {progress.in_progress}" }
                span { class: "status-pending", "Pending: {progress.pending}" }
            }
        }
    }
}
