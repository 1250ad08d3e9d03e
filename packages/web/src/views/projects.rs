use dioxus::prelude::*;
use ui::views::{ProjectDetailView, ProjectList};

use crate::Route;

#[component]
pub fn Projects() -> Element {
    let nav = use_navigator();

    rsx! {
        ProjectList {
            on_open: move |id| {
                nav.push(Route::ProjectDetail { id });
            },
        }
    }
}

#[component]
pub fn ProjectDetail(id: String) -> Element {
    rsx! {
        ProjectDetailView { project_id: id }
    }
}
