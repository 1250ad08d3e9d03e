use dioxus::prelude::*;
use ui::{use_session, SessionState};

use crate::Route;

/// Where a page meant for signed-out visitors sends a signed-in one.
pub(crate) fn signed_in_landing(state: &SessionState) -> Option<Route> {
    state.is_signed_in().then_some(Route::Projects {})
}

/// Landing page. Signed-in users go straight to their projects.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_effect(move || {
        if let Some(route) = signed_in_landing(&session.read()) {
            nav.replace(route);
        }
    });

    rsx! {
        div {
            class: "auth-page",
            h1 { class: "auth-title", "Taskboard" }
            p { class: "muted", "Plan projects, share them with your team and track every task." }
            div {
                class: "home-actions",
                Link { class: "home-link home-link--primary", to: Route::Login {}, "Sign in" }
                Link { class: "home-link", to: Route::Register {}, "Create account" }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "auth-page",
            h1 { class: "auth-title", "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back home" }
        }
    }
}
