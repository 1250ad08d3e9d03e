//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::use_session;
use ui::views::LoginForm;

use super::home::signed_in_landing;
use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Checked on mount only; a login from this page navigates via on_success.
    use_effect(move || {
        if let Some(route) = signed_in_landing(&session.peek()) {
            nav.replace(route);
        }
    });

    rsx! {
        div {
            class: "auth-page",
            h1 { class: "auth-title", "Login" }
            p { class: "muted", "Sign in to Taskboard" }

            LoginForm {
                on_success: move |_| {
                    nav.push(Route::Projects {});
                },
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
