//! Registration page view with email/password form.

use dioxus::prelude::*;
use ui::views::RegisterForm;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "auth-page",
            h1 { class: "auth-title", "Register" }
            p { class: "muted", "Create your Taskboard account" }

            RegisterForm {
                on_success: move |_| {
                    nav.push(Route::Login {});
                },
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
