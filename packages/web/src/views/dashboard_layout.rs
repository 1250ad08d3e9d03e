use dioxus::prelude::*;
use ui::use_session;
use ui::views::DashboardNav;

use crate::Route;

/// Chrome shared by every `/dashboard` route. Without a session nothing is
/// rendered and the user is sent to the login page.
#[component]
pub fn DashboardLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_effect(move || {
        if !session.read().is_signed_in() {
            nav.replace(Route::Login {});
        }
    });

    if !session.read().is_signed_in() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "dashboard",
            DashboardNav {
                on_projects: move |_| {
                    nav.push(Route::Projects {});
                },
                on_subscription: move |_| {
                    nav.push(Route::Subscription {});
                },
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
            main {
                class: "dashboard-main",
                Outlet::<Route> {}
            }
        }
    }
}
