use dioxus::prelude::*;

use crate::entitlement::SubscriptionBadge;
use crate::session::{use_session, LogoutButton};

/// Top bar of the dashboard. Navigation targets are supplied by the platform
/// crate, which owns the router.
#[component]
pub fn DashboardNav(
    on_projects: EventHandler<()>,
    on_subscription: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let session = use_session();
    let greeting = session
        .read()
        .user
        .as_ref()
        .map(|u| format!("{} {}", u.first_name, u.last_name));

    rsx! {
        nav {
            class: "dashboard-nav",
            h2 { class: "brand", "Taskboard" }
            div {
                class: "nav-actions",
                if let Some(name) = greeting {
                    span { class: "muted", "{name}" }
                }
                SubscriptionBadge { on_subscribe: move |_| on_subscription.call(()) }
                button {
                    class: "nav-link",
                    onclick: move |_| on_projects.call(()),
                    "Projects"
                }
                LogoutButton {
                    class: "nav-link",
                    on_logout: move |_| on_logout.call(()),
                }
            }
        }
    }
}
