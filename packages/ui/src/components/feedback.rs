use dioxus::prelude::*;

/// Red banner for a failed action. Renders nothing without a message.
#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            div { class: "error-banner", role: "alert", "{message}" }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner-container",
            div { class: "spinner" }
        }
    }
}

/// A full-screen overlay that centers its children in a card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
