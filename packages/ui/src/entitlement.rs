//! Entitlement context: whether write affordances are rendered.

use api::{can_write, Capabilities};
use dioxus::prelude::*;

use crate::session::{use_api, use_session};

/// Resolves [`Capabilities`] whenever the session changes.
///
/// The context holds `None` while resolving and while signed out, which
/// [`can_write`] treats as not entitled.
#[component]
pub fn EntitlementProvider(children: Element) -> Element {
    let session = use_session();
    let api = use_api();
    let mut capabilities = use_context_provider(|| Signal::new(None::<Capabilities>));

    let _resolver = use_resource(move || async move {
        let signed_in = session.read().is_signed_in();
        capabilities.set(None);
        if !signed_in {
            return;
        }
        let resolved = Capabilities::resolve(&api.client()).await;
        tracing::debug!(subscribed = resolved.is_subscribed, "entitlement resolved");
        capabilities.set(Some(resolved));
    });

    rsx! {
        {children}
    }
}

pub fn use_entitlement() -> Signal<Option<Capabilities>> {
    use_context::<Signal<Option<Capabilities>>>()
}

pub fn use_can_write() -> bool {
    can_write(use_entitlement()())
}

/// Renders its children only for an entitled session.
#[component]
pub fn Entitled(children: Element) -> Element {
    if !use_can_write() {
        return rsx! {};
    }
    rsx! {
        {children}
    }
}

/// "Subscription Active" when entitled, otherwise a subscribe action.
#[component]
pub fn SubscriptionBadge(on_subscribe: EventHandler<()>) -> Element {
    if use_can_write() {
        return rsx! {
            span { class: "subscription-badge subscription-badge--active", "Subscription Active" }
        };
    }
    rsx! {
        button {
            class: "subscription-badge subscription-badge--inactive",
            onclick: move |_| on_subscribe.call(()),
            "Subscribe"
        }
    }
}
