use api::actions;
use dioxus::prelude::*;
use store::Product;

use crate::components::{Button, ErrorBanner, Spinner};
use crate::session::use_api;

/// Hand the browser over to the checkout page.
fn redirect(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to redirect to checkout: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(url, "checkout session created");
    }
}

/// Available plans, each with a "Subscribe Now" button that starts checkout.
#[component]
pub fn SubscriptionPlans() -> Element {
    let api = use_api();
    let mut products = use_signal(Vec::<Product>::new);
    let mut loading = use_signal(|| true);
    let mut processing = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let _loader = use_resource(move || async move {
        match actions::load_products(&api.client()).await {
            Ok(list) => products.set(list),
            Err(err) => error.set(Some(err.message)),
        }
        loading.set(false);
    });

    let subscribe = move |price_id: String| {
        processing.set(true);
        spawn(async move {
            match actions::start_checkout(&api.client(), &price_id).await {
                Ok(url) => redirect(&url),
                Err(err) => error.set(Some(err.message)),
            }
            processing.set(false);
        });
    };

    if loading() {
        return rsx! { Spinner {} };
    }

    rsx! {
        div {
            class: "plans",
            div {
                class: "plans-header",
                h2 { "Choose your plan" }
                p { class: "muted", "Select the perfect plan for your needs" }
            }

            ErrorBanner { message: error() }

            div {
                class: "plans-grid",
                for product in products() {
                    div {
                        key: "{product.id}",
                        class: "card plan",
                        h3 { "{product.name}" }
                        p {
                            class: "plan-price",
                            span { class: "plan-amount", "{product.price_label()}" }
                            span { class: "muted", "/month" }
                        }
                        if let Some(description) = &product.description {
                            p { class: "muted", "{description}" }
                        }
                        Button {
                            class: "w-full",
                            disabled: processing(),
                            onclick: {
                                let price_id = product.price_id.clone();
                                let mut subscribe = subscribe;
                                move |_| subscribe(price_id.clone())
                            },
                            if processing() { "Processing..." } else { "Subscribe Now" }
                        }
                    }
                }
            }
        }
    }
}
