use dioxus::prelude::*;
use ui::views::SubscriptionPlans;

#[component]
pub fn Subscription() -> Element {
    rsx! {
        SubscriptionPlans {}
    }
}
