//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod validation;
pub mod views;

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod session;
pub use session::{
    begin_session, end_session, use_api, use_session, use_token_store, Api,
    AppTokenStore, LogoutButton, SessionProvider, SessionState,
};

mod entitlement;
pub use entitlement::{use_can_write, use_entitlement, Entitled, EntitlementProvider, SubscriptionBadge};
