//! # API crate: the client side of the Taskboard REST API
//!
//! Everything the frontends need to talk to the server lives here. Views in
//! the `ui` crate never build requests themselves; they call [`actions`],
//! which run against any [`Gateway`] and return display-ready results.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`actions`] | One function per user action: mutate, then re-fetch what the view shows |
//! | [`client`] | [`ApiClient`], the `reqwest` implementation of [`Gateway`] with bearer auth |
//! | [`entitlement`] | [`Capabilities`] resolved from the subscription status, failing closed |
//! | [`error`] | [`ApiError`] for single requests, [`ActionError`] for banner text |
//! | [`gateway`] | The [`Gateway`] trait covering every remote endpoint |
//!
//! ## Error policy
//!
//! A failed request shows the server's string `detail` verbatim, or the
//! action's fixed fallback message when there is none. Task mutations are
//! silent: they log and leave the view unchanged. The entitlement query
//! never errors; it resolves to "not subscribed".

pub mod actions;
pub mod client;
pub mod entitlement;
pub mod error;
pub mod gateway;

#[cfg(test)]
mod testing;

pub use actions::ProjectDetail;
pub use client::ApiClient;
pub use entitlement::{can_write, Capabilities};
pub use error::{ActionError, ApiError};
pub use gateway::Gateway;
