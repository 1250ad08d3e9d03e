//! Subscription entitlement, resolved once per authenticated session.

use crate::gateway::Gateway;

/// What the signed-in user is allowed to do in the UI.
///
/// This only decides which affordances are rendered. The server enforces
/// authorization on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub is_subscribed: bool,
}

impl Capabilities {
    /// Query the subscription status. Any failure resolves to not subscribed.
    pub async fn resolve<G: Gateway>(gateway: &G) -> Self {
        match gateway.subscription_status().await {
            Ok(status) => Self {
                is_subscribed: status.is_active(),
            },
            Err(err) => {
                tracing::warn!(error = %err, "subscription status unavailable, treating as expired");
                Self::default()
            }
        }
    }
}

/// Write affordances are offered only once the entitlement has resolved to
/// subscribed. `None` means still resolving or signed out.
pub fn can_write(capabilities: Option<Capabilities>) -> bool {
    capabilities.is_some_and(|c| c.is_subscribed)
}
