//! Simulated wallet session for the single local user.

/// Connected-identity state.
///
/// Starts disconnected at process start; populated by the connect operation.
/// There is no disconnect. The balance is a display value only: create, claim,
/// and release never debit or credit it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletSession {
    pub address: Option<String>,
    pub balance_usdc: u64,
}

impl WalletSession {
    /// Session for a freshly connected identity.
    pub fn connected(address: impl Into<String>, balance_usdc: u64) -> Self {
        Self { address: Some(address.into()), balance_usdc }
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// Short form of the address for the navigation bar, e.g. `0x71C7...9A21`.
    /// Addresses that are already short (such as the simulated identity) are
    /// shown as-is.
    pub fn short_address(&self) -> Option<String> {
        self.address.as_ref().map(|a| {
            if a.len() > 12 {
                format!("{}...{}", &a[..6], &a[a.len() - 4..])
            } else {
                a.clone()
            }
        })
    }
}
