//! Wallet provider port definition.

use crate::domain::WalletSession;

/// Port for obtaining a simulated wallet identity.
///
/// Connecting has no failure path: every request eventually resolves to a
/// connected session. Implementations may suspend for a simulated delay
/// before returning.
pub trait WalletProvider {
    /// Request an identity; blocks until the (simulated) connection resolves.
    fn connect(&self) -> WalletSession;
}

/// Provider that resolves immediately with a fixed identity, for tests.
#[derive(Debug, Clone)]
pub struct FixedWalletProvider {
    pub address: String,
    pub balance_usdc: u64,
}

impl FixedWalletProvider {
    pub fn new(address: impl Into<String>, balance_usdc: u64) -> Self {
        Self { address: address.into(), balance_usdc }
    }
}

impl WalletProvider for FixedWalletProvider {
    fn connect(&self) -> WalletSession {
        WalletSession::connected(self.address.clone(), self.balance_usdc)
    }
}
