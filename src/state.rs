// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::ledger::{LedgerClient, WalletSigner};

#[derive(Clone)]
pub struct AppState {
    /// Shared ledger client; all requests go through the same endpoint.
    pub ledger: Arc<LedgerClient>,
    /// The currently bound signer. Rebinding replaces the previous one; the
    /// staking pipeline receives a clone as an argument and never reads this
    /// lock itself.
    pub signer: Arc<RwLock<Option<WalletSigner>>>,
}

impl AppState {
    pub fn new(ledger: LedgerClient) -> Self {
        Self {
            ledger: Arc::new(ledger),
            signer: Arc::new(RwLock::new(None)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LedgerClient::devnet())
    }
}
