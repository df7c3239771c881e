// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ledger integration module.
//!
//! This module provides functionality for:
//! - Reading asset state (attribute plugins, update authorities) over JSON-RPC
//! - Signing mutation bundles with an ed25519 wallet key
//! - Submitting signed bundles for atomic application

pub mod client;
pub mod signing;
pub mod types;

pub use client::{LedgerClient, LedgerError};
pub use signing::{SignerError, WalletSigner};
pub use types::*;

/// The operations the staking pipeline requires of a ledger.
///
/// `LedgerClient` is the production implementation; tests drive the pipeline
/// against an in-memory implementation.
#[allow(async_fn_in_trait)]
pub trait LedgerRpc {
    /// Fetch the asset's attribute plugin, or `None` if the asset has none.
    async fn fetch_attribute_plugin(
        &self,
        asset_id: &str,
    ) -> Result<Option<AttributePlugin>, LedgerError>;

    /// Resolve the update authority of a collection.
    async fn fetch_update_authority(&self, collection_id: &str) -> Result<String, LedgerError>;

    /// Sign and submit a bundle as one atomic unit; returns the transaction id.
    async fn submit(
        &self,
        bundle: &MutationBundle,
        signer: &WalletSigner,
    ) -> Result<String, LedgerError>;
}
