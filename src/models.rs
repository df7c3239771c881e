// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API. All types derive `Serialize`, `Deserialize`, and `ToSchema`
//! for automatic JSON handling and OpenAPI documentation.
//!
//! Field names render as camelCase on the wire (`secretKeyArray`, `assetId`),
//! matching the clients this service already has.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Wallet Models
// =============================================================================

/// A freshly generated keypair.
///
/// The secret key is returned to the caller and not stored anywhere in this
/// service; custody is the caller's problem.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalletResponse {
    /// Base58 public key.
    pub public_key: String,
    /// 64-byte keypair array (secret half followed by public half).
    pub secret_key: Vec<u8>,
}

/// Request to bind a signer identity for subsequent staking calls.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectWalletRequest {
    /// 64-byte keypair array. Optional so a missing field answers 400
    /// rather than a generic deserialization failure.
    pub secret_key_array: Option<Vec<u8>>,
}

/// Confirmation that a signer is bound.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectWalletResponse {
    pub message: String,
    /// Base58 public key of the bound signer.
    pub public_key: String,
}

// =============================================================================
// Staking Models
// =============================================================================

/// Request to stake one asset.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StakeRequest {
    /// Address of the asset to stake.
    pub asset_id: String,
    /// Address of the collection the asset belongs to; its update authority
    /// becomes the freeze authority.
    pub collection_id: String,
}

/// Result of a successful staking submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StakeResponse {
    /// Ledger-assigned transaction identifier.
    pub transaction_id: String,
}
