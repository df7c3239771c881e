// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ledger types and constants.

use serde::{Deserialize, Serialize};

/// Ledger network configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// JSON-RPC endpoint URL
    pub rpc_url: &'static str,
    /// Block explorer URL
    pub explorer_url: &'static str,
}

/// Devnet configuration.
pub const DEVNET: NetworkConfig = NetworkConfig {
    name: "Devnet",
    rpc_url: "https://api.devnet.solana.com",
    explorer_url: "https://explorer.solana.com/?cluster=devnet",
};

/// Mainnet-beta configuration.
pub const MAINNET_BETA: NetworkConfig = NetworkConfig {
    name: "Mainnet Beta",
    rpc_url: "https://api.mainnet-beta.solana.com",
    explorer_url: "https://explorer.solana.com",
};

/// Commitment level a read or submission is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitmentLevel {
    Processed,
    Confirmed,
    Finalized,
}

impl CommitmentLevel {
    /// Wire name of the commitment level.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitmentLevel::Processed => "processed",
            CommitmentLevel::Confirmed => "confirmed",
            CommitmentLevel::Finalized => "finalized",
        }
    }

    /// Resolve a raw commitment string, defaulting to `finalized`.
    pub fn resolve(raw: Option<&str>) -> Result<Self, String> {
        let value = raw
            .unwrap_or(CommitmentLevel::Finalized.as_str())
            .trim()
            .to_ascii_lowercase();
        match value.as_str() {
            "processed" => Ok(CommitmentLevel::Processed),
            "confirmed" => Ok(CommitmentLevel::Confirmed),
            "finalized" => Ok(CommitmentLevel::Finalized),
            other => Err(format!(
                "Unknown commitment level `{other}`; expected processed, confirmed or finalized."
            )),
        }
    }
}

impl std::fmt::Display for CommitmentLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single key/value entry inside an asset's attribute plugin.
///
/// Keys are not guaranteed unique by the ledger; the staking core treats the
/// reserved keys as unique and rejects assets where they are not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeEntry {
    pub key: String,
    pub value: String,
}

impl AttributeEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The attribute plugin of an asset: an ordered list of key/value entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AttributePlugin {
    pub attribute_list: Vec<AttributeEntry>,
}

/// A single plugin mutation within a bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PluginOp {
    /// Create the attribute plugin with the given entries.
    AddAttributes { attribute_list: Vec<AttributeEntry> },
    /// Replace the attribute plugin's entries with the given list.
    UpdateAttributes { attribute_list: Vec<AttributeEntry> },
    /// Attach a freeze delegate, locking transfers while `frozen` is set.
    AddFreezeDelegate { frozen: bool, authority: String },
}

impl PluginOp {
    /// Whether this operation is the freeze-lock addition.
    pub fn is_freeze(&self) -> bool {
        matches!(self, PluginOp::AddFreezeDelegate { .. })
    }
}

/// An ordered sequence of plugin operations against one asset.
///
/// The ledger applies a bundle atomically: all operations apply or none do.
/// Partial application (attribute updated but freeze not applied) would leave
/// the asset marked staked yet still transferable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutationBundle {
    /// The asset the operations apply to.
    pub asset: String,
    /// The collection the asset belongs to.
    pub collection: String,
    /// Operations, in submission order.
    pub ops: Vec<PluginOp>,
}

/// A serialized bundle plus its signature, ready for submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignedBundle {
    /// Base64 of the serialized bundle message.
    pub message: String,
    /// Base58 ed25519 signature over the message bytes.
    pub signature: String,
    /// Base58 public key of the signer.
    pub signer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults_to_finalized() {
        assert_eq!(
            CommitmentLevel::resolve(None).unwrap(),
            CommitmentLevel::Finalized
        );
    }

    #[test]
    fn resolve_trims_and_lowercases() {
        assert_eq!(
            CommitmentLevel::resolve(Some("  Confirmed ")).unwrap(),
            CommitmentLevel::Confirmed
        );
        assert_eq!(
            CommitmentLevel::resolve(Some("PROCESSED")).unwrap(),
            CommitmentLevel::Processed
        );
    }

    #[test]
    fn resolve_rejects_unknown_levels() {
        let err = CommitmentLevel::resolve(Some("final")).unwrap_err();
        assert!(err.contains("final"));
    }

    #[test]
    fn plugin_op_tags_serialize_snake_case() {
        let op = PluginOp::AddFreezeDelegate {
            frozen: true,
            authority: "auth".into(),
        };
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["op"], "add_freeze_delegate");
        assert_eq!(json["frozen"], true);
    }
}
