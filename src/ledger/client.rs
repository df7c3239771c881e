// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JSON-RPC ledger client.
//!
//! Reads asset state through the DAS `getAsset` method and submits signed
//! mutation bundles through `sendTransaction`. The client performs no retries;
//! failures surface immediately with the error class the caller needs to
//! decide whether a retry makes sense.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Deserialize;
use serde_json::{json, Value};

use super::signing::WalletSigner;
use super::types::{
    AttributePlugin, CommitmentLevel, MutationBundle, NetworkConfig, SignedBundle, DEVNET,
};
use super::LedgerRpc;

/// Ledger client over HTTP JSON-RPC.
#[derive(Debug)]
pub struct LedgerClient {
    /// Network name for display
    network_name: String,
    /// JSON-RPC endpoint
    rpc_url: String,
    /// Commitment level used for submissions
    commitment: CommitmentLevel,
    /// Shared HTTP client
    http: reqwest::Client,
}

impl LedgerClient {
    /// Create a client for one of the known networks.
    pub fn new(network: &NetworkConfig, commitment: CommitmentLevel) -> Self {
        Self {
            network_name: network.name.to_string(),
            rpc_url: network.rpc_url.to_string(),
            commitment,
            http: reqwest::Client::new(),
        }
    }

    /// Create a client for an arbitrary RPC endpoint.
    pub fn with_rpc_url(
        rpc_url: impl Into<String>,
        commitment: CommitmentLevel,
    ) -> Result<Self, LedgerError> {
        let rpc_url = rpc_url.into();
        let parsed: url::Url = rpc_url
            .parse()
            .map_err(|e: url::ParseError| LedgerError::InvalidRpcUrl(e.to_string()))?;

        Ok(Self {
            network_name: parsed.host_str().unwrap_or("custom").to_string(),
            rpc_url,
            commitment,
            http: reqwest::Client::new(),
        })
    }

    /// Create a client for devnet with finalized commitment.
    pub fn devnet() -> Self {
        Self::new(&DEVNET, CommitmentLevel::Finalized)
    }

    /// Get the network name.
    pub fn network_name(&self) -> &str {
        &self.network_name
    }

    /// Get the commitment level submissions resolve against.
    pub fn commitment(&self) -> CommitmentLevel {
        self.commitment
    }

    /// Ping the ledger's health endpoint.
    pub async fn health(&self) -> Result<(), LedgerError> {
        let result = self
            .rpc_call("getHealth", json!([]))
            .await
            .map_err(|failure| match failure {
                RpcFailure::Transport(message) => LedgerError::Transient(message),
                RpcFailure::Rpc { message, .. } => LedgerError::Transient(message),
            })?;

        if result.as_str() == Some("ok") {
            Ok(())
        } else {
            Err(LedgerError::Transient(format!(
                "Ledger reports unhealthy: {result}"
            )))
        }
    }

    /// Fetch and deserialize an asset record, erroring if it does not exist.
    async fn fetch_asset(&self, id: &str) -> Result<AssetInfo, LedgerError> {
        let result = self
            .rpc_call("getAsset", json!({ "id": id }))
            .await
            .map_err(|failure| read_failure(id, failure))?;

        if result.is_null() {
            return Err(LedgerError::NotFound(format!("Asset {id} does not exist")));
        }

        serde_json::from_value(result)
            .map_err(|e| LedgerError::MalformedResponse(format!("getAsset for {id}: {e}")))
    }

    /// Issue a single JSON-RPC call and unwrap the envelope.
    async fn rpc_call(&self, method: &str, params: Value) -> Result<Value, RpcFailure> {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self
            .http
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RpcFailure::Transport(e.to_string()))?;

        let envelope: RpcEnvelope = response
            .json()
            .await
            .map_err(|e| RpcFailure::Transport(format!("Invalid RPC response: {e}")))?;

        if let Some(error) = envelope.error {
            return Err(RpcFailure::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        Ok(envelope.result.unwrap_or(Value::Null))
    }
}

impl LedgerRpc for LedgerClient {
    async fn fetch_attribute_plugin(
        &self,
        asset_id: &str,
    ) -> Result<Option<AttributePlugin>, LedgerError> {
        let info = self.fetch_asset(asset_id).await?;
        Ok(attribute_plugin_of(info))
    }

    async fn fetch_update_authority(&self, collection_id: &str) -> Result<String, LedgerError> {
        let info = self.fetch_asset(collection_id).await?;
        pick_update_authority(&info).ok_or_else(|| {
            LedgerError::MalformedResponse(format!(
                "Collection {collection_id} has no update authority"
            ))
        })
    }

    async fn submit(
        &self,
        bundle: &MutationBundle,
        signer: &WalletSigner,
    ) -> Result<String, LedgerError> {
        let payload = encode_bundle(bundle, signer)?;
        let params = json!([
            payload,
            { "encoding": "base64", "preflightCommitment": self.commitment.as_str() }
        ]);

        let result = self
            .rpc_call("sendTransaction", params)
            .await
            .map_err(|failure| match failure {
                RpcFailure::Transport(message) => LedgerError::Transient(message),
                RpcFailure::Rpc { code, message } => {
                    LedgerError::Submission(format!("{message} (code {code})"))
                }
            })?;

        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                LedgerError::MalformedResponse(
                    "sendTransaction returned a non-string transaction id".to_string(),
                )
            })
    }
}

/// Serialize, sign and base64-encode a bundle for `sendTransaction`.
fn encode_bundle(bundle: &MutationBundle, signer: &WalletSigner) -> Result<String, LedgerError> {
    let message = serde_json::to_vec(bundle)
        .map_err(|e| LedgerError::Submission(format!("Bundle serialization failed: {e}")))?;

    let signature = signer.sign(&message);
    let signed = SignedBundle {
        message: BASE64.encode(&message),
        signature: bs58::encode(signature.to_bytes()).into_string(),
        signer: signer.public_key(),
    };

    let envelope = serde_json::to_vec(&signed)
        .map_err(|e| LedgerError::Submission(format!("Bundle serialization failed: {e}")))?;

    Ok(BASE64.encode(envelope))
}

/// Map a read-path RPC failure onto the caller-facing error class.
///
/// Reads fail as `NotFound` or `Transient`; anything the ledger reports that
/// is not a missing record is treated as retryable by the caller.
fn read_failure(id: &str, failure: RpcFailure) -> LedgerError {
    match failure {
        RpcFailure::Transport(message) => LedgerError::Transient(message),
        RpcFailure::Rpc { code, message } => {
            if message.to_ascii_lowercase().contains("not found") {
                LedgerError::NotFound(format!("Asset {id} does not exist"))
            } else {
                LedgerError::Transient(format!("{message} (code {code})"))
            }
        }
    }
}

/// Extract the attribute plugin from an asset record, if present.
fn attribute_plugin_of(info: AssetInfo) -> Option<AttributePlugin> {
    info.plugins.and_then(|p| p.attributes).map(|a| a.data)
}

/// Pick the update authority of an asset record.
///
/// Prefers an authority with the `full` scope, falling back to the first
/// listed authority.
fn pick_update_authority(info: &AssetInfo) -> Option<String> {
    info.authorities
        .iter()
        .find(|a| a.scopes.iter().any(|s| s == "full"))
        .or_else(|| info.authorities.first())
        .map(|a| a.address.clone())
}

/// JSON-RPC response envelope.
#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    result: Option<Value>,
    error: Option<RpcErrorBody>,
}

/// JSON-RPC error object.
#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// RPC failure before it is mapped to a caller-facing error class.
#[derive(Debug)]
enum RpcFailure {
    Transport(String),
    Rpc { code: i64, message: String },
}

/// Asset record as returned by `getAsset`.
#[derive(Debug, Deserialize)]
struct AssetInfo {
    #[serde(default)]
    authorities: Vec<AssetAuthority>,
    #[serde(default)]
    plugins: Option<AssetPlugins>,
}

#[derive(Debug, Deserialize)]
struct AssetAuthority {
    address: String,
    #[serde(default)]
    scopes: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AssetPlugins {
    #[serde(default)]
    attributes: Option<AttributesPluginInfo>,
}

#[derive(Debug, Deserialize)]
struct AttributesPluginInfo {
    data: AttributePlugin,
}

/// Errors that can occur during ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Ledger unreachable: {0}")]
    Transient(String),

    #[error("Submission rejected: {0}")]
    Submission(String),

    #[error("Malformed ledger response: {0}")]
    MalformedResponse(String),
}
