// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The staking pipeline: read, decide, build, submit.

use chrono::Utc;

use crate::ledger::{LedgerRpc, WalletSigner};

use super::bundle::build;
use super::decision::{decide, Transition};
use super::state::classify;
use super::StakeError;

/// Stake an asset: fetch its current state, pick a transition, and submit the
/// resulting bundle atomically. Returns the ledger-assigned transaction id.
///
/// The signer is passed in explicitly; the pipeline reads no shared state.
/// Asset state is fetched fresh on every call, so concurrent requests for the
/// same asset race at the ledger, which supplies the ordering guarantee.
pub async fn stake<L: LedgerRpc>(
    ledger: &L,
    signer: &WalletSigner,
    asset_id: &str,
    collection_id: &str,
) -> Result<String, StakeError> {
    let plugin = ledger.fetch_attribute_plugin(asset_id).await?;
    let state = classify(plugin.as_ref())?;

    let now_ts = Utc::now().timestamp_millis().to_string();
    let transition = decide(&state, &now_ts);

    if let Transition::Reject { since } = &transition {
        tracing::info!(asset = asset_id, since = since.as_str(), "Stake rejected: already staked");
        return Err(StakeError::AlreadyStaked {
            since: since.clone(),
        });
    }

    let authority = ledger.fetch_update_authority(collection_id).await?;
    let bundle = build(&transition, asset_id, collection_id, &authority)?;
    let transaction_id = ledger.submit(&bundle, signer).await?;

    tracing::info!(
        asset = asset_id,
        transition = transition.kind(),
        transaction = transaction_id.as_str(),
        "Staked asset"
    );

    Ok(transaction_id)
}
