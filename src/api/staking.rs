// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Staking endpoint: the read, decide, build, submit pipeline.

use axum::{extract::State, Json};

use crate::{
    error::ApiError,
    models::{StakeRequest, StakeResponse},
    staking,
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/stake",
    request_body = StakeRequest,
    tag = "Staking",
    responses(
        (status = 200, description = "Bundle submitted atomically", body = StakeResponse),
        (status = 400, description = "No wallet connected"),
        (status = 404, description = "Asset or collection not found"),
        (status = 409, description = "Asset is already staked"),
        (status = 422, description = "Corrupt attribute state on the asset"),
        (status = 502, description = "Ledger rejected the bundle"),
        (status = 503, description = "Ledger unreachable")
    )
)]
pub async fn stake_asset(
    State(state): State<AppState>,
    Json(request): Json<StakeRequest>,
) -> Result<Json<StakeResponse>, ApiError> {
    // Clone the bound signer out of the lock; the pipeline takes it by
    // argument and never touches shared state.
    let signer = state.signer.read().await.clone();
    let Some(signer) = signer else {
        return Err(ApiError::bad_request(
            "No wallet connected; call /connect-wallet first",
        ));
    };

    let transaction_id = staking::stake(
        state.ledger.as_ref(),
        &signer,
        &request.asset_id,
        &request.collection_id,
    )
    .await?;

    Ok(Json(StakeResponse { transaction_id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn stake_without_bound_signer_is_bad_request() {
        let err = stake_asset(
            State(AppState::default()),
            Json(StakeRequest {
                asset_id: "asset1".into(),
                collection_id: "coll1".into(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("connect-wallet"));
    }
}
