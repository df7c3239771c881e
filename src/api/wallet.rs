// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet endpoints: keypair generation and signer binding.

use axum::{extract::State, Json};

use crate::{
    error::ApiError,
    ledger::WalletSigner,
    models::{ConnectWalletRequest, ConnectWalletResponse, CreateWalletResponse},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/create-wallet",
    tag = "Wallet",
    responses((status = 200, description = "Freshly generated keypair", body = CreateWalletResponse))
)]
pub async fn create_wallet() -> Json<CreateWalletResponse> {
    let signer = WalletSigner::generate();
    tracing::info!(public_key = signer.public_key().as_str(), "Generated wallet keypair");

    Json(CreateWalletResponse {
        public_key: signer.public_key(),
        secret_key: signer.secret_key_bytes(),
    })
}

#[utoipa::path(
    post,
    path = "/connect-wallet",
    request_body = ConnectWalletRequest,
    tag = "Wallet",
    responses(
        (status = 200, description = "Signer bound", body = ConnectWalletResponse),
        (status = 400, description = "Missing or invalid secret key")
    )
)]
pub async fn connect_wallet(
    State(state): State<AppState>,
    Json(request): Json<ConnectWalletRequest>,
) -> Result<Json<ConnectWalletResponse>, ApiError> {
    let Some(bytes) = request.secret_key_array else {
        return Err(ApiError::bad_request("Secret key array required"));
    };

    let signer = WalletSigner::from_secret_bytes(&bytes)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    let public_key = signer.public_key();

    *state.signer.write().await = Some(signer);
    tracing::info!(public_key = public_key.as_str(), "Wallet connected");

    Ok(Json(ConnectWalletResponse {
        message: "Wallet connected".to_string(),
        public_key,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn create_wallet_returns_parseable_keypair() {
        let Json(response) = create_wallet().await;

        assert_eq!(response.secret_key.len(), 64);
        let restored = WalletSigner::from_secret_bytes(&response.secret_key).unwrap();
        assert_eq!(restored.public_key(), response.public_key);
    }

    #[tokio::test]
    async fn connect_wallet_binds_the_signer() {
        let state = AppState::default();
        let keypair = WalletSigner::generate();

        let Json(response) = connect_wallet(
            State(state.clone()),
            Json(ConnectWalletRequest {
                secret_key_array: Some(keypair.secret_key_bytes()),
            }),
        )
        .await
        .expect("connect succeeds");

        assert_eq!(response.message, "Wallet connected");
        assert_eq!(response.public_key, keypair.public_key());

        let bound = state.signer.read().await;
        assert_eq!(bound.as_ref().unwrap().public_key(), keypair.public_key());
    }

    #[tokio::test]
    async fn connect_wallet_rebinding_replaces_previous_signer() {
        let state = AppState::default();
        let first = WalletSigner::generate();
        let second = WalletSigner::generate();

        for keypair in [&first, &second] {
            connect_wallet(
                State(state.clone()),
                Json(ConnectWalletRequest {
                    secret_key_array: Some(keypair.secret_key_bytes()),
                }),
            )
            .await
            .expect("connect succeeds");
        }

        let bound = state.signer.read().await;
        assert_eq!(bound.as_ref().unwrap().public_key(), second.public_key());
    }

    #[tokio::test]
    async fn connect_wallet_missing_key_is_bad_request() {
        let err = connect_wallet(
            State(AppState::default()),
            Json(ConnectWalletRequest {
                secret_key_array: None,
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Secret key array required");
    }

    #[tokio::test]
    async fn connect_wallet_invalid_key_is_bad_request() {
        let err = connect_wallet(
            State(AppState::default()),
            Json(ConnectWalletRequest {
                secret_key_array: Some(vec![0u8; 12]),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
