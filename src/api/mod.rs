// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        ConnectWalletRequest, ConnectWalletResponse, CreateWalletResponse, StakeRequest,
        StakeResponse,
    },
    state::AppState,
};

pub mod health;
pub mod staking;
pub mod wallet;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/create-wallet", get(wallet::create_wallet))
        .route("/connect-wallet", post(wallet::connect_wallet))
        .route("/stake", post(staking::stake_asset))
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        wallet::create_wallet,
        wallet::connect_wallet,
        staking::stake_asset,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            CreateWalletResponse,
            ConnectWalletRequest,
            ConnectWalletResponse,
            StakeRequest,
            StakeResponse,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Wallet", description = "Keypair generation and signer binding"),
        (name = "Staking", description = "Asset staking mutations"),
        (name = "Health", description = "Service and ledger probes")
    )
)]
struct ApiDoc;
