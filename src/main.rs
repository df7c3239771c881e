// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr};

use tracing_subscriber::EnvFilter;

use asset_staking_server::{
    api::router,
    config::{COMMITMENT_ENV, DEFAULT_PORT, HOST_ENV, LOG_FORMAT_ENV, PORT_ENV, RPC_URL_ENV},
    ledger::{CommitmentLevel, LedgerClient, DEVNET},
    state::AppState,
};

#[tokio::main]
async fn main() {
    init_tracing();

    let commitment = CommitmentLevel::resolve(env::var(COMMITMENT_ENV).ok().as_deref())
        .expect("Invalid COMMITMENT");

    let ledger = match env::var(RPC_URL_ENV) {
        Ok(rpc_url) => {
            LedgerClient::with_rpc_url(rpc_url, commitment).expect("Invalid RPC_URL")
        }
        Err(_) => LedgerClient::new(&DEVNET, commitment),
    };

    tracing::info!(
        network = ledger.network_name(),
        commitment = %ledger.commitment(),
        "Ledger client ready"
    );

    let state = AppState::new(ledger);
    let app = router(state);

    // Parse bind address
    let host = env::var(HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var(PORT_ENV)
        .unwrap_or_else(|_| DEFAULT_PORT.to_string())
        .parse()
        .unwrap_or(DEFAULT_PORT);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!("Asset staking server listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

/// Install the tracing subscriber, json or pretty per `LOG_FORMAT`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Resolve when ctrl-c arrives so the server can drain in-flight requests.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("Shutdown signal received");
}
