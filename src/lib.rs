// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Core Asset Staking Service
//!
//! This crate provides an HTTP gateway over a Solana-style JSON-RPC ledger:
//! keypair generation, signer binding, and atomic stake mutations (attribute
//! plugin plus freeze lock) on digital asset records.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `ledger` - JSON-RPC client, wallet signing, wire types
//! - `staking` - the staking state machine (classify, decide, build, submit)

pub mod api;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod staking;
pub mod state;
