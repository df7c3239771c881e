// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `3000` |
//! | `RPC_URL` | Ledger JSON-RPC endpoint | devnet |
//! | `COMMITMENT` | Commitment level (`processed`, `confirmed`, `finalized`) | `finalized` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variable name for the ledger JSON-RPC endpoint.
///
/// When unset the service talks to devnet. Point this at a mainnet or local
/// validator endpoint to change networks; the commitment level is configured
/// separately via [`COMMITMENT_ENV`].
pub const RPC_URL_ENV: &str = "RPC_URL";

/// Environment variable name for the commitment level.
pub const COMMITMENT_ENV: &str = "COMMITMENT";

/// Environment variable name for the logging format switch.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";
