// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Asset staking core.
//!
//! Staking marks an asset with a `staked` timestamp attribute and locks
//! transfers with a freeze delegate, in one atomic bundle. The module is
//! split the way the data flows:
//!
//! - `state` - derive a closed [`StakeState`] from the raw attribute list
//! - `decision` - pick the [`Transition`] for a state, pure
//! - `bundle` - translate a transition into an ordered [`MutationBundle`]
//! - `service` - the read, decide, build, submit pipeline

pub mod bundle;
pub mod decision;
pub mod service;
pub mod state;

pub use bundle::build;
pub use decision::{decide, Transition};
pub use service::stake;
pub use state::{classify, StakeState};

use crate::ledger::LedgerError;

/// Errors that can occur on the staking path.
///
/// Every variant reaches the caller as a structured failure; nothing on this
/// path is logged and swallowed.
#[derive(Debug, thiserror::Error)]
pub enum StakeError {
    /// Asset or collection id does not resolve on the ledger.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The asset is currently staked; re-staking is forbidden.
    #[error("Asset is already staked (since {since})")]
    AlreadyStaked { since: String },

    /// The asset's reserved attribute keys are duplicated or half-written.
    #[error("Corrupt attribute state: {0}")]
    CorruptState(String),

    /// The ledger was unreachable; the caller may retry.
    #[error("Ledger unreachable: {0}")]
    Transient(String),

    /// The ledger rejected the signed bundle.
    #[error("Submission rejected: {0}")]
    Submission(String),
}

impl From<LedgerError> for StakeError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound(message) => StakeError::NotFound(message),
            LedgerError::Transient(message) => StakeError::Transient(message),
            LedgerError::Submission(message) => StakeError::Submission(message),
            LedgerError::MalformedResponse(message) => StakeError::Transient(message),
            LedgerError::InvalidRpcUrl(message) => StakeError::Transient(message),
        }
    }
}
