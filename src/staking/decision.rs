// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Staking decision engine.

use crate::ledger::AttributeEntry;

use super::state::{StakeState, STAKED_KEY, STAKED_TIME_INIT, STAKED_TIME_KEY};

/// The transition a staking request triggers for a given asset state.
///
/// Positive transitions carry the attribute list the ledger should hold
/// afterwards, derived from the old list, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// No attribute plugin yet: create one with fresh stake entries.
    Initialize { attributes: Vec<AttributeEntry> },
    /// Plugin exists without the reserved keys: append them.
    Activate { attributes: Vec<AttributeEntry> },
    /// Previously unstaked: rewrite `staked`, leave everything else alone.
    Reactivate { attributes: Vec<AttributeEntry> },
    /// Currently staked: re-staking is forbidden.
    Reject { since: String },
}

impl Transition {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Transition::Initialize { .. } => "initialize",
            Transition::Activate { .. } => "activate",
            Transition::Reactivate { .. } => "reactivate",
            Transition::Reject { .. } => "reject",
        }
    }
}

/// Decide the transition for `state` at timestamp `now_ts`.
///
/// Pure: the caller supplies the timestamp (millisecond string), so the same
/// input always yields the same transition.
pub fn decide(state: &StakeState, now_ts: &str) -> Transition {
    match state {
        StakeState::NeverInitialized => Transition::Initialize {
            attributes: stake_entries(now_ts),
        },
        StakeState::Unannotated { attributes } => {
            let mut list = attributes.clone();
            list.extend(stake_entries(now_ts));
            Transition::Activate { attributes: list }
        }
        StakeState::Unstaked { attributes } => {
            let attributes = attributes
                .iter()
                .map(|entry| {
                    if entry.key == STAKED_KEY {
                        AttributeEntry::new(STAKED_KEY, now_ts)
                    } else {
                        entry.clone()
                    }
                })
                .collect();
            Transition::Reactivate { attributes }
        }
        StakeState::StakedSince { timestamp } => Transition::Reject {
            since: timestamp.clone(),
        },
    }
}

/// The two entries every fresh stake writes.
fn stake_entries(now_ts: &str) -> Vec<AttributeEntry> {
    vec![
        AttributeEntry::new(STAKED_KEY, now_ts),
        AttributeEntry::new(STAKED_TIME_KEY, STAKED_TIME_INIT),
    ]
}
