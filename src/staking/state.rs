// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Staking state derived from an asset's raw attribute list.
//!
//! The attribute plugin is an ad-hoc key/value store; this module reduces it
//! to a closed set of variants at the boundary so the decision engine never
//! does string-keyed lookups of its own.

use crate::ledger::{AttributeEntry, AttributePlugin};

use super::StakeError;

/// Reserved attribute key holding the stake-start timestamp.
pub const STAKED_KEY: &str = "staked";

/// Reserved attribute key for accumulated-duration bookkeeping.
pub const STAKED_TIME_KEY: &str = "stakedTime";

/// Sentinel `staked` value meaning "not currently staked".
pub const NOT_STAKED: &str = "0";

/// Initial `stakedTime` value.
pub const STAKED_TIME_INIT: &str = "0";

/// The staking-relevant state of an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StakeState {
    /// No attribute plugin on the asset.
    NeverInitialized,
    /// Attribute plugin present but carries neither reserved key.
    Unannotated { attributes: Vec<AttributeEntry> },
    /// `staked` key present with the sentinel value: staked before, not now.
    Unstaked { attributes: Vec<AttributeEntry> },
    /// `staked` key present with a live timestamp.
    StakedSince { timestamp: String },
}

/// Classify an asset's attribute plugin into a [`StakeState`].
///
/// Duplicate reserved keys, or a `stakedTime` entry without a `staked` entry,
/// are half-written states the staking path never produces; silently picking
/// one entry could re-stake or unfreeze incorrectly, so both are rejected as
/// [`StakeError::CorruptState`].
pub fn classify(plugin: Option<&AttributePlugin>) -> Result<StakeState, StakeError> {
    let Some(plugin) = plugin else {
        return Ok(StakeState::NeverInitialized);
    };

    let attributes = &plugin.attribute_list;
    for key in [STAKED_KEY, STAKED_TIME_KEY] {
        let count = attributes.iter().filter(|e| e.key == key).count();
        if count > 1 {
            return Err(StakeError::CorruptState(format!(
                "{count} `{key}` entries; expected at most one"
            )));
        }
    }

    let staked = attributes.iter().find(|e| e.key == STAKED_KEY);
    let has_staked_time = attributes.iter().any(|e| e.key == STAKED_TIME_KEY);

    match staked {
        None if has_staked_time => Err(StakeError::CorruptState(format!(
            "`{STAKED_TIME_KEY}` entry present without a `{STAKED_KEY}` entry"
        ))),
        None => Ok(StakeState::Unannotated {
            attributes: attributes.clone(),
        }),
        Some(entry) if entry.value == NOT_STAKED => Ok(StakeState::Unstaked {
            attributes: attributes.clone(),
        }),
        Some(entry) => Ok(StakeState::StakedSince {
            timestamp: entry.value.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plugin(entries: &[(&str, &str)]) -> AttributePlugin {
        AttributePlugin {
            attribute_list: entries
                .iter()
                .map(|(k, v)| AttributeEntry::new(*k, *v))
                .collect(),
        }
    }

    #[test]
    fn no_plugin_is_never_initialized() {
        assert_eq!(classify(None).unwrap(), StakeState::NeverInitialized);
    }

    #[test]
    fn plugin_without_reserved_keys_is_unannotated() {
        let p = plugin(&[("rarity", "legendary")]);
        match classify(Some(&p)).unwrap() {
            StakeState::Unannotated { attributes } => {
                assert_eq!(attributes, p.attribute_list);
            }
            other => panic!("expected Unannotated, got {other:?}"),
        }
    }

    #[test]
    fn empty_plugin_is_unannotated() {
        let p = plugin(&[]);
        assert!(matches!(
            classify(Some(&p)).unwrap(),
            StakeState::Unannotated { .. }
        ));
    }

    #[test]
    fn sentinel_staked_value_is_unstaked() {
        let p = plugin(&[("staked", "0"), ("stakedTime", "4200")]);
        assert!(matches!(
            classify(Some(&p)).unwrap(),
            StakeState::Unstaked { .. }
        ));
    }

    #[test]
    fn live_timestamp_is_staked_since() {
        let p = plugin(&[("staked", "1700000000000"), ("stakedTime", "0")]);
        assert_eq!(
            classify(Some(&p)).unwrap(),
            StakeState::StakedSince {
                timestamp: "1700000000000".into()
            }
        );
    }

    #[test]
    fn staked_key_alone_still_classifies() {
        // Reactivation only rewrites `staked`; a missing `stakedTime` is legal.
        let p = plugin(&[("staked", "0")]);
        assert!(matches!(
            classify(Some(&p)).unwrap(),
            StakeState::Unstaked { .. }
        ));
    }

    #[test]
    fn duplicate_staked_keys_are_corrupt() {
        let p = plugin(&[("staked", "0"), ("staked", "1700000000000")]);
        let err = classify(Some(&p)).unwrap_err();
        assert!(matches!(err, StakeError::CorruptState(_)));
    }

    #[test]
    fn duplicate_staked_time_keys_are_corrupt() {
        let p = plugin(&[("staked", "0"), ("stakedTime", "0"), ("stakedTime", "1")]);
        assert!(matches!(
            classify(Some(&p)).unwrap_err(),
            StakeError::CorruptState(_)
        ));
    }

    #[test]
    fn staked_time_without_staked_is_corrupt() {
        let p = plugin(&[("stakedTime", "0")]);
        assert!(matches!(
            classify(Some(&p)).unwrap_err(),
            StakeError::CorruptState(_)
        ));
    }
}
