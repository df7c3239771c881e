// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Mutation bundle builder.

use crate::ledger::{MutationBundle, PluginOp};

use super::decision::Transition;
use super::StakeError;

/// Translate a transition into an ordered mutation bundle.
///
/// The attribute operation comes first and the freeze lock last: if attribute
/// staging is rejected, no partial freeze is ever attempted. The freeze lock
/// is bundled with every positive transition; an asset must never be marked
/// staked while still transferable.
pub fn build(
    transition: &Transition,
    asset_id: &str,
    collection_id: &str,
    freeze_authority: &str,
) -> Result<MutationBundle, StakeError> {
    let attribute_op = match transition {
        Transition::Initialize { attributes } => PluginOp::AddAttributes {
            attribute_list: attributes.clone(),
        },
        Transition::Activate { attributes } | Transition::Reactivate { attributes } => {
            PluginOp::UpdateAttributes {
                attribute_list: attributes.clone(),
            }
        }
        Transition::Reject { since } => {
            return Err(StakeError::AlreadyStaked {
                since: since.clone(),
            })
        }
    };

    Ok(MutationBundle {
        asset: asset_id.to_string(),
        collection: collection_id.to_string(),
        ops: vec![
            attribute_op,
            PluginOp::AddFreezeDelegate {
                frozen: true,
                authority: freeze_authority.to_string(),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::AttributeEntry;

    fn entries() -> Vec<AttributeEntry> {
        vec![
            AttributeEntry::new("staked", "1700000000000"),
            AttributeEntry::new("stakedTime", "0"),
        ]
    }

    #[test]
    fn initialize_adds_attributes_then_freeze() {
        let bundle = build(
            &Transition::Initialize {
                attributes: entries(),
            },
            "asset1",
            "coll1",
            "auth1",
        )
        .unwrap();

        assert_eq!(bundle.asset, "asset1");
        assert_eq!(bundle.collection, "coll1");
        assert_eq!(bundle.ops.len(), 2);
        assert!(matches!(bundle.ops[0], PluginOp::AddAttributes { .. }));
        assert_eq!(
            bundle.ops[1],
            PluginOp::AddFreezeDelegate {
                frozen: true,
                authority: "auth1".into()
            }
        );
    }

    #[test]
    fn activate_and_reactivate_update_attributes() {
        for transition in [
            Transition::Activate {
                attributes: entries(),
            },
            Transition::Reactivate {
                attributes: entries(),
            },
        ] {
            let bundle = build(&transition, "asset1", "coll1", "auth1").unwrap();
            assert!(matches!(bundle.ops[0], PluginOp::UpdateAttributes { .. }));
        }
    }

    #[test]
    fn every_positive_bundle_has_exactly_one_freeze_op_last() {
        let transitions = [
            Transition::Initialize {
                attributes: entries(),
            },
            Transition::Activate {
                attributes: entries(),
            },
            Transition::Reactivate {
                attributes: entries(),
            },
        ];

        for transition in &transitions {
            let bundle = build(transition, "asset1", "coll1", "auth1").unwrap();
            let freeze_count = bundle.ops.iter().filter(|op| op.is_freeze()).count();
            assert_eq!(freeze_count, 1);
            assert!(bundle.ops.last().unwrap().is_freeze());
        }
    }

    #[test]
    fn reject_never_builds_a_bundle() {
        let err = build(
            &Transition::Reject {
                since: "1690000000000".into(),
            },
            "asset1",
            "coll1",
            "auth1",
        )
        .unwrap_err();
        assert!(matches!(err, StakeError::AlreadyStaked { .. }));
    }
}
