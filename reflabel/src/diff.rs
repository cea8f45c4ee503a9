// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement diffs between two recomputes.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::positioner::{LabelPlacement, LabelSlot};

/// Rows closer than this are treated as unmoved.
const PIXEL_EPSILON: f64 = 1.0e-9;

/// One change between the previous and the next placement set.
#[derive(Clone, Debug, PartialEq)]
pub enum PlacementDiff {
    /// A slot that had no label now has one.
    Enter {
        /// Slot of the new label.
        slot: LabelSlot,
        /// The new label.
        new: LabelPlacement,
    },
    /// A slot's label moved or its text changed.
    Update {
        /// Slot of the label.
        slot: LabelSlot,
        /// The label before.
        old: LabelPlacement,
        /// The label after.
        new: LabelPlacement,
    },
    /// A slot's label is gone.
    Exit {
        /// Slot of the removed label.
        slot: LabelSlot,
        /// The removed label.
        old: LabelPlacement,
    },
}

impl PlacementDiff {
    /// The slot this diff applies to.
    pub fn slot(&self) -> LabelSlot {
        match self {
            Self::Enter { slot, .. } | Self::Update { slot, .. } | Self::Exit { slot, .. } => {
                *slot
            }
        }
    }
}

/// Diffs two placement sets by slot.
///
/// Enters and updates come first, in `next` order; exits follow in `previous`
/// order. Unchanged slots produce nothing.
pub fn diff_placements(
    previous: &[LabelPlacement],
    next: &[LabelPlacement],
) -> Vec<PlacementDiff> {
    let by_slot: HashMap<LabelSlot, &LabelPlacement> =
        previous.iter().map(|p| (p.slot, p)).collect();

    let mut out = Vec::new();
    for new in next {
        match by_slot.get(&new.slot) {
            None => out.push(PlacementDiff::Enter {
                slot: new.slot,
                new: new.clone(),
            }),
            Some(old) if changed(old, new) => out.push(PlacementDiff::Update {
                slot: new.slot,
                old: (*old).clone(),
                new: new.clone(),
            }),
            Some(_) => {}
        }
    }

    let kept: HashSet<LabelSlot> = next.iter().map(|p| p.slot).collect();
    out.extend(
        previous
            .iter()
            .filter(|p| !kept.contains(&p.slot))
            .map(|old| PlacementDiff::Exit {
                slot: old.slot,
                old: old.clone(),
            }),
    );
    out
}

fn changed(old: &LabelPlacement, new: &LabelPlacement) -> bool {
    old.text != new.text || (old.pixel_y - new.pixel_y).abs() > PIXEL_EPSILON
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    fn placement(slot: LabelSlot, pixel_y: f64, text: &str) -> LabelPlacement {
        LabelPlacement {
            slot,
            pixel_y,
            value: 0.0,
            text: text.to_string(),
        }
    }

    #[test]
    fn enter_update_exit() {
        let previous = [
            placement(LabelSlot::Min, 200.0, "0"),
            placement(LabelSlot::Max, 10.0, "100"),
            placement(LabelSlot::Relative(2), 105.0, "50"),
        ];
        let next = [
            placement(LabelSlot::Min, 200.0, "0"),
            placement(LabelSlot::Max, 10.0, "200"),
            placement(LabelSlot::Relative(1), 152.5, "50"),
        ];
        let diffs = diff_placements(&previous, &next);
        let kinds: Vec<_> = diffs
            .iter()
            .map(|d| match d {
                PlacementDiff::Enter { .. } => "enter",
                PlacementDiff::Update { .. } => "update",
                PlacementDiff::Exit { .. } => "exit",
            })
            .collect();
        assert_eq!(kinds, ["update", "enter", "exit"]);
        assert_eq!(diffs[0].slot(), LabelSlot::Max);
        assert_eq!(diffs[1].slot(), LabelSlot::Relative(1));
        assert_eq!(diffs[2].slot(), LabelSlot::Relative(2));
    }

    #[test]
    fn movement_alone_is_an_update() {
        let previous = [placement(LabelSlot::Min, 200.0, "0")];
        let next = [placement(LabelSlot::Min, 400.0, "0")];
        assert!(matches!(
            diff_placements(&previous, &next).as_slice(),
            [PlacementDiff::Update { .. }]
        ));
    }

    #[test]
    fn identical_sets_produce_nothing() {
        let set = [
            placement(LabelSlot::Min, 200.0, "0"),
            placement(LabelSlot::Max, 10.0, "100"),
        ];
        assert!(diff_placements(&set, &set).is_empty());
    }

    #[test]
    fn clearing_exits_everything() {
        let previous = [
            placement(LabelSlot::Min, 200.0, "0"),
            placement(LabelSlot::Max, 10.0, "100"),
        ];
        let diffs = diff_placements(&previous, &[]);
        assert_eq!(diffs.len(), 2);
        assert!(
            diffs
                .iter()
                .all(|d| matches!(d, PlacementDiff::Exit { .. }))
        );
    }
}
