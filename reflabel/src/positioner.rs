// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label selection and the stateful positioner.
//!
//! [`select_label_positions`] is the pure core: given a policy, a value range
//! and a viewport it returns where labels go and what they say.
//! [`AxisLabelPositioner`] keeps the last range/viewport, recomputes on every
//! change and reports what changed as [`PlacementDiff`]s so a renderer can
//! update only the labels that moved.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::diff::{PlacementDiff, diff_placements};
use crate::error::LabelError;
use crate::geometry::{ValueRange, Viewport};
use crate::policy::{LabelPolicy, PositionMode};
use crate::scale::AxisTransform;

/// Identifies which configured position a placement came from.
///
/// Slots stay stable across recomputes, which is what lets placements be
/// diffed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LabelSlot {
    /// The bottom edge, showing the range minimum.
    Min,
    /// The top edge, showing the range maximum.
    Max,
    /// Entry `n` of [`LabelPolicy::relative_positions`].
    Relative(usize),
}

/// A label to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPlacement {
    /// Where the placement came from.
    pub slot: LabelSlot,
    /// Pixel row of the reference line the label belongs to.
    pub pixel_y: f64,
    /// Data value at that row.
    pub value: f64,
    /// Formatted value.
    pub text: String,
}

/// Placements for one axis. Axes rarely carry more than a handful of labels.
pub type Placements = SmallVec<[LabelPlacement; 8]>;

/// Computes the labels for `range` drawn over `viewport`.
///
/// Output order is min (if enabled), max (if enabled), then relative positions
/// in configuration order. A relative `0` is dropped when the min label is
/// enabled and a relative `1` when the max label is, since those rows already
/// carry a label. No other de-duplication happens.
pub fn select_label_positions(
    policy: &LabelPolicy,
    range: ValueRange,
    viewport: Viewport,
) -> Result<Placements, LabelError> {
    if policy.position_mode == PositionMode::Absolute {
        return Err(LabelError::UnsupportedPositionMode(PositionMode::Absolute));
    }
    let transform = AxisTransform::new(range, viewport)?;
    let format = policy.number_format();

    let mut out = Placements::new();
    if policy.include_min {
        out.push(LabelPlacement {
            slot: LabelSlot::Min,
            pixel_y: viewport.bottom_edge(),
            value: range.min,
            text: format.format(range.min)?,
        });
    }
    if policy.include_max {
        out.push(LabelPlacement {
            slot: LabelSlot::Max,
            pixel_y: viewport.top_edge(),
            value: range.max,
            text: format.format(range.max)?,
        });
    }

    for (index, &fraction) in policy.relative_positions.iter().enumerate() {
        if !(0.0..=1.0).contains(&fraction) {
            log::warn!("skipping relative label position {fraction}: outside [0, 1]");
            continue;
        }
        if policy.edge_covers(fraction) {
            continue;
        }
        let pixel_y = transform.relative_to_pixel_y(fraction);
        let value = transform.pixel_y_to_value(pixel_y);
        out.push(LabelPlacement {
            slot: LabelSlot::Relative(index),
            pixel_y,
            value,
            text: format.format(value)?,
        });
    }
    Ok(out)
}

/// Holds the current range, viewport and policy, and the placements computed
/// from them.
#[derive(Clone, Debug)]
pub struct AxisLabelPositioner {
    policy: LabelPolicy,
    range: ValueRange,
    viewport: Viewport,
    placements: Placements,
    last_error: Option<LabelError>,
}

impl AxisLabelPositioner {
    /// Creates a positioner and computes its initial placements.
    ///
    /// If the initial geometry is degenerate the positioner starts empty and
    /// [`last_error`](Self::last_error) reports why.
    pub fn new(policy: LabelPolicy, range: ValueRange, viewport: Viewport) -> Self {
        let mut positioner = Self {
            policy,
            range,
            viewport,
            placements: Placements::new(),
            last_error: None,
        };
        // The error is kept in `last_error`.
        let _ = positioner.recompute();
        positioner
    }

    /// Replaces the value range and recomputes.
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<Vec<PlacementDiff>, LabelError> {
        self.range = ValueRange::new(min, max);
        self.recompute()
    }

    /// Replaces the viewport size, keeping the margins, and recomputes.
    pub fn set_viewport(
        &mut self,
        width: f64,
        height: f64,
    ) -> Result<Vec<PlacementDiff>, LabelError> {
        self.viewport.width = width;
        self.viewport.height = height;
        self.recompute()
    }

    /// Replaces the top and bottom margins and recomputes.
    pub fn set_margins(
        &mut self,
        top_margin: f64,
        bottom_margin: f64,
    ) -> Result<Vec<PlacementDiff>, LabelError> {
        self.viewport = self.viewport.with_margins(top_margin, bottom_margin);
        self.recompute()
    }

    /// Replaces the policy and recomputes.
    pub fn set_policy(&mut self, policy: LabelPolicy) -> Result<Vec<PlacementDiff>, LabelError> {
        self.policy = policy;
        self.recompute()
    }

    /// The placements computed from the current state.
    ///
    /// Empty after a failed recompute.
    pub fn label_placements(&self) -> &[LabelPlacement] {
        &self.placements
    }

    /// The error from the most recent recompute, if it failed.
    pub fn last_error(&self) -> Option<LabelError> {
        self.last_error
    }

    /// Current range.
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current policy.
    pub fn policy(&self) -> &LabelPolicy {
        &self.policy
    }

    /// The value/pixel mapping for the current state.
    pub fn transform(&self) -> Result<AxisTransform, LabelError> {
        AxisTransform::new(self.range, self.viewport)
    }

    /// Recomputes placements and returns how they differ from the previous set.
    ///
    /// On error the stored placements are cleared; callers drop whatever they
    /// had rendered and skip this frame.
    pub fn recompute(&mut self) -> Result<Vec<PlacementDiff>, LabelError> {
        match select_label_positions(&self.policy, self.range, self.viewport) {
            Ok(next) => {
                let diffs = diff_placements(&self.placements, &next);
                log::debug!(
                    "reference labels for {}..{} over {}px: {} placements, {} changed",
                    self.range.min,
                    self.range.max,
                    self.viewport.height,
                    next.len(),
                    diffs.len()
                );
                self.placements = next;
                self.last_error = None;
                Ok(diffs)
            }
            Err(err) => {
                log::warn!("reference labels not placed: {err}");
                self.placements.clear();
                self.last_error = Some(err);
                Err(err)
            }
        }
    }
}

impl Default for AxisLabelPositioner {
    fn default() -> Self {
        Self::new(
            LabelPolicy::default(),
            ValueRange::default(),
            Viewport::new(200.0, 10.0, 10.0),
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(210.0, 10.0, 10.0)
    }

    #[test]
    fn min_and_max_texts() {
        let policy = LabelPolicy::relative([]).with_decimal_places(1);
        let out = select_label_positions(&policy, ValueRange::new(-5.0, 20.0), viewport()).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].slot, LabelSlot::Min);
        assert_eq!(out[0].text, "-5.0");
        assert_eq!(out[0].pixel_y, 200.0);
        assert_eq!(out[1].slot, LabelSlot::Max);
        assert_eq!(out[1].text, "20.0");
        assert_eq!(out[1].pixel_y, 10.0);
    }

    #[test]
    fn relative_slots_keep_configured_index() {
        let policy = LabelPolicy::relative([0.0, 0.25, 1.0, 0.75]);
        let out = select_label_positions(&policy, ValueRange::new(0.0, 100.0), viewport()).unwrap();
        let slots: Vec<_> = out.iter().map(|p| p.slot).collect();
        assert_eq!(
            slots,
            [
                LabelSlot::Min,
                LabelSlot::Max,
                LabelSlot::Relative(1),
                LabelSlot::Relative(3)
            ]
        );
        assert_eq!(out[2].text, "25");
        assert_eq!(out[3].text, "75");
    }

    #[test]
    fn out_of_range_fractions_are_skipped() {
        let policy = LabelPolicy::relative([-0.5, 0.5, 1.5])
            .with_min(false)
            .with_max(false);
        let out = select_label_positions(&policy, ValueRange::new(0.0, 10.0), viewport()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].slot, LabelSlot::Relative(1));
    }

    #[test]
    fn positioner_tracks_changes() {
        let mut positioner = AxisLabelPositioner::new(
            LabelPolicy::relative([0.5]),
            ValueRange::new(0.0, 100.0),
            viewport(),
        );
        assert_eq!(positioner.label_placements().len(), 3);

        let diffs = positioner.set_range(0.0, 200.0).unwrap();
        // Min stays at 0; max and the midpoint change text.
        assert_eq!(diffs.len(), 2);
        assert_eq!(positioner.label_placements()[2].text, "100");

        let diffs = positioner.set_range(0.0, 200.0).unwrap();
        assert!(diffs.is_empty());
    }

    #[test]
    fn failed_recompute_clears_and_recovers() {
        let mut positioner = AxisLabelPositioner::default();
        assert!(!positioner.label_placements().is_empty());

        assert!(positioner.set_range(50.0, 50.0).is_err());
        assert!(positioner.label_placements().is_empty());
        assert!(positioner.last_error().is_some());

        let diffs = positioner.set_range(0.0, 50.0).unwrap();
        assert_eq!(diffs.len(), positioner.label_placements().len());
        assert!(positioner.last_error().is_none());
    }

    #[test]
    fn viewport_change_keeps_margins() {
        let mut positioner = AxisLabelPositioner::default();
        positioner.set_viewport(80.0, 410.0).unwrap();
        let viewport = positioner.viewport();
        assert_eq!(viewport.width, 80.0);
        assert_eq!(viewport.usable_height(), 390.0);
        let min = &positioner.label_placements()[0];
        assert_eq!(min.pixel_y, 400.0);
    }
}
