// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reference label column as a whole.

extern crate alloc;

use alloc::vec::Vec;

use reflabel_text::TextMeasurer;

use crate::diff::{PlacementDiff, diff_placements};
use crate::error::LabelError;
use crate::geometry::{ValueRange, Viewport};
use crate::layout::{LabelLayout, arrange};
use crate::policy::LabelPolicy;
use crate::positioner::{AxisLabelPositioner, LabelPlacement};
use crate::settings::ReferenceLabelSettings;

/// A label column: positioner plus presentation settings.
///
/// The view never draws. After each change it reports which placements
/// changed; [`layout`](Self::layout) turns the current placements into frames
/// that the caller paints with its own text primitives.
#[derive(Clone, Debug)]
pub struct ReferenceLabelView {
    positioner: AxisLabelPositioner,
    settings: ReferenceLabelSettings,
}

impl ReferenceLabelView {
    /// Creates a view of the given size showing the default `0..100` range.
    pub fn new(
        width: f64,
        height: f64,
        settings: ReferenceLabelSettings,
        policy: LabelPolicy,
    ) -> Self {
        let viewport =
            Viewport::new(height, settings.top_margin, settings.bottom_margin).with_width(width);
        Self {
            positioner: AxisLabelPositioner::new(policy, ValueRange::default(), viewport),
            settings,
        }
    }

    /// Replaces the value range.
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<Vec<PlacementDiff>, LabelError> {
        self.positioner.set_range(min, max)
    }

    /// Resizes the view.
    pub fn set_viewport(
        &mut self,
        width: f64,
        height: f64,
    ) -> Result<Vec<PlacementDiff>, LabelError> {
        self.positioner.set_viewport(width, height)
    }

    /// Replaces the label policy.
    pub fn set_policy(&mut self, policy: LabelPolicy) -> Result<Vec<PlacementDiff>, LabelError> {
        self.positioner.set_policy(policy)
    }

    /// Replaces the presentation settings. Margin changes move the labels.
    ///
    /// Showing hidden labels reports every current placement as entering;
    /// hiding them reports every previous placement as exiting.
    pub fn set_settings(
        &mut self,
        settings: ReferenceLabelSettings,
    ) -> Result<Vec<PlacementDiff>, LabelError> {
        let was_shown = self.settings.show_labels;
        let hiding = was_shown && !settings.show_labels;
        let previous: Vec<LabelPlacement> = if hiding {
            self.positioner.label_placements().to_vec()
        } else {
            Vec::new()
        };
        let (top, bottom) = (settings.top_margin, settings.bottom_margin);
        self.settings = settings;
        let diffs = self.positioner.set_margins(top, bottom)?;
        if hiding {
            Ok(diff_placements(&previous, &[]))
        } else if !was_shown && self.settings.show_labels {
            Ok(diff_placements(&[], self.positioner.label_placements()))
        } else {
            Ok(diffs)
        }
    }

    /// Current placements.
    pub fn label_placements(&self) -> &[LabelPlacement] {
        self.positioner.label_placements()
    }

    /// The underlying positioner.
    pub fn positioner(&self) -> &AxisLabelPositioner {
        &self.positioner
    }

    /// Current settings.
    pub fn settings(&self) -> &ReferenceLabelSettings {
        &self.settings
    }

    /// Frames for the current placements.
    ///
    /// Fails with the last recompute error if the geometry is degenerate.
    pub fn layout(&self, measurer: &dyn TextMeasurer) -> Result<LabelLayout, LabelError> {
        if let Some(err) = self.positioner.last_error() {
            return Err(err);
        }
        Ok(arrange(
            &self.settings,
            self.positioner.viewport(),
            self.positioner.policy().include_min,
            self.positioner.label_placements(),
            measurer,
        ))
    }
}
