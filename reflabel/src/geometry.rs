// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value ranges and viewports.

use crate::error::{GeometryIssue, LabelError};

/// The data values spanned by the chart's vertical axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    /// Value drawn at the bottom edge of the usable area.
    pub min: f64,
    /// Value drawn at the top edge of the usable area.
    pub max: f64,
}

impl ValueRange {
    /// Creates a range. It is not validated until it is used for mapping.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` when `min == max`.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Returns `true` when `value` lies within `min..=max`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Checks that the range can be mapped onto a pixel span.
    pub fn validate(&self) -> Result<(), LabelError> {
        // A span that overflows would collapse every value onto one edge.
        if !self.min.is_finite() || !self.max.is_finite() || !self.span().is_finite() {
            return Err(GeometryIssue::NonFiniteValue.into());
        }
        if self.min == self.max {
            return Err(GeometryIssue::DegenerateRange {
                min: self.min,
                max: self.max,
            }
            .into());
        }
        if self.min > self.max {
            return Err(GeometryIssue::InvertedRange {
                min: self.min,
                max: self.max,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

impl From<(f64, f64)> for ValueRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// The pixel area the value axis is drawn over.
///
/// Screen `y` grows downward. The top margin sits above the row where `max`
/// is drawn and the bottom margin below the row where `min` is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Total width available to the label view.
    pub width: f64,
    /// Total height, margins included.
    pub height: f64,
    /// Pixels above the `max` row.
    pub top_margin: f64,
    /// Pixels below the `min` row.
    pub bottom_margin: f64,
}

impl Viewport {
    /// Creates a zero-width viewport of the given height and margins.
    pub fn new(height: f64, top_margin: f64, bottom_margin: f64) -> Self {
        Self {
            width: 0.0,
            height,
            top_margin,
            bottom_margin,
        }
    }

    /// Sets the width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets both margins.
    pub fn with_margins(mut self, top_margin: f64, bottom_margin: f64) -> Self {
        self.top_margin = top_margin;
        self.bottom_margin = bottom_margin;
        self
    }

    /// Returns `height - top_margin - bottom_margin`.
    pub fn usable_height(&self) -> f64 {
        self.height - self.top_margin - self.bottom_margin
    }

    /// Pixel row of the top edge of the usable area (where `max` is drawn).
    pub fn top_edge(&self) -> f64 {
        self.top_margin
    }

    /// Pixel row of the bottom edge of the usable area (where `min` is drawn).
    pub fn bottom_edge(&self) -> f64 {
        self.height - self.bottom_margin
    }

    /// Checks that there is a positive, finite span to map values onto.
    pub fn validate(&self) -> Result<(), LabelError> {
        let usable_height = self.usable_height();
        if !usable_height.is_finite() || !self.top_margin.is_finite() {
            return Err(GeometryIssue::NonFiniteValue.into());
        }
        if usable_height <= 0.0 {
            return Err(GeometryIssue::NonPositiveUsableHeight { usable_height }.into());
        }
        Ok(())
    }
}
