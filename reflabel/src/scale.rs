// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The linear value/pixel mapping of the vertical axis.
//!
//! Values grow upward while screen `y` grows downward, so `max` maps to the
//! top edge of the usable area and `min` to the bottom edge.

use crate::error::{GeometryIssue, LabelError};
use crate::geometry::{ValueRange, Viewport};

/// A validated mapping between data values and pixel rows.
///
/// Construction fails for a zero-width range or a viewport without usable
/// height, so the mapping methods never divide by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTransform {
    range: ValueRange,
    viewport: Viewport,
}

impl AxisTransform {
    /// Creates a transform, rejecting degenerate geometry.
    pub fn new(range: ValueRange, viewport: Viewport) -> Result<Self, LabelError> {
        range.validate()?;
        viewport.validate()?;
        Ok(Self { range, viewport })
    }

    /// Returns the value range.
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Returns the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Maps a data value to a pixel row.
    pub fn value_to_pixel_y(&self, value: f64) -> f64 {
        let (min, max) = (self.range.min, self.range.max);
        let t = (value - max) / (min - max);
        normalize_signed_zero(t * self.viewport.usable_height() + self.viewport.top_margin)
    }

    /// Maps a pixel row back to a data value.
    pub fn pixel_y_to_value(&self, y: f64) -> f64 {
        let (min, max) = (self.range.min, self.range.max);
        let t = (y - self.viewport.top_margin) / self.viewport.usable_height();
        normalize_signed_zero(t * (min - max) + max)
    }

    /// Pixel row of a fraction of the usable height, `0` at the bottom and `1`
    /// at the top.
    pub fn relative_to_pixel_y(&self, fraction: f64) -> f64 {
        normalize_signed_zero(
            self.viewport.usable_height() * (1.0 - fraction) + self.viewport.top_margin,
        )
    }
}

/// Maps `value` to a pixel row.
///
/// Fails with [`LabelError::InvalidGeometry`] for degenerate geometry or when
/// the result would not be finite.
pub fn value_to_pixel_y(
    value: f64,
    range: ValueRange,
    viewport: Viewport,
) -> Result<f64, LabelError> {
    finite(AxisTransform::new(range, viewport)?.value_to_pixel_y(value))
}

/// Maps pixel row `y` back to a data value. Inverse of [`value_to_pixel_y`].
pub fn pixel_y_to_value(y: f64, range: ValueRange, viewport: Viewport) -> Result<f64, LabelError> {
    finite(AxisTransform::new(range, viewport)?.pixel_y_to_value(y))
}

fn finite(v: f64) -> Result<f64, LabelError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GeometryIssue::NonFiniteValue.into())
    }
}

/// Turns `-0.0` into `0.0` so it never reaches a label as `"-0"`.
pub(crate) fn normalize_signed_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn chart() -> (ValueRange, Viewport) {
        (
            ValueRange::new(0.0, 100.0),
            Viewport::new(210.0, 10.0, 10.0),
        )
    }

    #[test]
    fn endpoints_land_on_usable_edges() {
        let (range, viewport) = chart();
        assert_eq!(value_to_pixel_y(100.0, range, viewport), Ok(10.0));
        assert_eq!(value_to_pixel_y(0.0, range, viewport), Ok(200.0));
        assert_eq!(value_to_pixel_y(50.0, range, viewport), Ok(105.0));
    }

    #[test]
    fn pixel_rows_map_back_to_values() {
        let (range, viewport) = chart();
        assert_eq!(pixel_y_to_value(10.0, range, viewport), Ok(100.0));
        assert_eq!(pixel_y_to_value(200.0, range, viewport), Ok(0.0));
        assert_eq!(pixel_y_to_value(105.0, range, viewport), Ok(50.0));
    }

    #[test]
    fn negative_zero_is_normalized() {
        // max maps to a zero top margin; (max - max) / (min - max) is -0.0.
        let range = ValueRange::new(0.0, 10.0);
        let viewport = Viewport::new(100.0, 0.0, 0.0);
        let y = value_to_pixel_y(10.0, range, viewport).unwrap();
        assert!(y.is_sign_positive(), "expected +0.0, got {y:?}");

        let range = ValueRange::new(-10.0, 0.0);
        let v = pixel_y_to_value(0.0, range, viewport).unwrap();
        assert!(v == 0.0 && v.is_sign_positive(), "expected +0.0, got {v:?}");
    }

    #[test]
    fn relative_fractions_measure_from_the_bottom() {
        let (range, viewport) = chart();
        let t = AxisTransform::new(range, viewport).unwrap();
        assert_eq!(t.relative_to_pixel_y(0.0), 200.0);
        assert_eq!(t.relative_to_pixel_y(1.0), 10.0);
        assert_eq!(t.relative_to_pixel_y(0.5), 105.0);
    }

    #[test]
    fn degenerate_geometry_is_an_error() {
        let (_, viewport) = chart();
        assert!(matches!(
            value_to_pixel_y(50.0, ValueRange::new(50.0, 50.0), viewport),
            Err(LabelError::InvalidGeometry(
                GeometryIssue::DegenerateRange { .. }
            ))
        ));
        assert!(matches!(
            pixel_y_to_value(5.0, ValueRange::new(0.0, 1.0), Viewport::new(10.0, 5.0, 5.0)),
            Err(LabelError::InvalidGeometry(
                GeometryIssue::NonPositiveUsableHeight { .. }
            ))
        ));
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let (range, viewport) = chart();
        assert_eq!(
            value_to_pixel_y(f64::INFINITY, range, viewport),
            Err(LabelError::InvalidGeometry(GeometryIssue::NonFiniteValue))
        );
    }

    #[test]
    fn overflowing_range_does_not_collapse_to_an_edge() {
        let (_, viewport) = chart();
        assert_eq!(
            value_to_pixel_y(0.0, ValueRange::new(-1e308, 1e308), viewport),
            Err(LabelError::InvalidGeometry(GeometryIssue::NonFiniteValue))
        );
    }
}
