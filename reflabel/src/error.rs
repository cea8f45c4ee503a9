// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use crate::policy::PositionMode;

/// Why a range/viewport pair cannot be mapped to pixels.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum GeometryIssue {
    /// `min == max`, so every value maps to the same (undefined) pixel row.
    #[error("value range {min}..{max} has zero width")]
    DegenerateRange {
        /// Range minimum.
        min: f64,
        /// Range maximum.
        max: f64,
    },
    /// `min > max`.
    #[error("value range {min}..{max} is inverted")]
    InvertedRange {
        /// Range minimum.
        min: f64,
        /// Range maximum.
        max: f64,
    },
    /// Height minus both margins is zero or negative.
    #[error("usable height {usable_height} is not positive")]
    NonPositiveUsableHeight {
        /// `height - top_margin - bottom_margin`.
        usable_height: f64,
    },
    /// A NaN or infinite value reached the transform or the formatter.
    #[error("non-finite value")]
    NonFiniteValue,
}

/// Errors produced while positioning reference labels.
///
/// Both variants are recoverable: the caller skips rendering labels for this
/// frame and tries again on the next range or viewport change.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum LabelError {
    /// The range or viewport cannot be mapped to pixel positions.
    #[error("invalid label geometry: {0}")]
    InvalidGeometry(#[from] GeometryIssue),
    /// The policy asks for a position mode that has no implementation.
    #[error("label position mode `{0}` is not supported")]
    UnsupportedPositionMode(PositionMode),
}
