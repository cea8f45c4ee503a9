// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric reference labels for a chart's value axis.
//!
//! A chart with horizontal reference lines usually labels some of them: the
//! range minimum at the bottom edge, the maximum at the top edge, and a few
//! lines at fixed fractions of the height in between. This crate computes
//! those labels:
//! - [`AxisTransform`] maps data values to pixel rows and back.
//! - [`select_label_positions`] picks the labelled rows for a [`LabelPolicy`]
//!   and formats their values.
//! - [`AxisLabelPositioner`] keeps the current range and viewport and reports
//!   [`PlacementDiff`]s whenever either changes.
//! - [`ReferenceLabelView`] adds presentation settings and produces a
//!   [`LabelLayout`] of frames for a renderer to paint.
//!
//! Drawing is out of scope; text is measured through
//! [`reflabel_text::TextMeasurer`].

#![no_std]

extern crate alloc;

mod diff;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod layout;
mod policy;
mod positioner;
mod scale;
mod settings;
mod view;

pub use diff::{PlacementDiff, diff_placements};
pub use error::{GeometryIssue, LabelError};
pub use format::{NumberFormat, NumberLocale, NumberStyle};
pub use geometry::{ValueRange, Viewport};
pub use layout::{BORDER_WIDTH, LabelFrame, LabelLayout, arrange, max_label_size};
pub use policy::{LabelPolicy, PositionMode};
pub use positioner::{
    AxisLabelPositioner, LabelPlacement, LabelSlot, Placements, select_label_positions,
};
pub use reflabel_text::{HeuristicTextMeasurer, TextMeasurer, TextStyle};
pub use scale::{AxisTransform, pixel_y_to_value, value_to_pixel_y};
pub use settings::{LabelSide, ReferenceLabelSettings};
pub use view::ReferenceLabelView;
