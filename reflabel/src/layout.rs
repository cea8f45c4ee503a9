// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frames for the label column.
//!
//! The column is a fixed-width strip beside the plot. It holds a one pixel
//! border in the reference-line color, a background container and one frame
//! per label. Coordinates nest like a view hierarchy:
//! - [`LabelLayout::view`] is in chart coordinates,
//! - [`LabelLayout::border`] and [`LabelLayout::container`] are relative to the
//!   view,
//! - each [`LabelFrame::rect`] is relative to the container.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};
use peniko::Color;
use reflabel_text::{TextMeasurer, TextStyle};

use crate::geometry::Viewport;
use crate::positioner::{LabelPlacement, LabelSlot};
use crate::settings::{LabelSide, ReferenceLabelSettings};

/// Width of the border between the plot and the labels.
pub const BORDER_WIDTH: f64 = 1.0;

/// A positioned label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelFrame {
    /// Slot the label was placed for.
    pub slot: LabelSlot,
    /// Text bounds, relative to the container.
    pub rect: Rect,
    /// Text to draw.
    pub text: String,
    /// Value the text shows.
    pub value: f64,
}

/// Everything a renderer needs to draw the label column.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelLayout {
    /// Column bounds in chart coordinates.
    pub view: Rect,
    /// Border strip, relative to `view`.
    pub border: Rect,
    /// Background container, relative to `view`.
    pub container: Rect,
    /// Label frames, relative to `container`.
    pub labels: Vec<LabelFrame>,
    /// Label text paint.
    pub label_fill: Color,
    /// Container paint.
    pub background_fill: Color,
    /// Border paint.
    pub border_fill: Color,
    /// Label font.
    pub label_style: TextStyle,
}

impl LabelLayout {
    /// Offset from container-relative to chart coordinates.
    pub fn container_origin(&self) -> Vec2 {
        self.view.origin().to_vec2() + self.container.origin().to_vec2()
    }

    /// A label's bounds in chart coordinates.
    pub fn label_rect_in_chart(&self, label: &LabelFrame) -> Rect {
        label.rect + self.container_origin()
    }
}

/// The largest label the column must fit.
///
/// Measured on a string of `max_integer_digits + max_fraction_digits` nines and
/// a decimal point.
pub fn max_label_size(settings: &ReferenceLabelSettings, measurer: &dyn TextMeasurer) -> Size {
    let mut widest = "9".repeat(settings.max_integer_digits + settings.max_fraction_digits);
    widest.push('.');
    let (width, height) = measurer.bounding_size(&widest, &settings.label_style);
    Size::new(width, height)
}

/// Lays out the column for `placements` inside `viewport`.
///
/// When the min label is excluded the container stops short of the bottom edge
/// by the x-axis data point label allowance plus half a label height, so the
/// background does not run into the x-axis labels.
pub fn arrange(
    settings: &ReferenceLabelSettings,
    viewport: Viewport,
    include_min: bool,
    placements: &[LabelPlacement],
    measurer: &dyn TextMeasurer,
) -> LabelLayout {
    let max_label = max_label_size(settings, measurer);
    let width = max_label.width;
    let height = viewport.height;
    let thickness = settings.line_thickness;

    let view_x0 = match settings.side {
        LabelSide::Right => viewport.width - width,
        LabelSide::Left => 0.0,
    };
    let view = Rect::new(view_x0, 0.0, view_x0 + width, height);

    let border = match settings.side {
        LabelSide::Right => Rect::new(0.0, 0.0, BORDER_WIDTH, height),
        LabelSide::Left => Rect::new(width - BORDER_WIDTH, 0.0, width, height),
    };

    let mut container_height = (height - 2.0 * thickness).max(0.0);
    if !include_min {
        let adjust = settings.data_point_label_allowance() + max_label.height / 2.0;
        container_height = (container_height - adjust).max(0.0);
    }
    let container = Rect::new(0.0, thickness, width, thickness + container_height);

    let labels = if settings.show_labels {
        placements
            .iter()
            .map(|p| {
                let (text_w, text_h) = measurer.bounding_size(&p.text, &settings.label_style);
                let x0 = match settings.side {
                    LabelSide::Right => settings.label_inset,
                    // Labels wider than the column stay pinned to its left edge.
                    LabelSide::Left => (width - settings.label_inset - text_w).max(0.0),
                };
                let y0 = p.pixel_y - text_h / 2.0 - thickness;
                LabelFrame {
                    slot: p.slot,
                    rect: Rect::from_origin_size((x0, y0), (text_w, text_h)),
                    text: p.text.clone(),
                    value: p.value,
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    LabelLayout {
        view,
        border,
        container,
        labels,
        label_fill: settings.label_color,
        background_fill: settings.background_color,
        border_fill: settings.line_color,
        label_style: settings.label_style.clone(),
    }
}
