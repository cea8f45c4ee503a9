// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation settings for the reference label column.

use peniko::Color;
use peniko::color::palette::css;
use reflabel_text::TextStyle;

/// Which side of the chart the label column sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelSide {
    /// Column on the left, labels right-aligned against the reference-line
    /// border.
    Left,
    /// Column on the right, labels left-aligned after the border.
    #[default]
    Right,
}

/// Colors, fonts and spacing for the label column.
///
/// Label *selection* (which rows, how many decimals) lives in
/// [`LabelPolicy`](crate::LabelPolicy); this only affects how the column is
/// laid out and painted.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceLabelSettings {
    /// Label text color.
    pub label_color: Color,
    /// Fill behind the labels.
    pub background_color: Color,
    /// Color of the reference lines and of the column border.
    pub line_color: Color,
    /// Label font.
    pub label_style: TextStyle,
    /// Reference line thickness.
    pub line_thickness: f64,
    /// Column side.
    pub side: LabelSide,
    /// Whether labels are drawn at all. The border and background are drawn
    /// either way.
    pub show_labels: bool,
    /// Gap between the border and the label text.
    pub label_inset: f64,
    /// Space above the row where the range maximum is drawn.
    pub top_margin: f64,
    /// Space below the row where the range minimum is drawn.
    pub bottom_margin: f64,
    /// Integer digits the column must fit.
    pub max_integer_digits: usize,
    /// Fraction digits the column must fit.
    pub max_fraction_digits: usize,
    /// Space the x-axis reserves above its data point labels.
    pub data_point_label_top_margin: f64,
    /// Space the x-axis reserves below its data point labels.
    pub data_point_label_bottom_margin: f64,
    /// Font size of the x-axis data point labels, if it shows any.
    pub data_point_label_font_size: Option<f64>,
}

impl ReferenceLabelSettings {
    /// Sets the label text color.
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    /// Sets the background fill.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Sets the reference line color.
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    /// Sets the label font.
    pub fn with_label_style(mut self, style: TextStyle) -> Self {
        self.label_style = style;
        self
    }

    /// Sets the reference line thickness.
    pub fn with_line_thickness(mut self, thickness: f64) -> Self {
        self.line_thickness = thickness.max(0.0);
        self
    }

    /// Sets the column side.
    pub fn with_side(mut self, side: LabelSide) -> Self {
        self.side = side;
        self
    }

    /// Shows or hides the labels.
    pub fn with_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    /// Sets the gap between border and text.
    pub fn with_label_inset(mut self, inset: f64) -> Self {
        self.label_inset = inset;
        self
    }

    /// Sets the top and bottom margins.
    pub fn with_margins(mut self, top_margin: f64, bottom_margin: f64) -> Self {
        self.top_margin = top_margin;
        self.bottom_margin = bottom_margin;
        self
    }

    /// Sets how many digits the column must fit.
    pub fn with_max_digits(mut self, integer_digits: usize, fraction_digits: usize) -> Self {
        self.max_integer_digits = integer_digits;
        self.max_fraction_digits = fraction_digits;
        self
    }

    /// Describes the x-axis data point labels below the chart.
    pub fn with_data_point_labels(
        mut self,
        top_margin: f64,
        bottom_margin: f64,
        font_size: Option<f64>,
    ) -> Self {
        self.data_point_label_top_margin = top_margin;
        self.data_point_label_bottom_margin = bottom_margin;
        self.data_point_label_font_size = font_size;
        self
    }

    /// Height taken by the x-axis data point labels.
    pub fn data_point_label_allowance(&self) -> f64 {
        self.data_point_label_top_margin
            + self.data_point_label_bottom_margin
            + self.data_point_label_font_size.unwrap_or(0.0)
    }
}

impl Default for ReferenceLabelSettings {
    fn default() -> Self {
        Self {
            label_color: css::BLACK,
            background_color: Color::TRANSPARENT,
            line_color: css::BLACK.with_alpha(0.2),
            label_style: TextStyle::new(8.0),
            line_thickness: 0.5,
            side: LabelSide::Right,
            show_labels: true,
            label_inset: 10.0,
            top_margin: 10.0,
            bottom_margin: 10.0,
            max_integer_digits: 5,
            max_fraction_digits: 2,
            data_point_label_top_margin: 10.0,
            data_point_label_bottom_margin: 0.0,
            data_point_label_font_size: None,
        }
    }
}
