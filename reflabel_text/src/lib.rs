// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement for reference label layout.
//!
//! Reference labels are sized before they are placed: the label column is as
//! wide as the widest number it may have to show, and each label is centred
//! vertically on its reference line using its measured height. Glyph shaping
//! and rasterisation stay with the renderer, so layout code only depends on the
//! small [`TextMeasurer`] interface defined here.
//!
//! The crate is `no_std` (it uses `alloc` for named font families) and has no
//! dependencies.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// Measures single lines of label text.
///
/// A renderer backed by a real shaping engine should implement this so label
/// frames line up with the glyphs it draws. [`HeuristicTextMeasurer`] is good
/// enough for tests and previews.
pub trait TextMeasurer {
    /// Measure `text` as a single line.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Returns the `(width, height)` box a label showing `text` occupies.
    fn bounding_size(&self, text: &str, style: &TextStyle) -> (f64, f64) {
        let metrics = self.measure(text, style);
        (metrics.advance_width, metrics.line_height())
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Font attributes that affect label measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in view coordinates (points or pixels).
    pub font_size: f64,
    /// Preferred font family.
    pub font_family: FontFamily,
    /// Font weight (`400` regular, `700` bold).
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Creates a regular sans-serif style of the given size.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
        }
    }

    /// Replaces the font family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Replaces the font weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// Generic sans-serif.
    SansSerif,
    /// Generic monospace. Digits in a monospace face all share one advance.
    Monospace,
    /// A named family such as `"Helvetica Neue"`.
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family name as used in CSS/SVG font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style numeric font weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Regular weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// Metrics for one measured line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance of the whole line.
    pub advance_width: f64,
    /// Baseline to top of typical glyphs.
    pub ascent: f64,
    /// Baseline to bottom of typical glyphs.
    pub descent: f64,
    /// Extra spacing beyond ascent and descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// Estimates metrics from the font size alone.
///
/// Every glyph advances 0.6em (0.62em when bold); ascent is 0.8em and descent
/// 0.2em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let em = if style.font_weight >= FontWeight::BOLD {
            0.62
        } else {
            0.6
        };
        TextMetrics {
            advance_width: em * style.font_size * text.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}
