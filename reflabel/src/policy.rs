// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which rows of the value axis get a label.

extern crate alloc;

use alloc::vec::Vec;

use crate::format::{NumberFormat, NumberLocale, NumberStyle};

/// How label positions along the axis are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PositionMode {
    /// Fractions of the usable height (`LabelPolicy::relative_positions`).
    #[default]
    Relative,
    /// Fixed data values.
    ///
    /// Not implemented: requesting it yields
    /// [`LabelError::UnsupportedPositionMode`](crate::LabelError::UnsupportedPositionMode).
    Absolute,
}

impl core::fmt::Display for PositionMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Relative => "relative",
            Self::Absolute => "absolute",
        })
    }
}

/// Label selection and text policy.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPolicy {
    /// Label the bottom edge with the range minimum.
    pub include_min: bool,
    /// Label the top edge with the range maximum.
    pub include_max: bool,
    /// Position selection mode.
    pub position_mode: PositionMode,
    /// Fractions in `[0, 1]`, `0` at the bottom edge and `1` at the top.
    ///
    /// Only used in [`PositionMode::Relative`]. Order is preserved in the
    /// output; fractions outside `[0, 1]` are skipped.
    pub relative_positions: Vec<f64>,
    /// Digits after the decimal separator.
    pub decimal_places: usize,
    /// Grouping/percent style for label text.
    pub number_style: NumberStyle,
    /// Separators for label text.
    pub locale: NumberLocale,
}

impl LabelPolicy {
    /// Relative labels at `positions`, with min and max labels and no decimals.
    pub fn relative(positions: impl IntoIterator<Item = f64>) -> Self {
        Self {
            include_min: true,
            include_max: true,
            position_mode: PositionMode::Relative,
            relative_positions: positions.into_iter().collect(),
            decimal_places: 0,
            number_style: NumberStyle::Plain,
            locale: NumberLocale::EN,
        }
    }

    /// A policy asking for absolute positions.
    pub fn absolute() -> Self {
        Self {
            position_mode: PositionMode::Absolute,
            ..Self::relative([])
        }
    }

    /// Enables or disables the min label.
    pub fn with_min(mut self, include_min: bool) -> Self {
        self.include_min = include_min;
        self
    }

    /// Enables or disables the max label.
    pub fn with_max(mut self, include_max: bool) -> Self {
        self.include_max = include_max;
        self
    }

    /// Sets the number of decimal places.
    pub fn with_decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Sets the number style.
    pub fn with_number_style(mut self, number_style: NumberStyle) -> Self {
        self.number_style = number_style;
        self
    }

    /// Sets the locale separators.
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    /// The formatter for label text.
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new(self.decimal_places)
            .with_style(self.number_style)
            .with_locale(self.locale)
    }

    /// Whether a relative fraction is already covered by an edge label.
    pub(crate) fn edge_covers(&self, fraction: f64) -> bool {
        (self.include_min && fraction == 0.0) || (self.include_max && fraction == 1.0)
    }
}

impl Default for LabelPolicy {
    /// Quarter lines with min and max labels.
    fn default() -> Self {
        Self::relative([0.0, 0.25, 0.5, 0.75, 1.0])
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn edges_cover_only_their_own_fraction() {
        let both = LabelPolicy::default();
        assert!(both.edge_covers(0.0));
        assert!(both.edge_covers(1.0));
        assert!(!both.edge_covers(0.5));

        let max_only = LabelPolicy::default().with_min(false);
        assert!(!max_only.edge_covers(0.0));
        assert!(max_only.edge_covers(1.0));

        let neither = LabelPolicy::default().with_min(false).with_max(false);
        assert!(!neither.edge_covers(0.0));
        assert!(!neither.edge_covers(1.0));
    }

    #[test]
    fn number_format_follows_policy() {
        let policy = LabelPolicy::default()
            .with_decimal_places(2)
            .with_number_style(NumberStyle::Decimal)
            .with_locale(NumberLocale::DE);
        assert_eq!(policy.number_format().format(1234.5).unwrap(), "1.234,50");
    }

    #[test]
    fn absolute_keeps_edge_labels() {
        let policy = LabelPolicy::absolute();
        assert_eq!(policy.position_mode, PositionMode::Absolute);
        assert!(policy.include_min && policy.include_max);
        assert!(policy.relative_positions.is_empty());
    }
}
