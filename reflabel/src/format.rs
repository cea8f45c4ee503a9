// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label number formatting.
//!
//! Labels always show a fixed number of decimal places, rounded the way
//! `core::fmt` rounds `{:.N}`, and never use scientific notation.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::error::{GeometryIssue, LabelError};

/// How the integer part and suffix of a label are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NumberStyle {
    /// Digits only: `1234.5`.
    #[default]
    Plain,
    /// Digits with thousands grouping: `1,234.5`.
    Decimal,
    /// Value times 100 with grouping and a `%` suffix: `12.5%` for `0.125`.
    Percent,
}

/// Separator characters for a locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NumberLocale {
    /// Character between the integer and fractional digits.
    pub decimal_separator: char,
    /// Character between groups of three integer digits.
    pub grouping_separator: char,
}

impl NumberLocale {
    /// `1,234.5`
    pub const EN: Self = Self {
        decimal_separator: '.',
        grouping_separator: ',',
    };
    /// `1.234,5`
    pub const DE: Self = Self {
        decimal_separator: ',',
        grouping_separator: '.',
    };
    /// `1 234,5` with a no-break space.
    pub const FR: Self = Self {
        decimal_separator: ',',
        grouping_separator: '\u{a0}',
    };
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::EN
    }
}

/// A fixed-precision number formatter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NumberFormat {
    /// Digits after the decimal separator. `0` omits the separator.
    pub decimal_places: usize,
    /// Grouping/percent style.
    pub style: NumberStyle,
    /// Separators.
    pub locale: NumberLocale,
}

impl NumberFormat {
    /// Creates a plain formatter with `decimal_places` fractional digits.
    pub fn new(decimal_places: usize) -> Self {
        Self {
            decimal_places,
            style: NumberStyle::Plain,
            locale: NumberLocale::EN,
        }
    }

    /// Sets the style.
    pub fn with_style(mut self, style: NumberStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the locale.
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Formats `value`.
    ///
    /// Non-finite values have no pixel position either, so they are reported as
    /// [`GeometryIssue::NonFiniteValue`].
    pub fn format(&self, value: f64) -> Result<String, LabelError> {
        let scaled = match self.style {
            NumberStyle::Percent => value * 100.0,
            NumberStyle::Plain | NumberStyle::Decimal => value,
        };
        if !scaled.is_finite() {
            return Err(GeometryIssue::NonFiniteValue.into());
        }

        let fixed = format!("{:.*}", self.decimal_places, scaled);
        let (negative, digits) = match fixed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, fixed.as_str()),
        };
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (digits, None),
        };
        // -0.004 at two places would otherwise read "-0.00".
        let rounds_to_zero = digits.bytes().all(|b| b == b'0' || b == b'.');

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 2);
        if negative && !rounds_to_zero {
            out.push('-');
        }
        match self.style {
            NumberStyle::Plain => out.push_str(int_part),
            NumberStyle::Decimal | NumberStyle::Percent => {
                push_grouped(&mut out, int_part, self.locale.grouping_separator);
            }
        }
        if let Some(frac_part) = frac_part {
            out.push(self.locale.decimal_separator);
            out.push_str(frac_part);
        }
        if self.style == NumberStyle::Percent {
            out.push('%');
        }
        Ok(out)
    }
}

fn push_grouped(out: &mut String, int_digits: &str, separator: char) {
    let len = int_digits.len();
    for (i, c) in int_digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn fixed_decimal_places() {
        assert_eq!(NumberFormat::new(0).format(42.0).unwrap(), "42");
        assert_eq!(NumberFormat::new(2).format(42.0).unwrap(), "42.00");
        assert_eq!(NumberFormat::new(1).format(-3.26).unwrap(), "-3.3");
        assert_eq!(NumberFormat::new(2).format(0.126).unwrap(), "0.13");
    }

    #[test]
    fn never_scientific() {
        assert_eq!(
            NumberFormat::new(0).format(1.0e21).unwrap(),
            "1000000000000000000000"
        );
        assert_eq!(NumberFormat::new(3).format(1.0e-7).unwrap(), "0.000");
    }

    #[test]
    fn no_negative_zero() {
        assert_eq!(NumberFormat::new(2).format(-0.0).unwrap(), "0.00");
        assert_eq!(NumberFormat::new(2).format(-0.004).unwrap(), "0.00");
        assert_eq!(NumberFormat::new(0).format(-0.4).unwrap(), "0");
    }

    #[test]
    fn grouping_and_locale() {
        let decimal = NumberFormat::new(1).with_style(NumberStyle::Decimal);
        assert_eq!(decimal.format(1234567.26).unwrap(), "1,234,567.3");
        assert_eq!(decimal.format(-999.0).unwrap(), "-999.0");
        assert_eq!(decimal.format(-1000.0).unwrap(), "-1,000.0");
        assert_eq!(
            decimal.with_locale(NumberLocale::DE).format(1234.5).unwrap(),
            "1.234,5"
        );
        assert_eq!(
            NumberFormat::new(2)
                .with_locale(NumberLocale::FR)
                .format(1234.5)
                .unwrap(),
            "1234,50"
        );
    }

    #[test]
    fn percent() {
        let percent = NumberFormat::new(1).with_style(NumberStyle::Percent);
        assert_eq!(percent.format(0.25).unwrap(), "25.0%");
        assert_eq!(percent.format(12.5).unwrap(), "1,250.0%");
    }

    #[test]
    fn non_finite_is_geometry_error() {
        let err = NumberFormat::new(2).format(f64::NAN).unwrap_err();
        assert_eq!(
            err,
            LabelError::InvalidGeometry(GeometryIssue::NonFiniteValue)
        );
        assert!(NumberFormat::new(0).format(f64::NEG_INFINITY).is_err());
    }
}
