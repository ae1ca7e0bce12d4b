//! Locale-aware number and unit formatting for reports.

use clap::ValueEnum;
use serde::Serialize;

/// Number formatting convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// German: `.` groups thousands, `,` separates decimals.
    #[default]
    De,
    /// English: `,` groups thousands, `.` separates decimals.
    En,
}

impl Locale {
    fn separators(self) -> (char, char) {
        match self {
            Locale::De => ('.', ','),
            Locale::En => (',', '.'),
        }
    }

    /// Formats `value` with `decimals` fraction digits and thousands grouping.
    ///
    /// # Examples
    ///
    /// ```
    /// use heating_economics::format::Locale;
    ///
    /// assert_eq!(Locale::De.number(4768.11, 2), "4.768,11");
    /// assert_eq!(Locale::En.number(4768.11, 0), "4,768");
    /// ```
    pub fn number(self, value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let (group_sep, decimal_sep) = self.separators();
        let fixed = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
        let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
        if value.is_sign_negative() && !is_zero {
            out.push('-');
        }
        let digits = int_part.len();
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (digits - i) % 3 == 0 {
                out.push(group_sep);
            }
            out.push(ch);
        }
        if let Some(frac) = frac_part {
            out.push(decimal_sep);
            out.push_str(frac);
        }
        out
    }

    /// Currency amount in euros.
    pub fn euro(self, value: f64, decimals: usize) -> String {
        format!("{} €", self.number(value, decimals))
    }

    /// Energy in kWh.
    pub fn kwh(self, value: f64, decimals: usize) -> String {
        format!("{} kWh", self.number(value, decimals))
    }

    /// Volume in litres.
    pub fn liters(self, value: f64, decimals: usize) -> String {
        format!("{} L", self.number(value, decimals))
    }

    /// Volume in cubic metres.
    pub fn cubic_meters(self, value: f64, decimals: usize) -> String {
        format!("{} m³", self.number(value, decimals))
    }

    /// Duration in hours.
    pub fn hours(self, value: f64, decimals: usize) -> String {
        format!("{} h", self.number(value, decimals))
    }

    /// Fraction rendered as a whole-number percentage, truncated toward zero.
    pub fn percent(self, fraction: f64) -> String {
        format!("{} %", self.number((fraction * 100.0).trunc(), 0))
    }

    /// Mass given in kg rendered in tonnes.
    pub fn tonnes(self, kg: f64, decimals: usize) -> String {
        format!("{} t", self.number(kg / 1000.0, decimals))
    }
}
