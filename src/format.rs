//! Currency formatting for table output
//!
//! The formatter is an explicit value passed to whatever renders the table,
//! never process-wide state, so tests can substitute a deterministic
//! configuration.

use serde::{Deserialize, Serialize};

/// Locale for digit grouping and separators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    /// en-US: comma grouping, dot decimal point
    EnUs,
}

/// Formatting style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    /// Currency symbol prefix plus two fraction digits
    Currency,
    /// Plain grouped number with two fraction digits
    Decimal,
}

/// Display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Usd,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
        }
    }
}

/// Formatter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    pub locale: Locale,
    pub style: Style,
    pub currency: Currency,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            locale: Locale::EnUs,
            style: Style::Currency,
            currency: Currency::Usd,
        }
    }
}

/// Locale-aware currency formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormatter {
    options: FormatOptions,
}

impl CurrencyFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Format an amount, e.g. `12345.678` -> `"$12,345.68"`.
    ///
    /// Rounds to two fraction digits; the sign precedes the symbol.
    pub fn format(&self, amount: f64) -> String {
        let negative = amount < 0.0;
        let fixed = format!("{:.2}", amount.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let grouped = group_thousands(int_part);

        let symbol = match self.options.style {
            Style::Currency => self.options.currency.symbol(),
            Style::Decimal => "",
        };
        let sign = if negative { "-" } else { "" };

        format!("{sign}{symbol}{grouped}.{frac_part}")
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}

/// Insert comma separators into a plain digit string
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
