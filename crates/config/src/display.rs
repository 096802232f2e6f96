//! Display preferences: theme, date format and currency.
//!
//! These preferences decide how every view renders dates and revenue. The
//! stored values use the same spellings the operator sees (`"MM/DD/YYYY"`,
//! `"USD"`), so a hand-edited config file reads naturally:
//!
//! ```json5
//! {
//!   display: { theme: "dark", date_format: "YYYY-MM-DD", currency: "EUR" },
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Color theme of the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    Light,
    /// Light text on a dark background.
    Dark,
    /// Follow the terminal's own colors.
    #[default]
    System,
}

impl Theme {
    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Returns the next theme, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }
}

/// How calendar dates are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateFormat {
    /// `01/15/2024`
    #[default]
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    /// `15/01/2024`
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    /// `2024-01-15`
    #[serde(rename = "YYYY-MM-DD")]
    Iso,
}

impl DateFormat {
    /// Returns the pattern as shown to the operator.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MonthDayYear => "MM/DD/YYYY",
            Self::DayMonthYear => "DD/MM/YYYY",
            Self::Iso => "YYYY-MM-DD",
        }
    }

    /// Returns the next format, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::MonthDayYear => Self::DayMonthYear,
            Self::DayMonthYear => Self::Iso,
            Self::Iso => Self::MonthDayYear,
        }
    }

    const fn pattern(self) -> &'static str {
        match self {
            Self::MonthDayYear => "%m/%d/%Y",
            Self::DayMonthYear => "%d/%m/%Y",
            Self::Iso => "%Y-%m-%d",
        }
    }

    /// Formats a date.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use sitekeeper_config::DateFormat;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    /// assert_eq!(DateFormat::MonthDayYear.format(date), "01/15/2024");
    /// assert_eq!(DateFormat::DayMonthYear.format(date), "15/01/2024");
    /// assert_eq!(DateFormat::Iso.format(date), "2024-01-15");
    /// ```
    #[must_use]
    pub fn format(self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

/// Currency revenue is shown in.
///
/// Amounts are never converted; only the symbol changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar.
    #[default]
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
}

impl Currency {
    /// Returns the ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
        }
    }

    /// Returns the currency symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
        }
    }

    /// Returns the label used in the settings panel, e.g. `"USD ($)"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{} ({})", self.code(), self.symbol())
    }

    /// Returns the next currency, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Usd => Self::Eur,
            Self::Eur => Self::Gbp,
            Self::Gbp => Self::Usd,
        }
    }

    /// Formats an amount with the symbol and thousands separators.
    ///
    /// Whole amounts print without decimals; anything else prints cents.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitekeeper_config::Currency;
    ///
    /// assert_eq!(Currency::Usd.format(5000.0), "$5,000");
    /// assert_eq!(Currency::Gbp.format(1234567.5), "£1,234,567.50");
    /// assert_eq!(Currency::Eur.format(999.0), "€999");
    /// ```
    #[must_use]
    pub fn format(self, amount: f64) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        let cents = (amount.abs() * 100.0).round() as u64;
        let whole = group_thousands(cents / 100);
        match cents % 100 {
            0 => format!("{sign}{}{whole}", self.symbol()),
            fraction => format!("{sign}{}{whole}.{fraction:02}", self.symbol()),
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Display preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// UI color theme.
    pub theme: Theme,
    /// How dates are written.
    pub date_format: DateFormat,
    /// Currency symbol for revenue.
    pub currency: Currency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run() {
        let display = DisplaySettings::default();
        assert_eq!(display.theme, Theme::System);
        assert_eq!(display.date_format, DateFormat::MonthDayYear);
        assert_eq!(display.currency, Currency::Usd);
    }

    #[test]
    fn cycling_visits_every_choice() {
        assert_eq!(Theme::Light.next().next().next(), Theme::Light);
        assert_eq!(DateFormat::Iso.next(), DateFormat::MonthDayYear);
        assert_eq!(Currency::Gbp.next(), Currency::Usd);
    }

    #[test]
    fn serde_uses_visible_spellings() {
        let display = DisplaySettings {
            theme: Theme::Dark,
            date_format: DateFormat::DayMonthYear,
            currency: Currency::Gbp,
        };
        let json = serde_json::to_string(&display).unwrap();
        assert_eq!(
            json,
            r#"{"theme":"dark","date_format":"DD/MM/YYYY","currency":"GBP"}"#
        );
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(Currency::Usd.format(0.0), "$0");
        assert_eq!(Currency::Usd.format(12.5), "$12.50");
        assert_eq!(Currency::Usd.format(100_000.0), "$100,000");
        assert_eq!(Currency::Eur.format(12_500.0), "€12,500");
        assert_eq!(Currency::Usd.format(-42.0), "-$42");
    }

    #[test]
    fn currency_labels() {
        assert_eq!(Currency::Usd.label(), "USD ($)");
        assert_eq!(Currency::Eur.label(), "EUR (€)");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
