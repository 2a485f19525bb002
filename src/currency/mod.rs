//! Currency and date presentation for computed amounts.
//!
//! The ledger engine only emits decimals and calendar dates; everything here
//! turns them into display text.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Separators used when printing numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    /// Resolves a handful of common language tags; anything else uses en-US.
    pub fn for_tag(tag: &str) -> Self {
        let (decimal_separator, grouping_separator) = match tag.trim() {
            "de-DE" | "es-ES" | "it-IT" | "nl-NL" | "pt-BR" => (',', '.'),
            "fr-FR" => (',', ' '),
            "de-CH" => ('.', '\''),
            _ => ('.', ','),
        };
        Self {
            language_tag: tag.trim().to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => format!("{code} "),
    }
}

pub fn minor_units_for(code: &str) -> u32 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: Decimal, precision: u32) -> String {
    let rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.*}", precision as usize, rounded);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };
    let mut out = format!("{}{}", sign, group_digits(digits, locale.grouping_separator));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Formats `amount` as `$1,234.50`, with negatives as `-$1,234.50` or `($1,234.50)`.
pub fn format_currency_value(
    amount: Decimal,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    negative_style: NegativeStyle,
) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format!(
        "{}{}",
        symbol_for(code.as_str()),
        format_number(locale, amount.abs(), precision)
    );
    if amount.is_sign_negative() && !amount.is_zero() {
        match negative_style {
            NegativeStyle::Sign => format!("-{}", body),
            NegativeStyle::Parentheses => format!("({})", body),
        }
    } else {
        body
    }
}

/// Formats a balance delta with an explicit sign: `+$500.00`, `-$20.00`.
pub fn format_signed_change(amount: Decimal, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let formatted = format_currency_value(amount, code, locale, NegativeStyle::Sign);
    if amount > Decimal::ZERO {
        format!("+{}", formatted)
    } else {
        formatted
    }
}

/// Short month-day label such as `Mar 5`.
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{} {}", month_label(date.month()), date.day())
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usd(amount: Decimal) -> String {
        format_currency_value(
            amount,
            &CurrencyCode::default(),
            &LocaleConfig::default(),
            NegativeStyle::Sign,
        )
    }

    #[test]
    fn formats_usd_like_en_us() {
        assert_eq!(usd(dec!(1234.5)), "$1,234.50");
        assert_eq!(usd(dec!(-1000)), "-$1,000.00");
        assert_eq!(usd(dec!(0)), "$0.00");
        assert_eq!(usd(dec!(999999.995)), "$1,000,000.00");
        assert_eq!(usd(dec!(12)), "$12.00");
    }

    #[test]
    fn formats_currency_with_locale() {
        let locale = LocaleConfig::for_tag("fr-FR");
        let formatted = format_currency_value(
            dec!(-1234.5),
            &CurrencyCode::new("eur"),
            &locale,
            NegativeStyle::Parentheses,
        );
        assert_eq!(formatted, "(€1 234,50)");
    }

    #[test]
    fn zero_precision_currencies_drop_decimals() {
        let formatted = format_currency_value(
            dec!(15300.4),
            &CurrencyCode::new("JPY"),
            &LocaleConfig::default(),
            NegativeStyle::Sign,
        );
        assert_eq!(formatted, "¥15,300");
    }

    #[test]
    fn signed_changes_and_short_dates() {
        let code = CurrencyCode::default();
        let locale = LocaleConfig::default();
        assert_eq!(format_signed_change(dec!(500), &code, &locale), "+$500.00");
        assert_eq!(format_signed_change(dec!(-20), &code, &locale), "-$20.00");
        assert_eq!(format_signed_change(dec!(0), &code, &locale), "$0.00");
        assert_eq!(
            format_short_date(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()),
            "Mar 5"
        );
    }
}
