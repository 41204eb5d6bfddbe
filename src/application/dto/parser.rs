// src/application/dto/parser.rs
// Parsers for locale-formatted form values

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::domain::errors::{ValidationError, ValidationResult};

/// Display and input format for calendar dates
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Display format for times of day
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Parse a decimal written with Brazilian conventions.
///
/// Only digits, dots, commas and a leading sign are accepted. When the value
/// contains a comma, the comma is the decimal point and every dot is a
/// thousands separator. Without a comma a single dot is the decimal point, so
/// `"2.000"` reads as two, while several dots are thousands separators.
pub fn parse_locale_decimal(field: &'static str, raw: &str) -> ValidationResult<Decimal> {
    let trimmed = raw.trim();
    let invalid = || ValidationError::InvalidNumber {
        field,
        value: raw.to_string(),
    };

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if !digits.chars().any(|c| c.is_ascii_digit())
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
    {
        return Err(invalid());
    }

    let unsigned = if digits.contains(',') {
        digits.replace('.', "").replace(',', ".")
    } else if digits.matches('.').count() > 1 {
        digits.replace('.', "")
    } else {
        digits.to_string()
    };

    let normalized = if negative { format!("-{}", unsigned) } else { unsigned };
    Decimal::from_str(&normalized).map_err(|_| invalid())
}

/// Parse a quantity, which must not be negative
pub fn parse_quantity(raw: &str) -> ValidationResult<Decimal> {
    let quantity = parse_locale_decimal("quantity", raw)?;
    if quantity < Decimal::ZERO {
        return Err(ValidationError::NegativeQuantity {
            value: raw.to_string(),
        });
    }
    Ok(quantity)
}

pub fn parse_integer(field: &'static str, raw: &str) -> ValidationResult<i64> {
    raw.trim().parse().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Parse a time of day as `HH:MM:SS`, or `HH:MM` with zero seconds
pub fn parse_time(field: &'static str, raw: &str) -> ValidationResult<NaiveTime> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| ValidationError::InvalidTime {
            field,
            value: raw.to_string(),
        })
}

pub fn parse_date(raw: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        value: raw.to_string(),
    })
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: &NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Format a monetary value as `"R$ 1.234,50"`, sign after the symbol
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded < Decimal::ZERO;
    let plain = format!("{:.2}", rounded.abs());
    let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    // Group the integer part in thousands
    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{} {}{},{}", symbol, if negative { "-" } else { "" }, grouped, cents)
}
