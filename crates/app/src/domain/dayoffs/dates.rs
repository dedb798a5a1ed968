//! `DD/MM/YYYY` day parsing and formatting.

use std::str::FromStr;

use jiff::civil::Date;
use thiserror::Error;

/// Input did not match `DD/MM/YYYY` or named an impossible day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date format: {input}, expected DD/MM/YYYY")]
pub struct InvalidDayFormat {
    pub input: String,
}

/// Parse a strict `DD/MM/YYYY` day.
///
/// # Errors
///
/// Returns [`InvalidDayFormat`] for any other shape, non-digit components, or a day that does
/// not exist in the calendar.
pub fn parse_day(input: &str) -> Result<Date, InvalidDayFormat> {
    let invalid = || InvalidDayFormat {
        input: input.to_owned(),
    };

    let mut parts = input.split('/');

    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let day: i8 = fixed_width_number(day, 2).ok_or_else(invalid)?;
    let month: i8 = fixed_width_number(month, 2).ok_or_else(invalid)?;
    let year: i16 = fixed_width_number(year, 4).ok_or_else(invalid)?;

    if year < 1 {
        return Err(invalid());
    }

    Date::new(year, month, day).map_err(|_ignored| invalid())
}

/// Format a day as `DD/MM/YYYY`.
#[must_use]
pub fn format_day(day: Date) -> String {
    format!("{:02}/{:02}/{:04}", day.day(), day.month(), day.year())
}

fn fixed_width_number<T: FromStr>(part: &str, width: usize) -> Option<T> {
    if part.len() != width || !part.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    part.parse().ok()
}
