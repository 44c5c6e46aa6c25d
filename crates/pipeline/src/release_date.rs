//! Long-form release date formatting.
//!
//! Upstream sends `YYYY-MM-DD`. The date is rebuilt from its components as a
//! plain calendar date, so there is no timezone in play and no way for the
//! day to shift.

use chrono::NaiveDate;

use crate::error::InvalidDateError;

/// Format a `YYYY-MM-DD` date as e.g. `"January 1, 2021"`.
///
/// Month is spelled out in English and the day has no leading zero.
pub fn format_release_date(date_str: &str) -> Result<String, InvalidDateError> {
    let (year, month, day) = split_components(date_str)?;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| InvalidDateError::OutOfRange(date_str.to_string()))?;

    Ok(date.format("%B %-d, %Y").to_string())
}

fn split_components(date_str: &str) -> Result<(i32, u32, u32), InvalidDateError> {
    let malformed = || InvalidDateError::Malformed(date_str.to_string());

    let parts: Vec<&str> = date_str.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(malformed());
    };

    Ok((
        parse_number(year).ok_or_else(malformed)?,
        parse_number(month).ok_or_else(malformed)?,
        parse_number(day).ok_or_else(malformed)?,
    ))
}

fn parse_number<T: std::str::FromStr>(part: &str) -> Option<T> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
