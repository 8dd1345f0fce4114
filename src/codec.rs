//! Fixed-width string codec
//!
//! An encoded identifier is the caller's prefix followed by a 22 digit suffix:
//!
//! ```text
//! yy MM dd HH mm ss SSS NNNN EEE
//! ```
//!
//! two-digit year, month, day, hour, minute and second, three-digit
//! millisecond, four-digit node and three-digit exponent. Calendar fields are
//! rendered in the local time zone.

use std::ops::RangeInclusive;

use chrono::{Datelike, Local, NaiveDate, TimeZone, Timelike};

use crate::error::ParseError;
use crate::id::Id;

/// Length of the numeric suffix following the prefix
pub const SUFFIX_LEN: usize = 22;

const YEAR_BASE: i32 = 2000;

/// Render a prefix and the structured fields into the canonical string
///
/// `generated_at` is rendered by its own calendar fields: pass a
/// `DateTime<Local>` or a local `NaiveDateTime`.
pub fn encode<T>(prefix: &str, generated_at: &T, node: u16, exponent: u16) -> String
where
    T: Datelike + Timelike,
{
    // Leap seconds report 1000..=1999 sub-second milliseconds
    let millis = (generated_at.nanosecond() / 1_000_000).min(999);
    format!(
        "{prefix}{:02}{:02}{:02}{:02}{:02}{:02}{:03}{:04}{:03}",
        generated_at.year().rem_euclid(100),
        generated_at.month(),
        generated_at.day(),
        generated_at.hour(),
        generated_at.minute(),
        generated_at.second(),
        millis,
        node,
        exponent,
    )
}

/// Decode an identifier string into its fields
pub fn decode(s: &str) -> Result<Id, ParseError> {
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let bytes = s.as_bytes();
    if bytes.len() < SUFFIX_LEN {
        return Err(ParseError::TooShort {
            len: bytes.len(),
            min: SUFFIX_LEN,
        });
    }

    let start = bytes.len() - SUFFIX_LEN;
    let suffix = &bytes[start..];
    if let Some(pos) = suffix.iter().position(|b| !b.is_ascii_digit()) {
        return Err(ParseError::NonDigit {
            position: start + pos,
        });
    }

    let field = |from: usize, len: usize| -> u32 {
        suffix[from..from + len]
            .iter()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    };

    let year = YEAR_BASE + field(0, 2) as i32;
    let month = in_range("month", field(2, 2), 1..=12)?;
    let day = in_range("day", field(4, 2), 1..=31)?;
    let hour = in_range("hour", field(6, 2), 0..=23)?;
    let minute = in_range("minute", field(8, 2), 0..=59)?;
    let second = in_range("second", field(10, 2), 0..=59)?;
    let millis = field(12, 3);
    let node = field(15, 4) as u16;
    let exponent = field(19, 3) as u16;

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_milli_opt(hour, minute, second, millis))
        .ok_or(ParseError::InvalidDate { year, month, day })?;

    let generated_at = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or(ParseError::NonexistentLocalTime)?;

    // `start` sits on an ASCII digit, so it is a char boundary
    Ok(Id::from_parts(
        s.to_owned(),
        start,
        generated_at,
        node,
        exponent,
    ))
}

/// Decode, discarding the failure reason
#[inline]
pub fn parse(s: &str) -> Option<Id> {
    decode(s).ok()
}

#[inline]
fn in_range(field: &'static str, value: u32, range: RangeInclusive<u32>) -> Result<u32, ParseError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ParseError::FieldOutOfRange { field, value })
    }
}
