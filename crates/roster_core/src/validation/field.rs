//! Field-level predicates.
//!
//! # Invariants
//! - Every predicate is total over `&str` and never panics.
//! - Only `is_valid_age` reads the system clock; the `_on` variants take
//!   the reference date explicitly.

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_AGE: i32 = 15;
pub const MAX_AGE: i32 = 100;
pub const PHONE_DIGITS: usize = 10;
pub const DOB_FORMAT: &str = "%Y-%m-%d";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Returns whether `value` has a `local@domain.tld` shape.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Returns whether `value` is exactly ten ASCII decimal digits.
///
/// Leading zeros are significant; the value is never treated as a number.
pub fn is_valid_phone(value: &str) -> bool {
    value.len() == PHONE_DIGITS && value.bytes().all(|byte| byte.is_ascii_digit())
}

/// Returns whether `value` is empty once surrounding whitespace is removed.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parses a `YYYY-MM-DD` birth date.
pub fn parse_dob(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DOB_FORMAT).ok()
}

/// Whole years between `dob` and `today`, one less when the birthday has not
/// come around yet this year. Negative for future dates.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let before_birthday = (today.month(), today.day()) < (dob.month(), dob.day());
    today.year() - dob.year() - i32::from(before_birthday)
}

/// Returns whether someone born on `dob` is within the accepted age range on `today`.
pub fn is_valid_age_on(dob: &str, today: NaiveDate) -> bool {
    parse_dob(dob)
        .map(|date| (MIN_AGE..=MAX_AGE).contains(&age_on(date, today)))
        .unwrap_or(false)
}

/// [`is_valid_age_on`] against the local calendar date.
///
/// Results change from one day to the next; tests should prefer the `_on` form.
pub fn is_valid_age(dob: &str) -> bool {
    is_valid_age_on(dob, Local::now().date_naive())
}
