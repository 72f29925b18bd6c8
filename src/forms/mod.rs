//! Client-side form validation.
//!
//! Every form holds raw text as typed. `validate` checks all fields at once
//! and yields either the typed request body or one message per invalid field.

mod auth;
mod book;
mod review;

pub use auth::{LoginForm, SignupForm};
pub use book::BookForm;
pub use review::ReviewForm;

use bookclub_kernel::FieldErrors;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

/// Current calendar year (UTC), the upper bound for `year_published`.
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

/// Bounds and messages for a whole-number field.
pub(crate) struct WholeNumber {
    pub label: &'static str,
    pub min: i64,
    pub max: i64,
    pub min_message: &'static str,
    pub max_message: &'static str,
}

/// Non-empty after trimming; records `message` otherwise.
pub(crate) fn required(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    message: &'static str,
) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, message);
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub(crate) fn email(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<String> {
    let value = required(errors, field, value, "Email is required")?;
    if EMAIL_REGEX.is_match(&value) {
        Some(value)
    } else {
        errors.add(field, "Invalid email");
        None
    }
}

pub(crate) fn whole_number(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    rule: &WholeNumber,
) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.add(field, format!("{} is required", rule.label));
        return None;
    }

    let number = match raw.parse::<f64>() {
        Ok(number) if number.is_finite() => number,
        _ => {
            errors.add(field, format!("{} must be a number", rule.label));
            return None;
        }
    };

    if number.fract() != 0.0 {
        errors.add(field, format!("{} must be a whole number", rule.label));
        return None;
    }

    if number < rule.min as f64 {
        errors.add(field, rule.min_message);
        return None;
    }
    if number > rule.max as f64 {
        errors.add(field, rule.max_message);
        return None;
    }

    Some(number as i64)
}
