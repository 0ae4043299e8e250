//! Locale-aware conversion from raw strings to typed property values.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::locale::Locale;

/// A raw string value could not be parsed as the destination type.
///
/// The engine wraps this with the property name and the offending raw value
/// before surfacing it to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value does not parse as {target}")]
pub struct ConvertError {
    /// Name of the destination type the value failed to parse as.
    pub target: &'static str,
}

impl ConvertError {
    fn new(target: &'static str) -> Self {
        Self { target }
    }
}

/// Conversion from a raw string value under a [`Locale`].
///
/// Implemented for the primitive destination types a property slot can be
/// registered with. Implementations receive the raw value after trimming and
/// value-mapping resolution; empty strings never reach them.
pub trait FromRaw: Sized {
    fn from_raw(raw: &str, locale: &Locale) -> Result<Self, ConvertError>;
}

impl FromRaw for String {
    fn from_raw(raw: &str, _locale: &Locale) -> Result<Self, ConvertError> {
        Ok(raw.to_string())
    }
}

impl FromRaw for bool {
    fn from_raw(raw: &str, _locale: &Locale) -> Result<Self, ConvertError> {
        if raw.eq_ignore_ascii_case("true") || raw == "1" {
            Ok(true)
        } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
            Ok(false)
        } else {
            Err(ConvertError::new("bool"))
        }
    }
}

fn strip_grouping(raw: &str, locale: &Locale) -> String {
    match locale.grouping_separator {
        Some(separator) => raw.chars().filter(|&ch| ch != separator).collect(),
        None => raw.to_string(),
    }
}

macro_rules! integer_from_raw {
    ($($ty:ty),+) => {$(
        impl FromRaw for $ty {
            fn from_raw(raw: &str, locale: &Locale) -> Result<Self, ConvertError> {
                strip_grouping(raw, locale)
                    .parse::<$ty>()
                    .map_err(|_| ConvertError::new(stringify!($ty)))
            }
        }
    )+};
}

integer_from_raw!(i32, i64, u32, u64);

macro_rules! float_from_raw {
    ($($ty:ty),+) => {$(
        impl FromRaw for $ty {
            fn from_raw(raw: &str, locale: &Locale) -> Result<Self, ConvertError> {
                strip_grouping(raw, locale)
                    .replace(locale.decimal_separator, ".")
                    .parse::<$ty>()
                    .map_err(|_| ConvertError::new(stringify!($ty)))
            }
        }
    )+};
}

float_from_raw!(f32, f64);

impl FromRaw for NaiveDate {
    fn from_raw(raw: &str, locale: &Locale) -> Result<Self, ConvertError> {
        for format in &locale.date_formats {
            if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
                return Ok(date);
            }
        }
        Err(ConvertError::new("date"))
    }
}

impl FromRaw for NaiveDateTime {
    fn from_raw(raw: &str, locale: &Locale) -> Result<Self, ConvertError> {
        for format in &locale.datetime_formats {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(datetime);
            }
        }
        Err(ConvertError::new("datetime"))
    }
}

impl<V: FromRaw> FromRaw for Option<V> {
    fn from_raw(raw: &str, locale: &Locale) -> Result<Self, ConvertError> {
        V::from_raw(raw, locale).map(Some)
    }
}
