//! Culture/format context for raw-string conversion.

/// Formats used when converting raw strings to typed property values.
///
/// The default locale is the invariant culture: `.` as decimal separator,
/// no grouping separator, ISO 8601 date and datetime formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Character separating the integral and fractional parts of a number.
    pub decimal_separator: char,
    /// Thousands separator stripped before numeric parsing, if any.
    pub grouping_separator: Option<char>,
    /// chrono format strings tried in order when parsing dates.
    pub date_formats: Vec<String>,
    /// chrono format strings tried in order when parsing datetimes.
    pub datetime_formats: Vec<String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: None,
            date_formats: vec!["%Y-%m-%d".to_string()],
            datetime_formats: vec![
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%d %H:%M:%S".to_string(),
            ],
        }
    }
}

impl Locale {
    /// Preset for `,`-decimal cultures, e.g. `1.234,5` and `31.12.2024`.
    pub fn decimal_comma() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: Some('.'),
            date_formats: vec!["%d.%m.%Y".to_string()],
            datetime_formats: vec!["%d.%m.%Y %H:%M:%S".to_string()],
        }
    }

    /// Prepends a date format, giving it priority over the existing list.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_formats.insert(0, format.into());
        self
    }

    /// Prepends a datetime format, giving it priority over the existing list.
    pub fn with_datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_formats.insert(0, format.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_invariant() {
        let locale = Locale::default();
        assert_eq!(locale.decimal_separator, '.');
        assert_eq!(locale.grouping_separator, None);
        assert_eq!(locale.date_formats, vec!["%Y-%m-%d".to_string()]);
    }

    #[test]
    fn with_date_format_takes_priority() {
        let locale = Locale::default().with_date_format("%d/%m/%Y");
        assert_eq!(locale.date_formats[0], "%d/%m/%Y");
        assert_eq!(locale.date_formats.len(), 2);
    }
}
