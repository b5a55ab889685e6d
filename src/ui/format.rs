//! Date rendering with the configured display format.

use chrono::NaiveDate;

/// Formats dates for every view.
///
/// The pattern comes from `display.date_format` and is validated at
/// config load, so formatting here cannot fail.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    format: String,
}

impl DateFormatter {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Render a date; a missing date renders as nothing at all.
    pub fn format(&self, date: Option<NaiveDate>) -> String {
        match date {
            Some(date) => date.format(&self.format).to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_configured_pattern() {
        let formatter = DateFormatter::new("%d/%m/%Y");
        assert_eq!(
            formatter.format(NaiveDate::from_ymd_opt(1965, 8, 1)),
            "01/08/1965"
        );
    }

    #[test]
    fn iso_pattern_matches_wire_form() {
        let formatter = DateFormatter::new("%Y-%m-%d");
        assert_eq!(
            formatter.format(NaiveDate::from_ymd_opt(1920, 10, 8)),
            "1920-10-08"
        );
    }

    #[test]
    fn missing_date_renders_nothing() {
        let formatter = DateFormatter::new("%Y-%m-%d");
        assert_eq!(formatter.format(None), "");
    }
}
