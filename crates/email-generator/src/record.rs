//! Generated email records.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::catalogue::{Culture, Gender};

/// `strftime` layout of [`EmailRecord::timestamp`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One generated address with the choices that produced it.
///
/// Serialises with the keys `email`, `gender`, `culture`, and `timestamp`.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use email_generator::{Culture, EmailRecord, Gender};
///
/// let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).single().expect("valid");
/// let record = EmailRecord::new("aiko.sato@aol.com", Gender::Female, Culture::Japanese, &at);
///
/// assert_eq!(record.timestamp(), "2024-05-01 09:30:00");
/// assert_eq!(
///     record.summary_line(),
///     "aiko.sato@aol.com (Gender: Female, Culture: Japanese)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    email: String,
    gender: Gender,
    culture: Culture,
    timestamp: String,
}

impl EmailRecord {
    /// Creates a record stamped with `at`.
    #[must_use]
    pub fn new<Tz>(
        email: impl Into<String>,
        gender: Gender,
        culture: Culture,
        at: &DateTime<Tz>,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            email: email.into(),
            gender,
            culture,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Returns the generated address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the requested gender.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Returns the requested culture.
    #[must_use]
    pub const fn culture(&self) -> Culture {
        self.culture
    }

    /// Returns the generation time, formatted with [`TIMESTAMP_FORMAT`].
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Line printed right after generation.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{} (Gender: {}, Culture: {})",
            self.email,
            self.gender.label(),
            self.culture.label()
        )
    }

    /// Line printed when listing the history.
    #[must_use]
    pub fn history_line(&self) -> String {
        format!(
            "Time: {}, Email: {}, Gender: {}, Culture: {}",
            self.timestamp,
            self.email,
            self.gender.label(),
            self.culture.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn record() -> EmailRecord {
        let at = Utc
            .with_ymd_and_hms(2025, 1, 2, 3, 4, 5)
            .single()
            .expect("valid fixture timestamp");
        EmailRecord::new("liam.kelly@icloud.com", Gender::Male, Culture::Irish, &at)
    }

    #[test]
    fn serializes_expected_keys() {
        let json = serde_json::to_value(record()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "email": "liam.kelly@icloud.com",
                "gender": "male",
                "culture": "irish",
                "timestamp": "2025-01-02 03:04:05"
            })
        );
    }

    #[test]
    fn history_line_capitalises_choices() {
        assert_eq!(
            record().history_line(),
            "Time: 2025-01-02 03:04:05, Email: liam.kelly@icloud.com, Gender: Male, Culture: Irish"
        );
    }

    #[test]
    fn rejects_unknown_culture_on_load() {
        let json = r#"{"email": "a@b.c", "gender": "male", "culture": "martian", "timestamp": "x"}"#;
        assert!(serde_json::from_str::<EmailRecord>(json).is_err());
    }
}
