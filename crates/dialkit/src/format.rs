use crate::time::TimeSnapshot;
use chrono::Locale;
use chrono::format::{Item, StrftimeItems};
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use thiserror::Error;

/// POSIX-style locale name, e.g. `ru_RU` or `en_US`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct LocaleTag(String);

crate::impl_string_newtype!(LocaleTag, default = "ru_RU");

/// strftime pattern understood by chrono.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct FormatPattern(String);

crate::impl_string_newtype!(FormatPattern);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub locale: LocaleTag,
    pub time: FormatPattern,
    pub date: FormatPattern,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            locale: LocaleTag::default(),
            time: FormatPattern::new("%H:%M:%S"),
            date: FormatPattern::new("%A, %-d %B %Y г."),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(LocaleTag),
    #[error("Invalid format pattern: {0}")]
    InvalidPattern(FormatPattern),
}

/// Turns a snapshot into the digital time and date strings.
pub trait LocaleFormatter {
    fn time_of_day(&self, snapshot: &TimeSnapshot) -> String;
    fn long_date(&self, snapshot: &TimeSnapshot) -> String;
}

#[derive(Debug, Clone)]
pub struct ChronoFormatter {
    locale: Locale,
    time: FormatPattern,
    date: FormatPattern,
}

impl ChronoFormatter {
    pub fn new(options: &FormatOptions) -> Result<Self, FormatError> {
        let locale = Locale::try_from(options.locale.as_str())
            .map_err(|_| FormatError::UnknownLocale(options.locale.clone()))?;

        for pattern in [&options.time, &options.date] {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(FormatError::InvalidPattern(pattern.clone()));
            }
        }

        Ok(Self {
            locale,
            time: options.time.clone(),
            date: options.date.clone(),
        })
    }

    fn format(&self, snapshot: &TimeSnapshot, pattern: &FormatPattern) -> String {
        let mut out = String::new();
        if let Err(e) = write!(
            out,
            "{}",
            snapshot
                .timestamp
                .format_localized(pattern.as_str(), self.locale)
        ) {
            log::warn!("Failed to format '{}': {}", pattern, e);
        }
        out
    }
}

impl Default for ChronoFormatter {
    fn default() -> Self {
        Self {
            locale: Locale::ru_RU,
            time: FormatOptions::default().time,
            date: FormatOptions::default().date,
        }
    }
}

impl LocaleFormatter for ChronoFormatter {
    fn time_of_day(&self, snapshot: &TimeSnapshot) -> String {
        self.format(snapshot, &self.time)
    }

    fn long_date(&self, snapshot: &TimeSnapshot) -> String {
        self.format(snapshot, &self.date)
    }
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
