//! Interface language selection and translated messages.
//!
//! There is no global translation table: callers resolve a [`Language`] once
//! and pass it to whatever formats user-facing text.

mod catalog;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub use catalog::Message;

/// Environment variables consulted for the system language, in order.
const LANGUAGE_ENV_VARS: [&str; 3] = ["LANG", "LANGUAGE", "LC_ALL"];

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
    Es,
    Fr,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Pt, Language::Es, Language::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    /// Translate a message into this language.
    pub fn t(&self, message: Message) -> &'static str {
        message.text(*self)
    }

    /// Language from a locale string such as `pt_BR.UTF-8`.
    ///
    /// Only the first two letters matter; anything unsupported maps to English.
    pub fn from_locale(locale: &str) -> Self {
        let prefix: String = locale.chars().take(2).collect::<String>().to_lowercase();
        prefix.parse().unwrap_or_default()
    }

    /// Detect the system language from `LANG`, `LANGUAGE` or `LC_ALL`.
    pub fn detect() -> Self {
        let locale = LANGUAGE_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .unwrap_or_default();

        Self::from_locale(&locale)
    }

    /// Accepted spellings of "yes" for prompts.
    pub fn yes_answers(&self) -> &'static [&'static str] {
        match self {
            Self::En => &["y", "yes"],
            Self::Pt => &["s", "sim"],
            Self::Es => &["s", "si", "sí"],
            Self::Fr => &["o", "oui"],
        }
    }

    /// Accepted spellings of "no" for prompts.
    pub fn no_answers(&self) -> &'static [&'static str] {
        match self {
            Self::En => &["n", "no"],
            Self::Pt => &["n", "não", "nao"],
            Self::Es => &["n", "no"],
            Self::Fr => &["n", "non"],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "pt" => Ok(Self::Pt),
            "es" => Ok(Self::Es),
            "fr" => Ok(Self::Fr),
            _ => Err(ConfigError::InvalidLanguage(s.to_string())),
        }
    }
}

/// Where the active language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSource {
    Configured,
    Detected,
}

/// Pick the configured language, falling back to system detection.
pub fn resolve_language(configured: Option<Language>) -> (Language, LanguageSource) {
    match configured {
        Some(language) => (language, LanguageSource::Configured),
        None => (Language::detect(), LanguageSource::Detected),
    }
}
