//! Bilingual content support.
//!
//! Content rows carry a base (English) field and a parallel Hindi field,
//! e.g. `title` / `title_hi`. Public readers pass `?locale=hi` to receive the
//! Hindi text in the base field, falling back to English wherever no
//! translation has been entered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// A supported content locale.
///
/// Deserializes through [`FromStr`], so `?locale=HI` and a JSON `"hi"` are
/// accepted alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
}

/// All locales, in display order.
pub const LOCALES: &[Locale] = &[Locale::En, Locale::Hi];

impl Locale {
    /// The database / query-string code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "hi" => Ok(Self::Hi),
            other => Err(CoreError::Validation(format!(
                "Unsupported locale '{other}'. Must be one of: en, hi"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Rewrites the base fields of a record for the requested locale.
pub trait Localize: Sized {
    fn localize(self, locale: Locale) -> Self;
}

impl<T: Localize> Localize for Vec<T> {
    fn localize(self, locale: Locale) -> Self {
        self.into_iter().map(|item| item.localize(locale)).collect()
    }
}

/// Apply `locale` only when the caller asked for one.
///
/// Admin screens omit the parameter and receive both halves of every pair.
pub fn localize_opt<T: Localize>(value: T, locale: Option<Locale>) -> T {
    match locale {
        Some(locale) => value.localize(locale),
        None => value,
    }
}

/// Pick the text for `locale` from a required base field and its translation.
pub fn pick(locale: Locale, base: String, translated: &Option<String>) -> String {
    match (locale, translated) {
        (Locale::Hi, Some(t)) if !t.trim().is_empty() => t.clone(),
        _ => base,
    }
}

/// Like [`pick`] for fields whose base value is optional.
pub fn pick_opt(
    locale: Locale,
    base: Option<String>,
    translated: &Option<String>,
) -> Option<String> {
    match (locale, translated) {
        (Locale::Hi, Some(t)) if !t.trim().is_empty() => Some(t.clone()),
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use serde::de::value::{Error as ValueError, StrDeserializer};
    use serde::de::IntoDeserializer;

    use super::*;

    fn deserialize(raw: &str) -> Result<Locale, ValueError> {
        let deserializer: StrDeserializer<'_, ValueError> = raw.into_deserializer();
        Locale::deserialize(deserializer)
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("HI".parse::<Locale>().unwrap(), Locale::Hi);
        assert_eq!(" en ".parse::<Locale>().unwrap(), Locale::En);
    }

    #[test]
    fn parse_rejects_unknown_locale() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert!(err.to_string().contains("Unsupported locale 'fr'"));
    }

    #[test]
    fn deserialize_agrees_with_parse() {
        assert_eq!(deserialize("HI").unwrap(), Locale::Hi);
        assert_eq!(deserialize("en").unwrap(), Locale::En);
        let err = deserialize("fr").unwrap_err();
        assert!(err.to_string().contains("Unsupported locale 'fr'"));
    }

    #[test]
    fn hindi_uses_translation_when_present() {
        let hi = Some("नमस्ते".to_string());
        assert_eq!(pick(Locale::Hi, "Hello".into(), &hi), "नमस्ते");
    }

    #[test]
    fn hindi_falls_back_to_base_when_blank() {
        assert_eq!(pick(Locale::Hi, "Hello".into(), &None), "Hello");
        assert_eq!(pick(Locale::Hi, "Hello".into(), &Some("  ".into())), "Hello");
    }

    #[test]
    fn english_ignores_translation() {
        let hi = Some("नमस्ते".to_string());
        assert_eq!(pick(Locale::En, "Hello".into(), &hi), "Hello");
        assert_eq!(pick_opt(Locale::En, None, &hi), None);
    }

    #[test]
    fn display_matches_query_code() {
        for locale in LOCALES {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), *locale);
        }
    }
}
