//! Supported locales and translation lookup

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A supported game locale. `English` is the default locale and has no code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    English,
    Russian,
    ChineseSimplified,
    German,
    PortugueseBrazil,
    French,
    Spanish,
    Japanese,
    Korean,
    Italian,
    Turkish,
    Hungarian,
}

/// Native display name of every locale
const LANGUAGES: Translatable = Translatable::Localized(&[
    (Locale::English, "English"),
    (Locale::Russian, "Русский"),
    (Locale::ChineseSimplified, "简体中文"),
    (Locale::German, "Deutsch"),
    (Locale::PortugueseBrazil, "Português"),
    (Locale::French, "Français"),
    (Locale::Spanish, "Español"),
    (Locale::Japanese, "日本語"),
    (Locale::Korean, "한국어"),
    (Locale::Italian, "Italiano"),
    (Locale::Turkish, "Türkçe"),
    (Locale::Hungarian, "Magyar"),
]);

impl Locale {
    /// The locale whose tables carry no suffix
    pub const DEFAULT: Locale = Locale::English;

    /// Every supported locale, default first
    pub const ALL: [Locale; 12] = [
        Locale::English,
        Locale::Russian,
        Locale::ChineseSimplified,
        Locale::German,
        Locale::PortugueseBrazil,
        Locale::French,
        Locale::Spanish,
        Locale::Japanese,
        Locale::Korean,
        Locale::Italian,
        Locale::Turkish,
        Locale::Hungarian,
    ];

    /// File suffix code, `None` for the default locale
    pub fn code(self) -> Option<&'static str> {
        match self {
            Locale::English => None,
            Locale::Russian => Some("ru-RU"),
            Locale::ChineseSimplified => Some("zh-CN"),
            Locale::German => Some("de-DE"),
            Locale::PortugueseBrazil => Some("pt-BR"),
            Locale::French => Some("fr-FR"),
            Locale::Spanish => Some("es-ES"),
            Locale::Japanese => Some("ja-JP"),
            Locale::Korean => Some("ko-KR"),
            Locale::Italian => Some("it-IT"),
            Locale::Turkish => Some("tr-TR"),
            Locale::Hungarian => Some("hu-HU"),
        }
    }

    pub fn is_default(self) -> bool {
        self == Locale::DEFAULT
    }

    /// Display name of the language, in that language
    pub fn language(self) -> &'static str {
        LANGUAGES.translate(self).unwrap_or("English")
    }

    /// Look up a locale by its file suffix code
    pub fn from_code(code: &str) -> Option<Locale> {
        Locale::ALL.into_iter().find(|l| l.code() == Some(code))
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "en" | "default" => Ok(Locale::English),
            code => Locale::from_code(code).ok_or_else(|| Error::UnknownLocale(code.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{}", code),
            None => write!(f, "default"),
        }
    }
}

/// A display string that may or may not depend on the locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translatable {
    /// Already resolved; the same in every locale
    Plain(&'static str),
    /// Per-locale strings
    Localized(&'static [(Locale, &'static str)]),
    /// No string at all
    Absent,
}

impl Translatable {
    /// Resolve for `locale`, falling back to the default locale's string
    pub fn translate(&self, locale: Locale) -> Option<&'static str> {
        match self {
            Translatable::Plain(s) => Some(*s),
            Translatable::Localized(entries) => lookup(entries, locale)
                .or_else(|| lookup(entries, Locale::DEFAULT)),
            Translatable::Absent => None,
        }
    }
}

fn lookup(entries: &[(Locale, &'static str)], locale: Locale) -> Option<&'static str> {
    entries
        .iter()
        .find(|(l, _)| *l == locale)
        .map(|(_, s)| *s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POND: Translatable = Translatable::Localized(&[
        (Locale::English, "pond"),
        (Locale::German, "Teich"),
    ]);

    #[test]
    fn test_translate_active_locale() {
        assert_eq!(POND.translate(Locale::German), Some("Teich"));
    }

    #[test]
    fn test_translate_falls_back_to_default() {
        assert_eq!(POND.translate(Locale::Japanese), Some("pond"));
    }

    #[test]
    fn test_translate_missing_default() {
        let only_german = Translatable::Localized(&[(Locale::German, "Teich")]);
        assert_eq!(only_german.translate(Locale::French), None);
    }

    #[test]
    fn test_translate_plain_and_absent() {
        assert_eq!(Translatable::Plain("Pirate Cove").translate(Locale::Korean), Some("Pirate Cove"));
        assert_eq!(Translatable::Absent.translate(Locale::English), None);
    }

    #[test]
    fn test_language_names() {
        assert_eq!(Locale::English.language(), "English");
        assert_eq!(Locale::Russian.language(), "Русский");
        assert_eq!(Locale::Hungarian.language(), "Magyar");
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("ru-RU".parse::<Locale>().unwrap(), Locale::Russian);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert!("xx-XX".parse::<Locale>().is_err());
        assert_eq!(Locale::English.code(), None);
        assert_eq!(Locale::ALL.len(), 12);
    }
}
