//! Message catalogs and locale handling.
//!
//! Catalogs are flat `message-id -> text` JSON objects embedded at build
//! time. Lookups fall back to English and then to the message id itself, so
//! a translation is never empty.

use std::collections::HashMap;

use log::{error, warn};
use once_cell::sync::Lazy;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Es,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Es, Locale::Ar];

    /// Accepts bare language codes as well as region-tagged ones (`es-MX`, `en_GB`).
    pub fn from_code(code: &str) -> Option<Locale> {
        let language = code
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Ar => "ar",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
            Locale::Ar => "العربية",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Ar)
    }

    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }
}

type Catalog = HashMap<String, String>;

fn parse_catalog(locale: Locale, raw: &str) -> Catalog {
    match serde_json::from_str::<Catalog>(raw) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to parse {} message catalog: {}", locale.code(), e);
            Catalog::new()
        }
    }
}

static EN: Lazy<Catalog> = Lazy::new(|| parse_catalog(Locale::En, include_str!("../locales/en.json")));
static ES: Lazy<Catalog> = Lazy::new(|| parse_catalog(Locale::Es, include_str!("../locales/es.json")));
static AR: Lazy<Catalog> = Lazy::new(|| parse_catalog(Locale::Ar, include_str!("../locales/ar.json")));

fn catalog(locale: Locale) -> &'static Catalog {
    match locale {
        Locale::En => &EN,
        Locale::Es => &ES,
        Locale::Ar => &AR,
    }
}

/// Maps a message id to localized text.
pub trait Translate {
    fn translate(&self, id: &str) -> String;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl Translate for Translator {
    fn translate(&self, id: &str) -> String {
        let lookup = |locale: Locale| {
            catalog(locale)
                .get(id)
                .filter(|text| !text.is_empty())
                .cloned()
        };

        if let Some(text) = lookup(self.locale) {
            return text;
        }
        if self.locale != Locale::En {
            if let Some(text) = lookup(Locale::En) {
                return text;
            }
        }

        warn!("Missing translation for '{}' ({})", id, self.locale.code());
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_code() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("ES"), Some(Locale::Es));
        assert_eq!(Locale::from_code("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::from_code("ar_EG"), Some(Locale::Ar));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_code_round_trips_for_every_locale() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn test_text_direction() {
        assert_eq!(Locale::Ar.dir(), "rtl");
        assert_eq!(Locale::En.dir(), "ltr");
        assert_eq!(Locale::Es.dir(), "ltr");
    }

    #[test]
    fn test_all_catalogs_parse() {
        for locale in Locale::ALL {
            assert!(!catalog(locale).is_empty(), "{} catalog is empty", locale.code());
        }
    }

    #[test]
    fn test_spanish_catalog_is_complete() {
        let missing: Vec<&String> = EN.keys().filter(|id| !ES.contains_key(*id)).collect();
        assert!(missing.is_empty(), "missing es translations: {:?}", missing);
    }

    #[test]
    fn test_translate_uses_locale_catalog() {
        assert_eq!(Translator::new(Locale::En).translate("page-index-title"), "Welcome to Ethereum");
        assert_eq!(Translator::new(Locale::Es).translate("page-index-title"), "Bienvenido a Ethereum");
    }

    #[test]
    fn test_translate_falls_back_to_english() {
        // Only partially translated
        let ar = Translator::new(Locale::Ar);
        assert!(!AR.contains_key("page-index-defi-description"));
        assert_eq!(
            ar.translate("page-index-defi-description"),
            Translator::new(Locale::En).translate("page-index-defi-description")
        );
    }

    #[test]
    fn test_translate_unknown_id_returns_id() {
        let t = Translator::new(Locale::Es);
        assert_eq!(t.translate("no-such-message"), "no-such-message");
    }
}
