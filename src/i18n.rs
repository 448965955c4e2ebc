//! Site copy in English and Finnish.
//!
//! The active [`Locale`] is owned by the app shell and passed down to every
//! section. The visitor's choice is remembered in local storage; on first
//! visit the browser language decides, falling back to English.

use serde::{Deserialize, Serialize};
use web_sys::{window, Storage};

use crate::config;
use crate::error::{AppError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fi,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fi => "fi",
        }
    }

    /// Label shown on the language switch.
    pub fn short_label(self) -> &'static str {
        match self {
            Locale::En => "ENG",
            Locale::Fi => "FIN",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Fi,
            Locale::Fi => Locale::En,
        }
    }

    /// Parses a BCP 47 style tag ("fi", "fi-FI", "en_US") by its primary
    /// language subtag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.trim().to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "fi" => Some(Locale::Fi),
            _ => None,
        }
    }
}

/// Looks up a copy string. Unknown keys come back verbatim so a missing
/// translation is visible on the page instead of blank.
pub fn translate(locale: Locale, key: &'static str) -> &'static str {
    match (locale, key) {
        (Locale::En, "menuItems.about") => "About",
        (Locale::Fi, "menuItems.about") => "Meistä",
        (Locale::En, "menuItems.prices") => "Prices",
        (Locale::Fi, "menuItems.prices") => "Hinnasto",
        (Locale::En, "menuItems.portfolio") => "Portfolio",
        (Locale::Fi, "menuItems.portfolio") => "Portfolio",
        (Locale::En, "menuItems.contact") => "Contact",
        (Locale::Fi, "menuItems.contact") => "Ota yhteyttä",

        (Locale::En, "intro.title") => "Social media that works",
        (Locale::Fi, "intro.title") => "Somea, joka toimii",
        (Locale::En, "intro.subtitle") => "Content, campaigns and video for growing brands",
        (Locale::Fi, "intro.subtitle") => "Sisältöä, kampanjoita ja videoita kasvaville brändeille",
        (Locale::En, "intro.noVideo") => "Your browser does not support the video tag.",
        (Locale::Fi, "intro.noVideo") => "Selaimesi ei tue videoita.",

        (Locale::En, "about.text") => {
            "We are a small studio planning, shooting and publishing social media content."
        }
        (Locale::Fi, "about.text") => {
            "Olemme pieni studio, joka suunnittelee, kuvaa ja julkaisee somesisältöä."
        }
        (Locale::En, "prices.text") => "Monthly packages and one-off productions. Ask for a quote.",
        (Locale::Fi, "prices.text") => "Kuukausipaketit ja yksittäiset tuotannot. Pyydä tarjous.",
        (Locale::En, "portfolio.text") => "A selection of campaigns we have produced.",
        (Locale::Fi, "portfolio.text") => "Valikoima toteuttamiamme kampanjoita.",
        (Locale::En, "contact.text") => "Tell us about your project and we will get back to you.",
        (Locale::Fi, "contact.text") => "Kerro projektistasi, niin palaamme asiaan.",

        (Locale::En, "contact.name") => "Name",
        (Locale::Fi, "contact.name") => "Nimi",
        (Locale::En, "contact.email") => "Email",
        (Locale::Fi, "contact.email") => "Sähköposti",
        (Locale::En, "contact.message") => "Message",
        (Locale::Fi, "contact.message") => "Viesti",
        (Locale::En, "contact.send") => "Send",
        (Locale::Fi, "contact.send") => "Lähetä",

        (_, other) => other,
    }
}

/// Picks the starting language: stored choice, then browser language, then English.
pub fn resolve_locale(stored: Option<Locale>, browser_tag: Option<&str>) -> Locale {
    stored
        .or_else(|| browser_tag.and_then(Locale::from_tag))
        .unwrap_or_default()
}

pub fn initial_locale() -> Locale {
    let stored = match load_stored_locale() {
        Ok(stored) => stored,
        Err(err) => {
            log::warn!("Ignoring stored language: {}", err);
            None
        }
    };
    let browser_tag = window().and_then(|w| w.navigator().language());
    let locale = resolve_locale(stored, browser_tag.as_deref());
    log::debug!("Initial language: {}", locale.code());
    locale
}

fn storage() -> Result<Storage> {
    let window = window().ok_or(AppError::NoWindow)?;
    window
        .local_storage()
        .map_err(AppError::dom)?
        .ok_or(AppError::NoStorage)
}

pub fn load_stored_locale() -> Result<Option<Locale>> {
    let raw = storage()?
        .get_item(config::LANGUAGE_STORAGE_KEY)
        .map_err(AppError::dom)?;
    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn store_locale(locale: Locale) -> Result<()> {
    let raw = serde_json::to_string(&locale)?;
    storage()?
        .set_item(config::LANGUAGE_STORAGE_KEY, &raw)
        .map_err(AppError::dom)
}

/// Keeps `<html lang>` in step with the active language.
pub fn apply_document_language(locale: Locale) -> Result<()> {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or(AppError::NoWindow)?;
    root.set_attribute("lang", locale.code()).map_err(AppError::dom)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 7] = [
        "menuItems.about",
        "menuItems.prices",
        "menuItems.portfolio",
        "menuItems.contact",
        "intro.title",
        "intro.subtitle",
        "intro.noVideo",
    ];

    #[test]
    fn toggling_twice_returns_to_start() {
        for locale in [Locale::En, Locale::Fi] {
            assert_ne!(locale.toggled(), locale);
            assert_eq!(locale.toggled().toggled(), locale);
        }
        assert_eq!(Locale::En.toggled(), Locale::Fi);
        assert_eq!(Locale::Fi.toggled(), Locale::En);
    }

    #[test]
    fn parses_browser_tags() {
        assert_eq!(Locale::from_tag("fi"), Some(Locale::Fi));
        assert_eq!(Locale::from_tag("fi-FI"), Some(Locale::Fi));
        assert_eq!(Locale::from_tag("EN_us"), Some(Locale::En));
        assert_eq!(Locale::from_tag("sv-FI"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn every_key_is_translated_in_both_languages() {
        for key in KEYS {
            for locale in [Locale::En, Locale::Fi] {
                let text = translate(locale, key);
                assert_ne!(text, key, "{} missing for {:?}", key, locale);
                assert!(!text.is_empty());
            }
        }
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(translate(Locale::Fi, "menuItems.blog"), "menuItems.blog");
    }

    #[test]
    fn stored_choice_wins_over_browser() {
        assert_eq!(resolve_locale(Some(Locale::En), Some("fi-FI")), Locale::En);
        assert_eq!(resolve_locale(None, Some("fi-FI")), Locale::Fi);
        assert_eq!(resolve_locale(None, Some("de-DE")), Locale::En);
        assert_eq!(resolve_locale(None, None), Locale::En);
    }

    #[test]
    fn stored_value_is_the_language_code() {
        assert_eq!(serde_json::to_string(&Locale::Fi).unwrap(), "\"fi\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
        assert!(serde_json::from_str::<Locale>("\"sv\"").is_err());
    }
}
