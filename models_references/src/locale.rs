use serde::{Deserialize, Serialize};
use std::fmt::Display;
use utoipa::ToSchema;

/// A language/region tag such as `en` or `pt-BR`, used to localize results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, ToSchema)]
#[serde(transparent)]
pub struct Locale(String);

impl Default for Locale {
    fn default() -> Self {
        Locale("en".to_string())
    }
}

impl Locale {
    /// Parse a single language tag. Returns `None` for empty input or for
    /// anything that is not made of alphanumeric subtags joined by `-` or `_`.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.is_empty() || tag.len() > 35 {
            return None;
        }
        let valid = tag
            .split(['-', '_'])
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));
        valid.then(|| Locale(tag.to_string()))
    }

    /// Pick the first usable tag of an `Accept-Language` header value,
    /// ignoring quality weights and the `*` wildcard.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        header
            .split(',')
            .filter_map(|entry| entry.split(';').next())
            .filter(|tag| tag.trim() != "*")
            .find_map(Locale::parse)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_simple_tags() {
        assert_eq!(Locale::parse("is").unwrap().as_str(), "is");
        assert_eq!(Locale::parse(" pt-BR ").unwrap().as_str(), "pt-BR");
        assert_eq!(Locale::parse("zh_Hant").unwrap().as_str(), "zh_Hant");
    }

    #[test]
    fn it_rejects_garbage() {
        assert!(Locale::parse("").is_none());
        assert!(Locale::parse("en--US").is_none());
        assert!(Locale::parse("en US").is_none());
        assert!(Locale::parse("<script>").is_none());
    }

    #[test]
    fn it_takes_the_first_accept_language_tag() {
        let locale = Locale::from_accept_language("de-CH;q=0.9, en;q=0.8").unwrap();
        assert_eq!(locale.as_str(), "de-CH");

        let locale = Locale::from_accept_language("*, fr;q=0.5").unwrap();
        assert_eq!(locale.as_str(), "fr");

        assert!(Locale::from_accept_language("*").is_none());
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default().as_str(), "en");
    }
}
