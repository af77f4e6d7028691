//! Language/region resolution for upstream requests.

use serde::{Deserialize, Serialize};

/// Languages whose natural region is not the uppercased language code.
const REGION_OVERRIDES: &[(&str, &str)] = &[
    ("cs", "CZ"),
    ("da", "DK"),
    ("el", "GR"),
    ("hi", "IN"),
    ("ja", "JP"),
    ("uk", "UA"),
    ("vi", "VN"),
];

/// A language tag with an optional region, as supplied by configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub language: String,
    pub region: Option<String>,
}

impl Locale {
    pub fn new(language: impl Into<String>, region: Option<impl Into<String>>) -> Self {
        Self {
            language: language.into(),
            region: region.map(Into::into),
        }
    }

    /// Parse a tag like `en`, `en-US` or `pt_BR`.
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        match tag.split_once(['-', '_']) {
            Some((language, region)) if !region.is_empty() => Self {
                language: language.to_string(),
                region: Some(region.to_string()),
            },
            Some((language, _)) => Self {
                language: language.to_string(),
                region: None,
            },
            None => Self {
                language: tag.to_string(),
                region: None,
            },
        }
    }

    /// Fill in the region. A non-blank region is kept as is; a blank one
    /// counts as absent.
    pub fn resolve(&self) -> ResolvedLocale {
        let region = self
            .region
            .as_deref()
            .map(str::trim)
            .filter(|region| !region.is_empty())
            .map_or_else(|| default_region(&self.language), str::to_string);

        ResolvedLocale {
            language: self.language.clone(),
            region,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en", Some("US"))
    }
}

/// A locale whose region is always known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLocale {
    pub language: String,
    pub region: String,
}

impl ResolvedLocale {
    /// Value for the `Accept-Language` header.
    pub fn accept_language(&self) -> String {
        format!("{}-{},{}", self.language, self.region, self.language)
    }
}

impl Default for ResolvedLocale {
    fn default() -> Self {
        Locale::default().resolve()
    }
}

fn default_region(language: &str) -> String {
    REGION_OVERRIDES
        .iter()
        .find(|(lang, _)| lang.eq_ignore_ascii_case(language))
        .map_or_else(|| language.to_uppercase(), |(_, region)| (*region).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn resolve(language: &str, region: Option<&str>) -> ResolvedLocale {
        Locale::new(language, region).resolve()
    }

    #[test]
    fn test_region_overrides() {
        assert_eq!(resolve("ja", None).region, "JP");
        assert_eq!(resolve("cs", None).region, "CZ");
        assert_eq!(resolve("uk", None).region, "UA");
        assert_eq!(resolve("vi", None).region, "VN");
    }

    #[test]
    fn test_default_region_is_uppercased_language() {
        let locale = resolve("fr", None);
        assert_eq!(locale.language, "fr");
        assert_eq!(locale.region, "FR");
    }

    #[test]
    fn test_explicit_region_passes_through() {
        let locale = resolve("en", Some("US"));
        assert_eq!(locale.language, "en");
        assert_eq!(locale.region, "US");

        // An explicit region wins over the override table.
        assert_eq!(resolve("ja", Some("US")).region, "US");
    }

    #[test]
    fn test_blank_region_is_derived() {
        assert_eq!(resolve("en", Some("")).region, "EN");
        assert_eq!(resolve("ja", Some("  ")).region, "JP");
        assert_eq!(resolve("ja", Some(" ")).accept_language(), "ja-JP,ja");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(Locale::parse("en-GB"), Locale::new("en", Some("GB")));
        assert_eq!(Locale::parse("pt_BR"), Locale::new("pt", Some("BR")));
        assert_eq!(Locale::parse("de"), Locale::new("de", None::<String>));
        assert_eq!(Locale::parse("de-"), Locale::new("de", None::<String>));
    }

    #[test]
    fn test_accept_language() {
        assert_eq!(resolve("ja", None).accept_language(), "ja-JP,ja");
    }

    proptest! {
        #[test]
        fn prop_region_always_present(language in "[a-z]{2,3}", region in proptest::option::of("[A-Z]{2}")) {
            let resolved = Locale::new(language.clone(), region.clone()).resolve();
            prop_assert!(!resolved.region.is_empty());
            prop_assert_eq!(resolved.language, language);
            if let Some(region) = region {
                prop_assert_eq!(resolved.region, region);
            }
        }
    }
}
