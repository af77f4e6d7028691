//! Config file loading and command-line overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;
use ytbridge_core::{Locale, SearchConfig};

use crate::args::Args;

const CONFIG_FILE: &str = "config.json";

/// `config.json` in the platform config directory, when one exists.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "ytbridge", "ytbridge")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Read a config file. A missing default file is not an error; a missing
/// explicit one is.
pub fn load(explicit: Option<&Path>) -> Result<SearchConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("No config file, using defaults");
                return Ok(SearchConfig::default());
            }
        },
    };

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = SearchConfig::from_json(&text)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Apply `--language` and `--region` on top of the file config. A language
/// tag carrying a region (`en-GB`) sets both.
pub fn apply_overrides(mut config: SearchConfig, args: &Args) -> SearchConfig {
    if let Some(language) = &args.language {
        let locale = Locale::parse(language);
        config = config.with_language(locale.language);
        if locale.region.is_some() {
            config = config.with_region(locale.region);
        } else if args.region.is_none() {
            config = config.with_region(None);
        }
    }
    if let Some(region) = &args.region {
        config = config.with_region(Some(region.clone()));
    }
    config
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["ytbridge"];
        argv.extend_from_slice(extra);
        argv.extend_from_slice(&["search", "x"]);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_language_without_region_derives_region() {
        let config = apply_overrides(SearchConfig::default(), &args(&["--language", "ja"]));
        assert_eq!(config.language, "ja");
        assert_eq!(config.locale().region, "JP");
    }

    #[test]
    fn test_language_tag_sets_region() {
        let config = apply_overrides(SearchConfig::default(), &args(&["--language", "en-GB"]));
        assert_eq!(config.language, "en");
        assert_eq!(config.region.as_deref(), Some("GB"));
    }

    #[test]
    fn test_explicit_region_wins() {
        let config = apply_overrides(
            SearchConfig::default(),
            &args(&["--language", "fr", "--region", "CA"]),
        );
        assert_eq!(config.locale().accept_language(), "fr-CA,fr");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(load(Some(Path::new("/nonexistent/ytbridge.json"))).is_err());
    }
}
