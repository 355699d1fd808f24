use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::analysis::keywords::KeywordCatalog;
use crate::analysis::perturbation::ScoringMode;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// `random` | `off` | `seed:<n>` - see `analysis::perturbation`.
    pub scoring_mode: ScoringMode,
    /// Optional JSON keyword catalog replacing the built-in lists.
    pub keywords_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            scoring_mode: lookup("SCORING_NOISE")
                .map(|raw| raw.parse::<ScoringMode>())
                .transpose()
                .map_err(|e| anyhow!(e))
                .context("SCORING_NOISE must be random, off or seed:<n>")?
                .unwrap_or_default(),
            keywords_path: lookup("KEYWORDS_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            max_upload_bytes: lookup("MAX_UPLOAD_BYTES")
                .map(|raw| raw.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a byte count")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        })
    }

    /// Loads the keyword catalog: the file at `KEYWORDS_PATH`, or the built-in lists.
    pub fn load_keyword_catalog(&self) -> Result<KeywordCatalog> {
        let Some(path) = &self.keywords_path else {
            return Ok(KeywordCatalog::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read keyword file '{}'", path.display()))?;
        KeywordCatalog::from_json(&raw)
            .with_context(|| format!("Invalid keyword file '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;
    use crate::analysis::models::Category;

    fn config_with(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.scoring_mode, ScoringMode::Random);
        assert!(config.keywords_path.is_none());
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("PORT", "9000"),
            ("SCORING_NOISE", "seed:17"),
            ("KEYWORDS_PATH", "/etc/founderscan/keywords.json"),
            ("MAX_UPLOAD_BYTES", "2048"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.scoring_mode, ScoringMode::Seeded(17));
        assert_eq!(
            config.keywords_path,
            Some(PathBuf::from("/etc/founderscan/keywords.json"))
        );
        assert_eq!(config.max_upload_bytes, 2048);
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(config_with(&[("PORT", "not-a-port")]).is_err());
        assert!(config_with(&[("SCORING_NOISE", "loud")]).is_err());
        assert!(config_with(&[("MAX_UPLOAD_BYTES", "-1")]).is_err());
    }

    #[test]
    fn test_builtin_catalog_without_path() {
        let config = config_with(&[]).unwrap();
        assert!(config.load_keyword_catalog().is_ok());
    }

    #[test]
    fn test_keyword_file_replaces_builtin_lists() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"leadership": ["Board Chair"], "technical": ["rust"], "entrepreneurial": ["founder"],
                "education": ["phd"], "network": ["angel"], "industry": ["fintech"]}}"#
        )
        .unwrap();

        let path = file.path().to_string_lossy().to_string();
        let config = config_with(&[("KEYWORDS_PATH", path.as_str())]).unwrap();
        let catalog = config.load_keyword_catalog().unwrap();
        assert_eq!(
            catalog.phrases(Category::Leadership),
            ["board chair".to_string()]
        );
        assert_eq!(catalog.count_matches(Category::Industry, "Fintech operator"), 1);
    }

    #[test]
    fn test_missing_keyword_file_fails() {
        let config = config_with(&[("KEYWORDS_PATH", "/nonexistent/keywords.json")]).unwrap();
        assert!(config.load_keyword_catalog().is_err());
    }
}
