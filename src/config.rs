use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    /// Report update/delete failures as 400 instead of 404/403.
    pub legacy_error_status: bool,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port: {}", raw))?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let legacy_error_status = match lookup("LEGACY_ERROR_STATUS") {
            Some(raw) => parse_flag(&raw).context("LEGACY_ERROR_STATUS must be true or false")?,
            None => true,
        };

        let seed_file = lookup("SEED_FILE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            allowed_origins,
            legacy_error_status,
            seed_file,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised flag value {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_address(), "0.0.0.0:3000");
        assert_eq!(
            cfg.allowed_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
        assert!(cfg.legacy_error_status);
        assert!(cfg.seed_file.is_none());
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("ALLOWED_ORIGINS", " https://a.dev , ,https://b.dev"),
            ("LEGACY_ERROR_STATUS", "off"),
            ("SEED_FILE", "data/seed.json"),
        ])
        .unwrap();

        assert_eq!(cfg.bind_address(), "127.0.0.1:8080");
        assert_eq!(cfg.allowed_origins, vec!["https://a.dev", "https://b.dev"]);
        assert!(!cfg.legacy_error_status);
        assert_eq!(cfg.seed_file, Some(PathBuf::from("data/seed.json")));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = config(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn bad_flag_is_an_error() {
        assert!(config(&[("LEGACY_ERROR_STATUS", "maybe")]).is_err());
    }
}
