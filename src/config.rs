use anyhow::Result;
use clap::Parser;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "bookmarks-api")]
#[command(about = "Runs the bookmarks REST API", long_about = None)]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config_path: Option<String>,
}

pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bookmarks")
}

pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.yaml")
}

#[derive(Debug, Deserialize, Clone)]
pub struct App {
    database: String,
    #[serde(default = "default_port")]
    port: u16,
    api_token: String,
    #[serde(default)]
    pub turso_url: Option<String>,
    #[serde(default)]
    pub turso_auth_token: Option<String>,
    #[serde(default = "default_sync_interval")]
    pub sync_interval_seconds: u64,
}

fn default_port() -> u16 {
    8000
}

fn default_sync_interval() -> u64 {
    60
}

impl App {
    pub fn get_db(&self) -> &str {
        &self.database
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub fn get_api_token(&self) -> &str {
        &self.api_token
    }

    /// Remote URL and auth token, when both are set and non-empty.
    pub fn replica(&self) -> Option<(&str, &str)> {
        let url = self.turso_url.as_deref().filter(|s| !s.is_empty())?;
        let token = self.turso_auth_token.as_deref().filter(|s| !s.is_empty())?;
        Some((url, token))
    }
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub app: App,
}

impl Config {
    pub fn new(path: &Path) -> Result<Self> {
        let yaml_str = fs::read_to_string(path)?;
        Config::from_yaml(&yaml_str, |name| env::var(name).ok())
    }

    /// Parses `yaml_str` after expanding `${VAR}` and `${VAR:-default}`
    /// references through `lookup`.
    pub fn from_yaml(yaml_str: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let expanded = Config::substitute_env_vars(yaml_str, lookup);
        let config: Config = serde_yaml::from_str(&expanded)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.app.api_token.trim().is_empty() {
            anyhow::bail!("app.api_token must not be empty");
        }
        if self.app.database.trim().is_empty() {
            anyhow::bail!("app.database must not be empty");
        }
        Ok(())
    }

    fn substitute_env_vars(yaml_str: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
        let mut result = String::with_capacity(yaml_str.len());
        let mut rest = yaml_str;

        while let Some(start) = rest.find("${") {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            result.push_str(&rest[..start]);

            let reference = &rest[start + 2..start + len];
            let value = match reference.split_once(":-") {
                Some((name, default)) => lookup(name).unwrap_or_else(|| default.to_string()),
                None => lookup(reference).unwrap_or_else(|| {
                    tracing::warn!("environment variable '{}' not found", reference);
                    String::new()
                }),
            };
            result.push_str(&value);
            rest = &rest[start + len + 1..];
        }

        result.push_str(rest);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn substitutes_vars_and_defaults() {
        let yaml = r#"
app:
  database: ${DB_FILE:-bookmarks.db}
  port: 9000
  api_token: ${API_TOKEN}
"#;
        let cfg = Config::from_yaml(yaml, lookup_from(&[("API_TOKEN", "s3cret")])).unwrap();
        assert_eq!(cfg.app.get_db(), "bookmarks.db");
        assert_eq!(cfg.app.get_port(), 9000);
        assert_eq!(cfg.app.get_api_token(), "s3cret");
        assert_eq!(cfg.app.sync_interval_seconds, 60);
        assert!(cfg.app.replica().is_none());
    }

    #[test]
    fn rejects_missing_api_token() {
        let yaml = r#"
app:
  database: bookmarks.db
  api_token: "${API_TOKEN}"
"#;
        let err = Config::from_yaml(yaml, lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("api_token"));
    }

    #[test]
    fn replica_requires_both_settings() {
        let yaml = r#"
app:
  database: bookmarks.db
  api_token: token
  turso_url: "${TURSO_URL:-}"
  turso_auth_token: "${TURSO_AUTH_TOKEN:-}"
"#;
        let cfg = Config::from_yaml(yaml, lookup_from(&[("TURSO_URL", "libsql://db.example")]))
            .unwrap();
        assert!(cfg.app.replica().is_none());

        let cfg = Config::from_yaml(
            yaml,
            lookup_from(&[("TURSO_URL", "libsql://db.example"), ("TURSO_AUTH_TOKEN", "t")]),
        )
        .unwrap();
        assert_eq!(cfg.app.replica(), Some(("libsql://db.example", "t")));
    }

    #[test]
    fn unterminated_reference_is_left_alone() {
        let out = Config::substitute_env_vars("a: ${OPEN", lookup_from(&[]));
        assert_eq!(out, "a: ${OPEN");
    }
}
