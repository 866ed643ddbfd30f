// Environment provider
//
// The custom-environment endpoint comes from a `WS_URL` value that may be
// set in one of two host contexts: the process environment, or an injected
// `process_env` table (loaded from `--env-file`). The value is resolved
// once at startup.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Name of the override variable in both host contexts
pub const WS_URL_VAR: &str = "WS_URL";

pub trait EnvProvider {
    /// Override connection URL, if one is configured
    fn ws_url(&self) -> Option<String>;
}

/// Variable lookup in the process environment
type VarLookup = fn(&str) -> Option<String>;

fn process_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Live lookup across both host contexts
#[derive(Debug, Clone)]
pub struct HostEnv {
    process: VarLookup,
    /// Injected `process_env` table
    injected: HashMap<String, String>,
}

impl Default for HostEnv {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

impl HostEnv {
    pub fn new(injected: HashMap<String, String>) -> Self {
        Self {
            process: process_var,
            injected,
        }
    }

    #[cfg(test)]
    fn with_process_lookup(mut self, lookup: VarLookup) -> Self {
        self.process = lookup;
        self
    }

    /// Load the injected table from a `KEY=VALUE` file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read env file {}", path.display()))?;
        Ok(Self::new(parse_env_file(&content)))
    }

    /// Snapshot the current value so later lookups are stable
    pub fn resolve(&self) -> StaticEnv {
        let ws_url = self.ws_url();
        tracing::debug!(ws_url = ?ws_url, "Resolved environment override");
        StaticEnv { ws_url }
    }
}

impl EnvProvider for HostEnv {
    fn ws_url(&self) -> Option<String> {
        (self.process)(WS_URL_VAR)
            .filter(|v| !v.is_empty())
            .or_else(|| {
                self.injected
                    .get(WS_URL_VAR)
                    .filter(|v| !v.is_empty())
                    .cloned()
            })
    }
}

/// Environment resolved once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticEnv {
    pub ws_url: Option<String>,
}

impl StaticEnv {
    pub fn with_ws_url(url: impl Into<String>) -> Self {
        Self {
            ws_url: Some(url.into()),
        }
    }
}

impl EnvProvider for StaticEnv {
    fn ws_url(&self) -> Option<String> {
        self.ws_url.clone().filter(|v| !v.is_empty())
    }
}

/// Parse `KEY=VALUE` lines; blank lines and `#` comments are skipped,
/// surrounding quotes on values are stripped
fn parse_env_file(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            (key.trim().to_string(), value.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_file() {
        let parsed = parse_env_file("# comment\n\nWS_URL=\"wss://x\"\nOTHER = 1\nbroken\n");
        assert_eq!(parsed.get("WS_URL").map(String::as_str), Some("wss://x"));
        assert_eq!(parsed.get("OTHER").map(String::as_str), Some("1"));
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_static_env_treats_empty_as_absent() {
        assert_eq!(StaticEnv::with_ws_url("").ws_url(), None);
        assert_eq!(StaticEnv::default().ws_url(), None);
        assert_eq!(
            StaticEnv::with_ws_url("wss://example").ws_url().as_deref(),
            Some("wss://example")
        );
    }

    fn injected(url: &str) -> HostEnv {
        let mut table = HashMap::new();
        table.insert(WS_URL_VAR.to_string(), url.to_string());
        HostEnv::new(table)
    }

    #[test]
    fn test_injected_context_used_when_process_env_unset() {
        let env = injected("wss://injected").with_process_lookup(|_| None);
        assert_eq!(env.resolve().ws_url.as_deref(), Some("wss://injected"));
    }

    #[test]
    fn test_process_env_takes_priority() {
        let env = injected("wss://injected").with_process_lookup(|_| Some("wss://process".to_string()));
        assert_eq!(env.resolve().ws_url.as_deref(), Some("wss://process"));
    }

    #[test]
    fn test_empty_process_value_falls_through() {
        let env = injected("wss://injected").with_process_lookup(|_| Some(String::new()));
        assert_eq!(env.resolve().ws_url.as_deref(), Some("wss://injected"));

        let neither = injected("").with_process_lookup(|_| Some(String::new()));
        assert_eq!(neither.resolve().ws_url, None);
    }

    #[test]
    fn test_process_lookup_uses_variable_name() {
        let env = HostEnv::default().with_process_lookup(|name| (name == WS_URL_VAR).then(|| "wss://named".to_string()));
        assert_eq!(env.ws_url().as_deref(), Some("wss://named"));
    }

    #[test]
    fn test_env_file_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.env");
        fs::write(&path, "WS_URL=wss://from-file\n").unwrap();
        let env = HostEnv::from_file(&path).unwrap();
        assert_eq!(env.injected.get(WS_URL_VAR).map(String::as_str), Some("wss://from-file"));

        assert!(HostEnv::from_file(&dir.path().join("missing.env")).is_err());
    }
}
