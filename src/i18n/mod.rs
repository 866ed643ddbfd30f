// Localization lookup
//
// Every user-facing label goes through a `Translate` implementation so that
// the endpoint tables and panels can be rendered from a locale catalog.
// Without a catalog the default (English) text is used.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Namespace used by the endpoint tables
pub const NS_APPS_CONFIG: &str = "apps-config";

/// Namespace used by the parachain panels
pub const NS_PARACHAINS: &str = "app-parachains";

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("cannot read locale file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid locale catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Lookup options: namespace plus `{{name}}` replacements
#[derive(Debug, Clone, Copy, Default)]
pub struct TOptions<'a> {
    pub ns: &'a str,
    pub replace: &'a [(&'a str, &'a str)],
}

impl<'a> TOptions<'a> {
    pub fn ns(ns: &'a str) -> Self {
        Self { ns, replace: &[] }
    }

    pub fn with_replace(mut self, replace: &'a [(&'a str, &'a str)]) -> Self {
        self.replace = replace;
        self
    }
}

pub trait Translate {
    /// Translate `key`, falling back to `default`
    fn t(&self, key: &str, default: &str, opts: TOptions<'_>) -> String;
}

/// Catalog-backed translator
///
/// Catalog layout on disk: `{ "<ns>": { "<key>": "<text>" } }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Translator {
    catalog: HashMap<String, HashMap<String, String>>,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, LocaleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, LocaleError> {
        let content = fs::read_to_string(path).map_err(|source| LocaleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let translator = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            namespaces = translator.catalog.len(),
            "Loaded locale catalog"
        );
        Ok(translator)
    }
}

impl Translate for Translator {
    fn t(&self, key: &str, default: &str, opts: TOptions<'_>) -> String {
        let template = self
            .catalog
            .get(opts.ns)
            .and_then(|ns| ns.get(key))
            .map(String::as_str)
            .unwrap_or(default);

        interpolate(template, opts.replace)
    }
}

/// Replace `{{name}}` placeholders; unknown names are left as-is
pub fn interpolate(template: &str, replace: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) => {
                let name = after[..end].trim();
                match replace.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_text_used_without_catalog() {
        let t = Translator::new();
        let text = t.t("rpc.custom.own", "Custom", TOptions::ns(NS_APPS_CONFIG));
        assert_eq!(text, "Custom");
    }

    #[test]
    fn test_interpolation() {
        let t = Translator::new();
        let text = t.t(
            "rpc.hosted.by",
            "hosted by {{host}}",
            TOptions::ns(NS_APPS_CONFIG).with_replace(&[("host", "Metablockchain")]),
        );
        assert_eq!(text, "hosted by Metablockchain");
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        assert_eq!(interpolate("a {{x}} b", &[("y", "1")]), "a {{x}} b");
        assert_eq!(interpolate("open {{ only", &[]), "open {{ only");
    }

    #[test]
    fn test_catalog_overrides_default() {
        let t = Translator::from_json(r#"{"apps-config": {"rpc.custom.own": "Eigener"}}"#).unwrap();
        assert_eq!(t.t("rpc.custom.own", "Custom", TOptions::ns(NS_APPS_CONFIG)), "Eigener");
        // other namespaces still fall back
        assert_eq!(t.t("rpc.custom.own", "Custom", TOptions::ns(NS_PARACHAINS)), "Custom");
    }

    #[test]
    fn test_invalid_catalog_rejected() {
        assert!(matches!(Translator::from_json("[1, 2]"), Err(LocaleError::Json(_))));
    }
}
