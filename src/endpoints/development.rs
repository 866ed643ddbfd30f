// Development, custom-environment and user-persisted endpoint sources

use super::LinkOption;
use crate::env::EnvProvider;
use crate::i18n::{TOptions, Translate, NS_APPS_CONFIG};
use crate::storage::KvStore;

/// Storage key holding the JSON-encoded list of user endpoint URLs
pub const CUSTOM_ENDPOINT_KEY: &str = "polkadot-app-custom-endpoints";

/// Header + entry for the environment override, or nothing
pub fn create_custom(t: &dyn Translate, env: &dyn EnvProvider) -> Vec<LinkOption> {
    let Some(ws_url) = env.ws_url() else {
        return Vec::new();
    };

    vec![
        LinkOption::header(t.t(
            "rpc.custom",
            "Custom environment",
            TOptions::ns(NS_APPS_CONFIG),
        )),
        LinkOption {
            info: Some("WS_URL".to_string()),
            text: t.t(
                "rpc.custom.entry",
                "Custom {{WS_URL}}",
                TOptions::ns(NS_APPS_CONFIG).with_replace(&[("WS_URL", ws_url.as_str())]),
            ),
            text_by: ws_url.clone(),
            value: ws_url,
            ..Default::default()
        },
    ]
}

/// User-added endpoints from local storage
///
/// Never fails: unreadable or malformed data is logged and yields no entries.
pub fn create_own(t: &dyn Translate, store: &dyn KvStore) -> Vec<LinkOption> {
    let stored = match store.get(CUSTOM_ENDPOINT_KEY) {
        Ok(Some(raw)) if !raw.is_empty() => raw,
        Ok(_) => return Vec::new(),
        Err(e) => {
            tracing::error!(error = %e, key = CUSTOM_ENDPOINT_KEY, "Cannot read custom endpoints");
            return Vec::new();
        }
    };

    let urls: Vec<String> = match serde_json::from_str(&stored) {
        Ok(urls) => urls,
        Err(e) => {
            tracing::error!(error = %e, key = CUSTOM_ENDPOINT_KEY, "Malformed custom endpoints");
            return Vec::new();
        }
    };

    urls.into_iter()
        .map(|url| LinkOption {
            info: Some("local".to_string()),
            text: t.t("rpc.custom.own", "Custom", TOptions::ns(NS_APPS_CONFIG)),
            text_by: url.clone(),
            value: url,
            ..Default::default()
        })
        .collect()
}

/// (dnslink, label, url) for each MetaMUI development network
const DEV_NETWORKS: [(&str, &str, &str); 3] = [
    ("local", "metablockchain-runtime Local", "ws://127.0.0.1:9944"),
    ("testnet", "metablockchain-runtime Testnet", "wss://n1testnet.metabit.exchange"),
    ("mainnet", "metablockchain-runtime Mainnet", "wss://mui.metablockchain.id"),
];

pub fn create_dev(t: &dyn Translate) -> Vec<LinkOption> {
    DEV_NETWORKS
        .iter()
        .map(|&(dnslink, label, url)| LinkOption {
            dnslink: Some(dnslink.to_string()),
            info: Some("metablockchain-runtime".to_string()),
            text: t.t("rpc.metablockchain", label, TOptions::ns(NS_APPS_CONFIG)),
            text_by: t.t(
                "rpc.hosted.by",
                "hosted by {{host}}",
                TOptions::ns(NS_APPS_CONFIG).with_replace(&[("host", "Metablockchain")]),
            ),
            value: url.to_string(),
            ..Default::default()
        })
        .collect()
}
