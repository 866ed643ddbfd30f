// Endpoint registry
//
// Builds the ordered list of selectable RPC endpoints shown in the
// Endpoints panel. The list is rebuilt from scratch on every call:
//   custom environment -> MetaMUI header -> development -> user-persisted
// with disabled entries removed last.

pub mod development;

pub use development::{create_custom, create_dev, create_own, CUSTOM_ENDPOINT_KEY};

use crate::env::EnvProvider;
use crate::i18n::{TOptions, Translate, NS_APPS_CONFIG};
use crate::storage::KvStore;

/// One selectable endpoint (or a section header when `is_header`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOption {
    /// Display text
    pub text: String,
    /// Secondary text (host or URL)
    pub text_by: String,
    /// Connection URL, empty for headers
    pub value: String,
    /// Chain/runtime identifier
    pub info: Option<String>,
    /// DNS-link category tag
    pub dnslink: Option<String>,
    pub is_header: bool,
    pub is_disabled: bool,
    pub is_development: bool,
}

impl LinkOption {
    pub fn header(text: String) -> Self {
        Self {
            text,
            is_header: true,
            ..Default::default()
        }
    }

    /// Whether this option can be picked as a connection target
    pub fn is_selectable(&self) -> bool {
        !self.is_header && !self.is_disabled && !self.value.is_empty()
    }
}

/// Concatenate the sources in fixed order and drop disabled entries
pub fn compose_endpoints(
    custom: Vec<LinkOption>,
    dev_header: LinkOption,
    dev: Vec<LinkOption>,
    own: Vec<LinkOption>,
) -> Vec<LinkOption> {
    custom
        .into_iter()
        .chain(std::iter::once(dev_header))
        .chain(dev)
        .chain(own)
        .filter(|option| !option.is_disabled)
        .collect()
}

/// Header introducing the MetaMUI development networks
pub fn dev_header(t: &dyn Translate) -> LinkOption {
    LinkOption {
        is_development: true,
        ..LinkOption::header(t.t(
            "rpc.header.dev",
            "MetaMUI networks",
            TOptions::ns(NS_APPS_CONFIG),
        ))
    }
}

pub fn create_ws_endpoints(
    t: &dyn Translate,
    env: &dyn EnvProvider,
    store: &dyn KvStore,
) -> Vec<LinkOption> {
    let endpoints = compose_endpoints(
        create_custom(t, env),
        dev_header(t),
        create_dev(t),
        create_own(t, store),
    );

    tracing::debug!(count = endpoints.len(), "Built endpoint list");
    endpoints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnv;
    use crate::i18n::Translator;
    use crate::storage::MemoryStore;
    use proptest::prelude::*;

    fn option(value: &str, is_disabled: bool) -> LinkOption {
        LinkOption {
            text: value.to_string(),
            text_by: value.to_string(),
            value: value.to_string(),
            is_disabled,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_list_is_header_plus_dev_table() {
        let t = Translator::new();
        let endpoints = create_ws_endpoints(&t, &StaticEnv::default(), &MemoryStore::new());

        assert_eq!(endpoints.len(), 4);
        assert_eq!(endpoints[0].text, "MetaMUI networks");
        assert!(endpoints[0].is_header);
        assert!(endpoints[0].is_development);
        assert_eq!(endpoints[0].value, "");
        assert_eq!(&endpoints[1..], create_dev(&t).as_slice());
        assert_eq!(endpoints.iter().filter(|e| e.is_header).count(), 1);
    }

    #[test]
    fn test_env_override_leads_the_list() {
        let t = Translator::new();
        let env = StaticEnv::with_ws_url("wss://example");
        let endpoints = create_ws_endpoints(&t, &env, &MemoryStore::new());

        assert!(endpoints[0].is_header);
        assert_eq!(endpoints[0].value, "");
        assert_eq!(endpoints[1].value, "wss://example");
        assert_eq!(endpoints[1].text_by, "wss://example");
        assert_eq!(endpoints[2].text, "MetaMUI networks");
        assert_eq!(endpoints.len(), 6);
    }

    #[test]
    fn test_user_entries_come_last() {
        let t = Translator::new();
        let mut store = MemoryStore::new();
        store.set(CUSTOM_ENDPOINT_KEY, r#"["wss://mine"]"#).unwrap();

        let endpoints = create_ws_endpoints(&t, &StaticEnv::default(), &store);
        let last = endpoints.last().unwrap();
        assert_eq!(last.value, "wss://mine");
        assert_eq!(endpoints.len(), 5);
    }

    #[test]
    fn test_malformed_storage_degrades_to_default_list() {
        let t = Translator::new();
        let mut store = MemoryStore::new();
        store.set(CUSTOM_ENDPOINT_KEY, "[not json").unwrap();

        let endpoints = create_ws_endpoints(&t, &StaticEnv::default(), &store);
        assert_eq!(endpoints.len(), 4);
    }

    #[test]
    fn test_is_selectable() {
        assert!(option("wss://a", false).is_selectable());
        assert!(!option("wss://a", true).is_selectable());
        assert!(!LinkOption::header("h".to_string()).is_selectable());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Disabled entries never survive composition, and the enabled ones
        /// keep their source order.
        #[test]
        fn prop_disabled_entries_filtered(
            custom in proptest::collection::vec(any::<bool>(), 0..4),
            dev in proptest::collection::vec(any::<bool>(), 0..6),
            own in proptest::collection::vec(any::<bool>(), 0..6),
        ) {
            let build = |prefix: &str, flags: &[bool]| -> Vec<LinkOption> {
                flags
                    .iter()
                    .enumerate()
                    .map(|(i, d)| option(&format!("{prefix}{i}"), *d))
                    .collect()
            };
            let c = build("c", &custom);
            let d = build("d", &dev);
            let o = build("o", &own);

            let expected: Vec<String> = c.iter().chain(d.iter()).chain(o.iter())
                .filter(|x| !x.is_disabled)
                .map(|x| x.value.clone())
                .collect();

            let t = Translator::new();
            let composed = compose_endpoints(c, dev_header(&t), d, o);

            prop_assert!(composed.iter().all(|x| !x.is_disabled));
            let values: Vec<String> = composed.iter()
                .filter(|x| !x.is_header)
                .map(|x| x.value.clone())
                .collect();
            prop_assert_eq!(values, expected);
        }
    }
}
