mod general;
mod mitm;
mod proxy;
mod rule;
mod wireguard;

use surgeapi::SurgeConfig;

const STATIC_SECTIONS: &str = include_str!("static_sections.conf");

/// Optional strings count as set only when non-empty, matching how every
/// conditional clause in the emitted profile behaves.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Renders the whole profile. Pure: equal configurations produce identical
/// text, and the section order never changes.
pub fn generate(config: &SurgeConfig) -> String {
    let mut sections = vec![
        general::general_section(&config.general),
        proxy::proxy_section(&config.wire_guard_configs),
        proxy::proxy_group_section(&config.proxy_groups, &config.subscriptions),
        rule::rule_section(&config.rules),
        STATIC_SECTIONS.to_string(),
        mitm::mitm_section(&config.mitm),
    ];
    if !config.wire_guard_configs.is_empty() {
        sections.push(wireguard::wireguard_sections(&config.wire_guard_configs));
    }
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use surgeapi::{default_config, empty_config, WireGuardConfig};

    #[test]
    fn generation_is_deterministic() {
        let config = default_config();
        assert_eq!(generate(&config), generate(&config.clone()));
        let empty = empty_config();
        assert_eq!(generate(&empty), generate(&empty.clone()));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let mut config = default_config();
        let mut peer = WireGuardConfig::draft();
        peer.name = "jp".to_string();
        config.wire_guard_configs.push(peer);

        let text = generate(&config);
        let order = [
            "[General]",
            "\n\n[Proxy]\n",
            "\n\n[Proxy Group]\n",
            "\n\n[Rule]\n",
            "\n\n[Host]\n",
            "\n[URL Rewrite]\n",
            "\n[Header Rewrite]\n",
            "\n\n[MITM]\n",
            "\n\n[WireGuard jp]\n",
        ];
        let mut at = 0;
        for marker in order {
            let hit = text[at..].find(marker).unwrap();
            at += hit + marker.len();
        }
    }

    #[test]
    fn wireguard_sections_only_appear_with_peers() {
        let text = generate(&default_config());
        assert!(!text.contains("[WireGuard"));
        assert!(text.ends_with("hostname = "));
    }

    #[test]
    fn static_block_is_verbatim() {
        let text = generate(&empty_config());
        assert!(text.contains("mtalk.google.com = 108.177.125.188"));
        assert!(text.contains("^https?:\\/\\/(www.)?(g|google)\\.cn https://www.google.com 302"));
        assert!(text.contains("header-replace User-Agent"));
    }
}
