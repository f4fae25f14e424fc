use crate::render::non_empty;
use surgeapi::{IpVersion, ProxyGroup, Subscription, WireGuardConfig};

fn wireguard_proxy_line(config: &WireGuardConfig) -> String {
    let mut parts = vec![
        format!("{} = wireguard", config.name),
        format!("section-name={}", config.name),
        format!("test-url={}", config.test_url),
    ];
    if let Some(version) = config.ip_version {
        if version != IpVersion::Auto {
            parts.push(format!("ip-version={}", version));
        }
    }
    parts.join(", ")
}

pub(crate) fn proxy_section(wire_guard_configs: &[WireGuardConfig]) -> String {
    let mut lines = vec!["[Proxy]".to_string()];
    for wg in wire_guard_configs {
        lines.push(wireguard_proxy_line(wg));
    }
    lines.join("\n")
}

/// Subscription-backed groups come first, then the hand-written ones.
pub(crate) fn proxy_group_section(groups: &[ProxyGroup], subscriptions: &[Subscription]) -> String {
    let mut lines = vec!["[Proxy Group]".to_string()];

    for sub in subscriptions {
        let mut parts = vec![format!("{} = smart", sub.name)];
        if sub.hidden == Some(true) {
            parts.push("hidden=1".to_string());
        }
        parts.push(format!("policy-path={}", sub.url));
        if let Some(hours) = sub.update_interval {
            if hours != 0 {
                parts.push(format!("update-interval={}", hours * 3600));
            }
        }
        if let Some(filter) = non_empty(&sub.filter) {
            parts.push(format!("policy-regex-filter={}", filter));
        }
        // Alerts stay on only when hidden is an explicit false.
        if sub.hidden != Some(false) {
            parts.push("no-alert=1".to_string());
        }
        lines.push(parts.join(", "));
    }

    for group in groups {
        let mut parts = vec![format!("{} = {}", group.name, group.kind)];
        if group.hidden {
            parts.push("hidden=1".to_string());
        }
        if !group.include_other_group.is_empty() {
            parts.push(format!(
                "include-other-group=\"{}\"",
                group.include_other_group.join(", ")
            ));
        }
        if let Some(filter) = non_empty(&group.policy_regex_filter) {
            parts.push(format!("policy-regex-filter={}", filter));
        }
        if !group.proxies.is_empty() {
            parts.push(group.proxies.join(", "));
        }
        if let Some(tolerance) = group.tolerance {
            if tolerance != 0 {
                parts.push(format!("tolerance={}", tolerance));
            }
        }
        if group.no_alert {
            parts.push("no-alert=1".to_string());
        }
        lines.push(parts.join(", "));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use surgeapi::{fresh_id, GroupKind};

    fn wg(name: &str) -> WireGuardConfig {
        let mut config = WireGuardConfig::draft();
        config.name = name.to_string();
        config
    }

    fn sub(name: &str, hidden: Option<bool>) -> Subscription {
        Subscription {
            id: fresh_id(),
            name: name.to_string(),
            url: format!("https://example.com/{}", name),
            filter: None,
            update_interval: None,
            hidden,
        }
    }

    #[test]
    fn proxy_section_lists_wireguard_lines() {
        assert_eq!(proxy_section(&[]), "[Proxy]");
        let mut tokyo = wg("tokyo");
        tokyo.ip_version = Some(IpVersion::V4Only);
        let osaka = wg("osaka");
        let text = proxy_section(&[tokyo, osaka]);
        assert_eq!(
            text,
            "[Proxy]\n\
             tokyo = wireguard, section-name=tokyo, test-url=http://cp.cloudflare.com/generate_204, ip-version=v4-only\n\
             osaka = wireguard, section-name=osaka, test-url=http://cp.cloudflare.com/generate_204"
        );
    }

    #[test]
    fn auto_ip_version_is_not_emitted() {
        let mut config = wg("auto");
        config.ip_version = Some(IpVersion::Auto);
        assert!(!proxy_section(&[config]).contains("ip-version"));
    }

    #[test]
    fn subscription_alert_suppression_follows_hidden() {
        let text = proxy_group_section(&[], &[sub("a", None), sub("b", Some(true)), sub("c", Some(false))]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "a = smart, policy-path=https://example.com/a, no-alert=1");
        assert_eq!(
            lines[2],
            "b = smart, hidden=1, policy-path=https://example.com/b, no-alert=1"
        );
        assert_eq!(lines[3], "c = smart, policy-path=https://example.com/c");
    }

    #[test]
    fn subscription_interval_is_hours_to_seconds() {
        let mut s = sub("feed", None);
        s.update_interval = Some(2);
        s.filter = Some("香港".to_string());
        let text = proxy_group_section(&[], &[s.clone()]);
        assert!(text.contains("update-interval=7200, policy-regex-filter=香港"));

        s.update_interval = Some(0);
        s.filter = Some(String::new());
        let text = proxy_group_section(&[], &[s]);
        assert!(!text.contains("update-interval"));
        assert!(!text.contains("policy-regex-filter"));
    }

    #[test]
    fn group_clauses_keep_fixed_order() {
        let group = ProxyGroup {
            id: fresh_id(),
            name: "香港".to_string(),
            kind: GroupKind::Smart,
            proxies: vec![],
            hidden: true,
            include_other_group: vec!["sub-a".to_string(), "sub-b".to_string()],
            policy_regex_filter: Some("港|HK".to_string()),
            tolerance: Some(100),
            no_alert: true,
            group_category: None,
        };
        let text = proxy_group_section(&[group], &[]);
        assert_eq!(
            text,
            "[Proxy Group]\n香港 = smart, hidden=1, include-other-group=\"sub-a, sub-b\", \
             policy-regex-filter=港|HK, tolerance=100, no-alert=1"
        );
    }

    #[test]
    fn empty_member_list_and_zero_tolerance_are_suppressed() {
        let group = ProxyGroup {
            id: fresh_id(),
            name: "picker".to_string(),
            kind: GroupKind::Select,
            proxies: vec!["DIRECT".to_string(), "保底".to_string()],
            hidden: false,
            include_other_group: vec![],
            policy_regex_filter: None,
            tolerance: Some(0),
            no_alert: false,
            group_category: None,
        };
        let text = proxy_group_section(&[group], &[]);
        assert_eq!(text, "[Proxy Group]\npicker = select, DIRECT, 保底");
    }
}
