use crate::config::ProfileStore;
use chrono::Utc;
use regex::Regex;
use surgeapi::{
    default_config, empty_config, GeneralSettings, GroupCategory, MitmConfig, ProxyGroup, Rule,
    Subscription, SurgeConfig, WireGuardConfig,
};
use url::Url;

/// The single mutable configuration of a run, loaded from the profile store
/// on open and written back after every mutation. Saves never fail the
/// mutation; the in-memory value stays authoritative.
pub struct ConfigSession {
    config: SurgeConfig,
    store: ProfileStore,
}

impl ConfigSession {
    pub fn open(store: ProfileStore) -> Self {
        let config = store.load().unwrap_or_else(default_config);
        Self { config, store }
    }

    pub fn config(&self) -> &SurgeConfig {
        &self.config
    }

    pub fn profile_path(&self) -> &std::path::Path {
        self.store.path()
    }

    fn touch(&mut self) {
        self.store.save(&self.config);
    }

    pub fn replace(&mut self, config: SurgeConfig) {
        self.config = config;
        self.touch();
    }

    pub fn reset(&mut self, empty: bool) {
        self.config = if empty { empty_config() } else { default_config() };
        self.touch();
    }

    /// Inserts or updates by id. A blank name is derived from the URL, and a
    /// brand new subscription is referenced from every region group so its
    /// nodes become eligible there without further wiring.
    pub fn upsert_subscription(&mut self, mut sub: Subscription) -> Option<String> {
        if sub.url.is_empty() {
            return None;
        }
        if sub.name.is_empty() {
            sub.name = derive_subscription_name(&sub.url);
        }
        let name = sub.name.clone();
        if let Some(slot) = self.config.subscriptions.iter_mut().find(|s| s.id == sub.id) {
            *slot = sub;
        } else {
            self.config.subscriptions.push(sub);
            for group in self.config.proxy_groups.iter_mut() {
                if group.group_category == Some(GroupCategory::Region)
                    && !group.include_other_group.contains(&name)
                {
                    group.include_other_group.push(name.clone());
                }
            }
        }
        self.touch();
        Some(name)
    }

    pub fn remove_subscription(&mut self, id: &str) -> bool {
        let before = self.config.subscriptions.len();
        self.config.subscriptions.retain(|s| s.id != id);
        let removed = self.config.subscriptions.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Peers without a name or private key are rejected.
    pub fn upsert_wireguard(&mut self, peer: WireGuardConfig) -> bool {
        if peer.name.is_empty() || peer.private_key.is_empty() {
            return false;
        }
        if let Some(slot) = self
            .config
            .wire_guard_configs
            .iter_mut()
            .find(|w| w.id == peer.id)
        {
            *slot = peer;
        } else {
            self.config.wire_guard_configs.push(peer);
        }
        self.touch();
        true
    }

    pub fn remove_wireguard(&mut self, id: &str) -> bool {
        let before = self.config.wire_guard_configs.len();
        self.config.wire_guard_configs.retain(|w| w.id != id);
        let removed = self.config.wire_guard_configs.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    pub fn upsert_group(&mut self, group: ProxyGroup) -> bool {
        if group.name.is_empty() {
            return false;
        }
        if let Some(slot) = self.config.proxy_groups.iter_mut().find(|g| g.id == group.id) {
            *slot = group;
        } else {
            self.config.proxy_groups.push(group);
        }
        self.touch();
        true
    }

    pub fn remove_group(&mut self, id: &str) -> bool {
        let before = self.config.proxy_groups.len();
        self.config.proxy_groups.retain(|g| g.id != id);
        let removed = self.config.proxy_groups.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    pub fn append_rule(&mut self, rule: Rule) -> bool {
        if rule.value.is_empty() {
            return false;
        }
        self.config.rules.push(rule);
        self.touch();
        true
    }

    pub fn remove_rule(&mut self, id: &str) -> bool {
        let before = self.config.rules.len();
        self.config.rules.retain(|r| r.id != id);
        let removed = self.config.rules.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    pub fn set_rule_policy(&mut self, id: &str, policy: &str) -> bool {
        match self.config.rules.iter_mut().find(|r| r.id == id) {
            Some(rule) => {
                rule.policy = policy.to_string();
                self.touch();
                true
            }
            None => false,
        }
    }

    pub fn set_general(&mut self, general: GeneralSettings) {
        self.config.general = general;
        self.touch();
    }

    pub fn set_mitm(&mut self, mitm: MitmConfig) {
        self.config.mitm = mitm;
        self.touch();
    }

    /// Policies a rule may point at: the builtin ones plus every visible
    /// service group, in declaration order.
    pub fn available_policies(&self) -> Vec<String> {
        let mut policies = vec![
            "DIRECT".to_string(),
            "REJECT".to_string(),
            "REJECT-TINYGIF".to_string(),
        ];
        policies.extend(
            self.config
                .proxy_groups
                .iter()
                .filter(|g| !g.hidden && g.group_category == Some(GroupCategory::Service))
                .map(|g| g.name.clone()),
        );
        policies
    }
}

fn derive_subscription_name(url: &str) -> String {
    let re = Regex::new(r"/download/([^/?]+)").unwrap();
    if let Some(caps) = re.captures(url) {
        return caps[1].to_string();
    }
    if let Some(label) = Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.split('.').next().unwrap_or("").to_string()))
    {
        if !label.is_empty() {
            return label;
        }
    }
    format!("订阅{}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use surgeapi::fresh_id;

    fn scratch_session() -> ConfigSession {
        let path = std::env::temp_dir().join(format!("surgegen-session-{}.json", fresh_id()));
        ConfigSession::open(ProfileStore::new(path))
    }

    fn sub_with_url(url: &str) -> Subscription {
        Subscription {
            id: fresh_id(),
            name: String::new(),
            url: url.to_string(),
            filter: None,
            update_interval: Some(1),
            hidden: Some(true),
        }
    }

    #[test]
    fn blank_names_come_from_the_url() {
        let mut session = scratch_session();
        let name = session
            .upsert_subscription(sub_with_url("https://x.example/download/myfeed/"))
            .unwrap();
        assert_eq!(name, "myfeed");

        let name = session
            .upsert_subscription(sub_with_url("https://foo.example.com/abc"))
            .unwrap();
        assert_eq!(name, "foo");

        let name = session.upsert_subscription(sub_with_url("not a url")).unwrap();
        assert!(name.starts_with("订阅"));

        assert_eq!(session.upsert_subscription(sub_with_url("")), None);
    }

    #[test]
    fn new_subscriptions_join_every_region_group_once() {
        let mut session = scratch_session();
        let services_before: Vec<ProxyGroup> = session
            .config()
            .proxy_groups
            .iter()
            .filter(|g| g.group_category == Some(GroupCategory::Service))
            .cloned()
            .collect();

        let mut sub = sub_with_url("https://x.example/download/myfeed/");
        let id = sub.id.clone();
        session.upsert_subscription(sub.clone()).unwrap();
        for group in &session.config().proxy_groups {
            if group.group_category == Some(GroupCategory::Region) {
                let hits = group
                    .include_other_group
                    .iter()
                    .filter(|n| n.as_str() == "myfeed")
                    .count();
                assert_eq!(hits, 1, "group {}", group.name);
            }
        }

        // Updating the same subscription must not add a second reference.
        sub.id = id;
        sub.name = "myfeed".to_string();
        sub.filter = Some("香港".to_string());
        session.upsert_subscription(sub).unwrap();
        for group in &session.config().proxy_groups {
            if group.group_category == Some(GroupCategory::Region) {
                let hits = group
                    .include_other_group
                    .iter()
                    .filter(|n| n.as_str() == "myfeed")
                    .count();
                assert_eq!(hits, 1, "group {}", group.name);
            }
        }

        let services_after: Vec<ProxyGroup> = session
            .config()
            .proxy_groups
            .iter()
            .filter(|g| g.group_category == Some(GroupCategory::Service))
            .cloned()
            .collect();
        assert_eq!(services_before, services_after);
    }

    #[test]
    fn wireguard_upsert_requires_name_and_key() {
        let mut session = scratch_session();
        let mut peer = WireGuardConfig::draft();
        assert!(!session.upsert_wireguard(peer.clone()));
        peer.name = "jp".to_string();
        assert!(!session.upsert_wireguard(peer.clone()));
        peer.private_key = "PRIV".to_string();
        assert!(session.upsert_wireguard(peer.clone()));
        assert_eq!(session.config().wire_guard_configs.len(), 1);

        peer.endpoint = "host:51820".to_string();
        assert!(session.upsert_wireguard(peer.clone()));
        assert_eq!(session.config().wire_guard_configs.len(), 1);
        assert_eq!(session.config().wire_guard_configs[0].endpoint, "host:51820");

        assert!(session.remove_wireguard(&peer.id));
        assert!(!session.remove_wireguard(&peer.id));
    }

    #[test]
    fn rule_mutations_find_by_id() {
        let mut session = scratch_session();
        let rules_before = session.config().rules.len();
        let rule = Rule {
            id: fresh_id(),
            kind: surgeapi::RuleType::Domain,
            value: "example.com".to_string(),
            policy: "DIRECT".to_string(),
            comment: None,
            no_resolve: false,
        };
        let id = rule.id.clone();
        assert!(session.append_rule(rule.clone()));
        assert_eq!(session.config().rules.len(), rules_before + 1);

        assert!(session.set_rule_policy(&id, "保底"));
        assert_eq!(session.config().rules.last().unwrap().policy, "保底");
        assert!(!session.set_rule_policy("missing", "保底"));

        assert!(session.remove_rule(&id));
        assert!(!session.remove_rule(&id));

        let mut empty_value = rule;
        empty_value.value = String::new();
        assert!(!session.append_rule(empty_value));
    }

    #[test]
    fn available_policies_lists_visible_service_groups() {
        let session = scratch_session();
        let policies = session.available_policies();
        assert_eq!(&policies[..3], &["DIRECT", "REJECT", "REJECT-TINYGIF"]);
        assert_eq!(policies.len(), 10);
        assert_eq!(policies.last().map(String::as_str), Some("保底"));
    }

    #[test]
    fn reset_switches_between_templates() {
        let mut session = scratch_session();
        session.reset(true);
        assert!(session.config().subscriptions.is_empty());
        assert_eq!(session.config().proxy_groups.len(), 1);
        session.reset(false);
        assert_eq!(session.config().proxy_groups.len(), 16);
    }
}
