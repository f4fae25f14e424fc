use crate::catalog::rule_url;
use crate::config::SurgeConfig;
use crate::general::GeneralSettings;
use crate::id::fresh_id;
use crate::mitm::MitmConfig;
use crate::proxy_group::{GroupCategory, GroupKind, ProxyGroup};
use crate::rule::{Rule, RuleType};
use crate::subscription::Subscription;

/// The curated starting profile. Every call allocates fresh identifiers so
/// two independently created defaults never collide.
pub fn default_config() -> SurgeConfig {
    SurgeConfig {
        general: GeneralSettings::default(),
        subscriptions: vec![Subscription {
            id: fresh_id(),
            name: "示例订阅".to_string(),
            url: "https://example.com/your-subscription-url".to_string(),
            filter: Some("^((?!机场|节点|更新订阅|过期).)*$".to_string()),
            update_interval: Some(1),
            hidden: Some(true),
        }],
        wire_guard_configs: Vec::new(),
        proxy_groups: default_proxy_groups(),
        rules: default_rules(),
        mitm: MitmConfig::default(),
    }
}

/// A minimal profile: a single visible catch-all group routing to DIRECT.
pub fn empty_config() -> SurgeConfig {
    SurgeConfig {
        general: GeneralSettings::default(),
        subscriptions: Vec::new(),
        wire_guard_configs: Vec::new(),
        proxy_groups: vec![ProxyGroup {
            id: fresh_id(),
            name: "保底".to_string(),
            kind: GroupKind::Select,
            proxies: vec!["DIRECT".to_string()],
            hidden: false,
            include_other_group: Vec::new(),
            policy_regex_filter: None,
            tolerance: None,
            no_alert: false,
            group_category: Some(GroupCategory::Service),
        }],
        rules: Vec::new(),
        mitm: MitmConfig::default(),
    }
}

fn region(name: &str, filter: &str, include: &[&str]) -> ProxyGroup {
    ProxyGroup {
        id: fresh_id(),
        name: name.to_string(),
        kind: GroupKind::Smart,
        proxies: Vec::new(),
        hidden: true,
        include_other_group: include.iter().map(|s| s.to_string()).collect(),
        policy_regex_filter: Some(filter.to_string()),
        tolerance: Some(100),
        no_alert: false,
        group_category: Some(GroupCategory::Region),
    }
}

fn service(name: &str, members: &[&str]) -> ProxyGroup {
    ProxyGroup {
        id: fresh_id(),
        name: name.to_string(),
        kind: GroupKind::Select,
        proxies: members.iter().map(|s| s.to_string()).collect(),
        hidden: false,
        include_other_group: Vec::new(),
        policy_regex_filter: None,
        tolerance: None,
        no_alert: false,
        group_category: Some(GroupCategory::Service),
    }
}

fn default_proxy_groups() -> Vec<ProxyGroup> {
    const SUB: &[&str] = &["示例订阅"];
    vec![
        // Hidden region groups filtering subscription nodes by name.
        region("台灣節點", "(🇨🇳)|(台湾)|(Tai)|(TW)", SUB),
        region("香港節點", "(🇭🇰)|(港)|(Hong)|(HK)", SUB),
        region("美國節點", "(🇺🇸)|(美)|(旧金山)|(States)|(US)", SUB),
        region("日本節點", "(🇯🇵)|(日)|(Japan)|(JP)", SUB),
        region("新加坡節點", "(🇸🇬)|(坡)|(Singapore)|(SG)", SUB),
        region("韓國節點", "(🇰🇷)|(韩)|(Korea)|(KR)", SUB),
        // AI variants additionally exclude rate-annotated nodes.
        region("AI台灣", r"^(?=.*(🇨🇳|台湾|Tai|TW))(?!.*\[\d+\.\d\]$).*$", SUB),
        region("AI美國", r"^(?=.*(🇺🇸|美|旧金山|States|US))(?!.*\[\d+\.\d\]$).*$", SUB),
        region("AI日本", r"^(?=.*(🇯🇵|日|Japan|JP))(?!.*\[\d+\.\d\]$).*$", &[]),
        // Visible service groups referenced by rules.
        service("AI服務", &["AI台灣", "AI美國", "AI日本"]),
        service("影視服務", &["香港節點", "台灣節點", "日本節點", "美國節點", "新加坡節點"]),
        service("社交媒體", &["日本節點", "香港節點", "台灣節點", "新加坡節點", "美國節點"]),
        service("下載服務", &["香港節點", "日本節點", "台灣節點", "DIRECT"]),
        service("遊戲服務", &["日本節點", "香港節點", "台灣節點", "韓國節點", "DIRECT"]),
        service("學術服務", &["香港節點", "日本節點", "美國節點", "新加坡節點", "DIRECT"]),
        service(
            "保底",
            &["香港節點", "台灣節點", "日本節點", "新加坡節點", "美國節點", "韓國節點", "DIRECT"],
        ),
    ]
}

fn ruleset(path: &str, policy: &str, comment: &str) -> Rule {
    ruleset_url(&rule_url(path), policy, comment)
}

fn ruleset_url(url: &str, policy: &str, comment: &str) -> Rule {
    Rule {
        id: fresh_id(),
        kind: RuleType::RuleSet,
        value: url.to_string(),
        policy: policy.to_string(),
        comment: Some(comment.to_string()),
        no_resolve: false,
    }
}

fn default_rules() -> Vec<Rule> {
    vec![
        // Ad blocking and hijack protection.
        ruleset("Hijacking", "REJECT", "反劫持"),
        ruleset("Privacy", "REJECT", "隐私保护"),
        ruleset_url(
            "https://raw.githubusercontent.com/limbopro/Adblock4limbo/main/Adblock4limbo_surge.list",
            "REJECT",
            "广告拦截",
        ),
        ruleset("AdvertisingLite", "REJECT-TINYGIF", "广告拦截"),
        ruleset_url("https://anti-ad.net/surge.txt", "REJECT", "Anti-AD"),
        // Mainland traffic that must stay direct.
        ruleset_url(
            "https://raw.githubusercontent.com/NobyDa/Script/master/Surge/WeChat.list",
            "DIRECT",
            "微信",
        ),
        ruleset_url(
            "https://raw.githubusercontent.com/NobyDa/Script/master/Surge/Download.list",
            "DIRECT",
            "下载工具",
        ),
        ruleset_url(
            "https://github.com/VirgilClyne/GetSomeFries/raw/main/ruleset/ASN.China.list",
            "DIRECT",
            "中国ASN",
        ),
        // AI services.
        ruleset("OpenAI", "AI服務", "OpenAI"),
        ruleset("Claude", "AI服務", "Claude"),
        ruleset("Anthropic", "AI服務", "Claude API"),
        ruleset("Gemini", "AI服務", "Gemini"),
        ruleset("BardAI", "AI服務", "Bard"),
        ruleset("Copilot", "AI服務", "GitHub Copilot"),
        ruleset("Civitai", "AI服務", "AI模型社区"),
        // General proxied services.
        ruleset("Google", "保底", "Google"),
        ruleset("YouTube", "保底", "YouTube"),
        ruleset("GitHub", "下載服務", "GitHub"),
        ruleset("Bing", "AI服務", "Bing"),
        ruleset("Microsoft", "下載服務", "Microsoft"),
        ruleset("OneDrive", "下載服務", "OneDrive"),
        ruleset("iCloud", "下載服務", "iCloud"),
        ruleset("AppleMusic", "影視服務", "Apple Music"),
        ruleset("Siri", "AI服務", "Siri"),
        ruleset("TestFlight", "下載服務", "TestFlight"),
        ruleset("Apple", "保底", "Apple"),
        // Social media.
        ruleset("Telegram", "社交媒體", "Telegram"),
        ruleset("Twitter", "社交媒體", "Twitter/X"),
        ruleset("Instagram", "社交媒體", "Instagram"),
        ruleset("Facebook", "社交媒體", "Facebook"),
        ruleset("Reddit", "社交媒體", "Reddit"),
        ruleset("TikTok", "社交媒體", "TikTok"),
        ruleset("Threads", "社交媒體", "Threads"),
        ruleset("Discord", "社交媒體", "Discord"),
        ruleset("Whatsapp", "社交媒體", "WhatsApp"),
        ruleset("Slack", "社交媒體", "Slack"),
        ruleset("Line", "社交媒體", "Line"),
        // Streaming.
        ruleset("Netflix", "影視服務", "Netflix"),
        ruleset("Disney", "影視服務", "Disney+"),
        ruleset("Bahamut", "影視服務", "巴哈姆特"),
        ruleset("KKTV", "影視服務", "KKTV"),
        ruleset("Niconico", "影視服務", "Niconico"),
        // Academic.
        ruleset("Scholar", "學術服務", "学术网站"),
        // Everything else that still needs a tunnel.
        ruleset("Global", "保底", "海外漏网之鱼"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_ids(cfg: &SurgeConfig) -> HashSet<String> {
        let mut ids = HashSet::new();
        ids.extend(cfg.subscriptions.iter().map(|s| s.id.clone()));
        ids.extend(cfg.wire_guard_configs.iter().map(|w| w.id.clone()));
        ids.extend(cfg.proxy_groups.iter().map(|g| g.id.clone()));
        ids.extend(cfg.rules.iter().map(|r| r.id.clone()));
        ids
    }

    fn strip_ids(cfg: &mut SurgeConfig) {
        cfg.subscriptions.iter_mut().for_each(|s| s.id.clear());
        cfg.wire_guard_configs.iter_mut().for_each(|w| w.id.clear());
        cfg.proxy_groups.iter_mut().for_each(|g| g.id.clear());
        cfg.rules.iter_mut().for_each(|r| r.id.clear());
    }

    #[test]
    fn default_calls_share_no_ids_but_same_content() {
        let mut a = default_config();
        let mut b = default_config();
        let ids_a = all_ids(&a);
        let ids_b = all_ids(&b);
        assert_eq!(ids_a.len(), 1 + 16 + 44);
        assert!(ids_a.is_disjoint(&ids_b));
        strip_ids(&mut a);
        strip_ids(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn default_template_shape() {
        let cfg = default_config();
        assert_eq!(cfg.subscriptions.len(), 1);
        assert_eq!(cfg.subscriptions[0].hidden, Some(true));
        let regions: Vec<_> = cfg
            .proxy_groups
            .iter()
            .filter(|g| g.group_category == Some(GroupCategory::Region))
            .collect();
        let services: Vec<_> = cfg
            .proxy_groups
            .iter()
            .filter(|g| g.group_category == Some(GroupCategory::Service))
            .collect();
        assert_eq!(regions.len(), 9);
        assert_eq!(services.len(), 7);
        assert!(regions.iter().all(|g| g.hidden && g.kind == GroupKind::Smart));
        assert!(services.iter().all(|g| !g.hidden && g.kind == GroupKind::Select));
        // The AI-Japan variant ships with an empty include list.
        let ai_jp = cfg.proxy_groups.iter().find(|g| g.name == "AI日本").unwrap();
        assert!(ai_jp.include_other_group.is_empty());
        assert!(cfg.rules.iter().all(|r| r.kind == RuleType::RuleSet));
    }

    #[test]
    fn empty_template_shape() {
        let cfg = empty_config();
        assert!(cfg.subscriptions.is_empty());
        assert!(cfg.wire_guard_configs.is_empty());
        assert!(cfg.rules.is_empty());
        assert_eq!(cfg.proxy_groups.len(), 1);
        let fallback = &cfg.proxy_groups[0];
        assert_eq!(fallback.name, "保底");
        assert_eq!(fallback.kind, GroupKind::Select);
        assert_eq!(fallback.proxies, vec!["DIRECT".to_string()]);
        assert_eq!(fallback.group_category, Some(GroupCategory::Service));
    }
}
