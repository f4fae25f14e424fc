use crate::general::GeneralSettings;
use crate::mitm::MitmConfig;
use crate::proxy_group::ProxyGroup;
use crate::rule::Rule;
use crate::subscription::Subscription;
use crate::wireguard::WireGuardConfig;
use serde::{Deserialize, Serialize};

/// The aggregate root: the unit of persistence and the sole input to the
/// renderer. `general` and `rules` must be present in serialized form; the
/// other collections default to empty so partial documents still load.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SurgeConfig {
    pub general: GeneralSettings,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub wire_guard_configs: Vec<WireGuardConfig>,
    #[serde(default)]
    pub proxy_groups: Vec<ProxyGroup>,
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub mitm: MitmConfig,
}

#[test]
fn test_required_fields() {
    // Only the general settings and the rule list are load-bearing.
    assert!(serde_json::from_str::<SurgeConfig>(r#"{"general":{},"rules":[]}"#).is_ok());
    assert!(serde_json::from_str::<SurgeConfig>(r#"{"rules":[]}"#).is_err());
    assert!(serde_json::from_str::<SurgeConfig>(r#"{"general":{}}"#).is_err());
    assert!(serde_json::from_str::<SurgeConfig>(r#"{"general":{},"rules":{}}"#).is_err());
}

#[test]
fn test_wire_field_names() {
    let cfg: SurgeConfig = serde_json::from_str(r#"{"general":{},"rules":[]}"#).unwrap();
    let text = serde_json::to_string(&cfg).unwrap();
    assert!(text.contains("\"wireGuardConfigs\""));
    assert!(text.contains("\"proxyGroups\""));
    assert!(text.contains("\"encryptedDnsServer\""));
}
