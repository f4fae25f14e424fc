use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GroupKind {
    Select,
    Smart,
    UrlTest,
    Fallback,
    LoadBalance,
}

impl Display for GroupKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GroupKind::Select => "select",
            GroupKind::Smart => "smart",
            GroupKind::UrlTest => "url-test",
            GroupKind::Fallback => "fallback",
            GroupKind::LoadBalance => "load-balance",
        })
    }
}

impl FromStr for GroupKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "select" => GroupKind::Select,
            "smart" => GroupKind::Smart,
            "url-test" => GroupKind::UrlTest,
            "fallback" => GroupKind::Fallback,
            "load-balance" => GroupKind::LoadBalance,
            _ => return Err(format!("unknown group type: {}", s)),
        })
    }
}

/// Tag driving which editing affordances and generation fields apply.
/// Region groups are conventionally hidden and pull nodes in via
/// include-other-group plus a name filter; service groups are visible and
/// list region groups (or DIRECT/REJECT) as members.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroupCategory {
    Subscription,
    Region,
    Service,
}

impl Display for GroupCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GroupCategory::Subscription => "subscription",
            GroupCategory::Region => "region",
            GroupCategory::Service => "service",
        })
    }
}

impl FromStr for GroupCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "subscription" => GroupCategory::Subscription,
            "region" => GroupCategory::Region,
            "service" => GroupCategory::Service,
            _ => return Err(format!("unknown group category: {}", s)),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProxyGroup {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GroupKind,
    #[serde(default)]
    pub proxies: Vec<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_other_group: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_regex_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<u32>,
    #[serde(default)]
    pub no_alert: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_category: Option<GroupCategory>,
}

#[test]
fn test_group_wire_format() {
    assert_eq!(serde_json::to_string(&GroupKind::UrlTest).unwrap(), "\"url-test\"");
    assert_eq!(serde_json::to_string(&GroupCategory::Region).unwrap(), "\"region\"");
    let raw = r#"{"id":"x","name":"HK","type":"smart","proxies":[]}"#;
    let group: ProxyGroup = serde_json::from_str(raw).unwrap();
    assert_eq!(group.kind, GroupKind::Smart);
    assert!(!group.hidden);
    assert!(group.include_other_group.is_empty());
    assert_eq!(group.group_category, None);
}
