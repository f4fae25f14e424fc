use serde::{Deserialize, Serialize};

/// A remote node-list source rendered as a `policy-path` smart group.
///
/// `hidden` is deliberately tri-state: the group emits `no-alert=1` unless
/// the flag is literally `false`, so an unset flag behaves like hidden.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Refresh period in hours; rendered as seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}
