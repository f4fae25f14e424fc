use crate::id::fresh_id;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const DEFAULT_MTU: u32 = 1280;
pub const DEFAULT_KEEPALIVE: u16 = 25;
pub const DEFAULT_ALLOWED_IPS: &str = "0.0.0.0/0, ::/0";
pub const DEFAULT_TEST_URL: &str = "http://cp.cloudflare.com/generate_204";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpVersion {
    #[serde(rename = "v4-only")]
    V4Only,
    #[serde(rename = "v6-only")]
    V6Only,
    #[serde(rename = "auto")]
    Auto,
}

impl Display for IpVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            IpVersion::V4Only => "v4-only",
            IpVersion::V6Only => "v6-only",
            IpVersion::Auto => "auto",
        })
    }
}

/// One WireGuard peer, rendered both as a `[Proxy]` entry and as its own
/// `[WireGuard <name>]` section. Key material is carried as opaque strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireGuardConfig {
    pub id: String,
    pub name: String,
    pub private_key: String,
    /// Local interface address, without prefix length.
    pub self_ip: String,
    #[serde(default = "default_mtu")]
    pub mtu: u32,
    pub public_key: String,
    #[serde(default = "default_allowed_ips")]
    pub allowed_ips: String,
    /// Peer endpoint as `host:port`.
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preshared_key: Option<String>,
    #[serde(default = "default_keepalive")]
    pub keepalive: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_version: Option<IpVersion>,
    #[serde(default = "default_test_url")]
    pub test_url: String,
}

impl WireGuardConfig {
    /// An unnamed peer with the documented defaults, ready to be filled by a
    /// form or a pasted peer-configuration blob.
    pub fn draft() -> Self {
        Self {
            id: fresh_id(),
            name: String::new(),
            private_key: String::new(),
            self_ip: String::new(),
            mtu: DEFAULT_MTU,
            public_key: String::new(),
            allowed_ips: DEFAULT_ALLOWED_IPS.to_string(),
            endpoint: String::new(),
            preshared_key: None,
            keepalive: DEFAULT_KEEPALIVE,
            ip_version: None,
            test_url: DEFAULT_TEST_URL.to_string(),
        }
    }
}

fn default_mtu() -> u32 {
    DEFAULT_MTU
}

fn default_allowed_ips() -> String {
    DEFAULT_ALLOWED_IPS.to_string()
}

fn default_keepalive() -> u16 {
    DEFAULT_KEEPALIVE
}

fn default_test_url() -> String {
    DEFAULT_TEST_URL.to_string()
}

#[test]
fn test_wireguard_defaults_fill_missing_fields() {
    let raw = r#"{
        "id": "abc",
        "name": "jp-1",
        "privateKey": "pk",
        "selfIp": "10.0.0.2",
        "publicKey": "pub",
        "endpoint": "jp.example.com:51820"
    }"#;
    let peer: WireGuardConfig = serde_json::from_str(raw).unwrap();
    assert_eq!(peer.mtu, 1280);
    assert_eq!(peer.keepalive, 25);
    assert_eq!(peer.allowed_ips, "0.0.0.0/0, ::/0");
    assert_eq!(peer.test_url, "http://cp.cloudflare.com/generate_204");
    assert_eq!(peer.ip_version, None);
}

#[test]
fn test_ip_version_wire_format() {
    assert_eq!(serde_json::to_string(&IpVersion::V4Only).unwrap(), "\"v4-only\"");
    let v: IpVersion = serde_json::from_str("\"auto\"").unwrap();
    assert_eq!(v, IpVersion::Auto);
}
