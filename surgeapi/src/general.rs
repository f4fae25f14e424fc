use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const DEFAULT_HTTP_PORT: u16 = 6152;
pub const DEFAULT_SOCKS5_PORT: u16 = 6153;
pub const DEFAULT_DNS_SERVERS: &str =
    "1.1.1.1, 114.114.114.114, 2606:4700:4700::1111, 2400:3200:baba::1, system";
pub const DEFAULT_DOH_SERVER: &str = "https://dns.alidns.com/dns-query";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Verbose,
    Info,
    Notify,
    Warning,
    Error,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LogLevel::Verbose => "verbose",
            LogLevel::Info => "info",
            LogLevel::Notify => "notify",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        })
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "verbose" => LogLevel::Verbose,
            "info" => LogLevel::Info,
            "notify" => LogLevel::Notify,
            "warning" => LogLevel::Warning,
            "error" => LogLevel::Error,
            _ => return Err(format!("unknown log level: {}", s)),
        })
    }
}

/// Scalar network, DNS and logging options of the `[General]` section.
/// Missing fields are filled from the defaults at deserialization time, so
/// downstream consumers always see fully populated records.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralSettings {
    pub wifi_assist: bool,
    pub all_hybrid: bool,
    pub udp_priority: bool,
    pub ipv6: bool,
    pub allow_wifi_access: bool,
    #[serde(deserialize_with = "de_http_port")]
    pub wifi_access_http_port: u16,
    #[serde(deserialize_with = "de_socks5_port")]
    pub wifi_access_socks5_port: u16,
    pub allow_hotspot_access: bool,
    pub dns_servers: String,
    pub encrypted_dns_server: String,
    pub loglevel: LogLevel,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            wifi_assist: true,
            all_hybrid: false,
            udp_priority: true,
            ipv6: true,
            allow_wifi_access: true,
            wifi_access_http_port: DEFAULT_HTTP_PORT,
            wifi_access_socks5_port: DEFAULT_SOCKS5_PORT,
            allow_hotspot_access: true,
            dns_servers: DEFAULT_DNS_SERVERS.to_string(),
            encrypted_dns_server: DEFAULT_DOH_SERVER.to_string(),
            loglevel: LogLevel::Notify,
        }
    }
}

fn port_or<'de, D: Deserializer<'de>>(deserializer: D, fallback: u16) -> Result<u16, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybePort {
        Num(u16),
        Other(serde::de::IgnoredAny),
    }
    Ok(match MaybePort::deserialize(deserializer)? {
        MaybePort::Num(p) => p,
        MaybePort::Other(_) => fallback,
    })
}

fn de_http_port<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    port_or(deserializer, DEFAULT_HTTP_PORT)
}

fn de_socks5_port<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    port_or(deserializer, DEFAULT_SOCKS5_PORT)
}

#[test]
fn test_general_defaults() {
    let settings = GeneralSettings::default();
    assert!(settings.wifi_assist);
    assert!(!settings.all_hybrid);
    assert_eq!(settings.wifi_access_http_port, 6152);
    assert_eq!(settings.wifi_access_socks5_port, 6153);
    assert_eq!(settings.loglevel, LogLevel::Notify);
}

#[test]
fn test_general_port_fallback() {
    let full: GeneralSettings =
        serde_json::from_str(r#"{"wifiAccessHttpPort": 7890}"#).unwrap();
    assert_eq!(full.wifi_access_http_port, 7890);
    let bad: GeneralSettings =
        serde_json::from_str(r#"{"wifiAccessHttpPort": "garbage", "wifiAccessSocks5Port": -1}"#)
            .unwrap();
    assert_eq!(bad.wifi_access_http_port, 6152);
    assert_eq!(bad.wifi_access_socks5_port, 6153);
}

#[test]
fn test_loglevel_wire_format() {
    assert_eq!(serde_json::to_string(&LogLevel::Notify).unwrap(), "\"notify\"");
    assert_eq!(LogLevel::Warning.to_string(), "warning");
}
