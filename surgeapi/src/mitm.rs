use serde::{Deserialize, Serialize};

/// Interception settings. `enabled` gates UI affordances only and is never
/// emitted; the certificate fields are opaque strings and stay that way.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MitmConfig {
    pub enabled: bool,
    pub skip_server_cert_verify: bool,
    pub tcp_connection: bool,
    pub h2: bool,
    /// Comma-separated hostname patterns, e.g. `*.example.com`.
    pub hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_p12: Option<String>,
}

impl Default for MitmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            skip_server_cert_verify: true,
            tcp_connection: true,
            h2: true,
            hostname: String::new(),
            ca_passphrase: None,
            ca_p12: None,
        }
    }
}

#[test]
fn test_mitm_defaults() {
    let mitm: MitmConfig = serde_json::from_str("{}").unwrap();
    assert!(!mitm.enabled);
    assert!(mitm.skip_server_cert_verify);
    assert!(mitm.tcp_connection);
    assert!(mitm.h2);
    assert_eq!(mitm.hostname, "");
    assert_eq!(mitm.ca_passphrase, None);
}
