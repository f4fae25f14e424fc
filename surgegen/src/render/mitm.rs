use crate::render::non_empty;
use surgeapi::MitmConfig;

pub(crate) fn mitm_section(mitm: &MitmConfig) -> String {
    let mut lines = vec![
        "[MITM]".to_string(),
        format!("skip-server-cert-verify = {}", mitm.skip_server_cert_verify),
        format!("tcp-connection = {}", mitm.tcp_connection),
        format!("h2 = {}", mitm.h2),
        format!("hostname = {}", mitm.hostname),
    ];
    if let Some(passphrase) = non_empty(&mitm.ca_passphrase) {
        lines.push(format!("ca-passphrase = {}", passphrase));
    }
    if let Some(p12) = non_empty(&mitm.ca_p12) {
        lines.push(format!("ca-p12 = {}", p12));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_lines_are_always_present() {
        let text = mitm_section(&MitmConfig::default());
        assert_eq!(
            text,
            "[MITM]\nskip-server-cert-verify = true\ntcp-connection = true\nh2 = true\nhostname = "
        );
    }

    #[test]
    fn certificate_lines_require_content() {
        let mut mitm = MitmConfig {
            hostname: "*.example.com".to_string(),
            ca_passphrase: Some("secret".to_string()),
            ca_p12: Some(String::new()),
            ..Default::default()
        };
        let text = mitm_section(&mitm);
        assert!(text.contains("hostname = *.example.com"));
        assert!(text.contains("ca-passphrase = secret"));
        assert!(!text.contains("ca-p12"));

        mitm.ca_p12 = Some("QkFTRTY0".to_string());
        assert!(mitm_section(&mitm).ends_with("ca-p12 = QkFTRTY0"));
    }
}
