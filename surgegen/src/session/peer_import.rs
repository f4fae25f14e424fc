use regex::Regex;
use surgeapi::{WireGuardConfig, DEFAULT_ALLOWED_IPS};

fn capture(text: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).unwrap();
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Fills a peer draft from pasted wg-quick text. All-or-nothing on the four
/// required keys (PrivateKey, Address, PublicKey, Endpoint); the preshared
/// key and allowed IPs are taken when present. Returns whether anything was
/// applied.
pub fn apply_peer_text(draft: &mut WireGuardConfig, text: &str) -> bool {
    let private_key = capture(text, r"PrivateKey\s*=\s*(.+)");
    let address = capture(text, r"Address\s*=\s*([^\s,/]+)");
    let public_key = capture(text, r"PublicKey\s*=\s*(.+)");
    let endpoint = capture(text, r"Endpoint\s*=\s*(.+)");
    let preshared_key = capture(text, r"PresharedKey\s*=\s*(.+)");
    let allowed_ips = capture(text, r"AllowedIPs\s*=\s*(.+)");

    let (Some(private_key), Some(address), Some(public_key), Some(endpoint)) =
        (private_key, address, public_key, endpoint)
    else {
        return false;
    };
    draft.private_key = private_key;
    draft.self_ip = address;
    draft.public_key = public_key;
    draft.endpoint = endpoint;
    draft.preshared_key = preshared_key;
    draft.allowed_ips = allowed_ips.unwrap_or_else(|| DEFAULT_ALLOWED_IPS.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_paste_fills_draft() {
        let text = "[Interface]\n\
                    PrivateKey = cHJpdmF0ZQ==\n\
                    Address = 10.2.0.2/32, fd7d:76ee::2/128\n\
                    DNS = 10.2.0.1\n\
                    \n\
                    [Peer]\n\
                    PublicKey = cHVibGlj\n\
                    PresharedKey = cHNr\n\
                    AllowedIPs = 0.0.0.0/0\n\
                    Endpoint = jp1.example.com:51820\n";
        let mut draft = WireGuardConfig::draft();
        assert!(apply_peer_text(&mut draft, text));
        assert_eq!(draft.private_key, "cHJpdmF0ZQ==");
        assert_eq!(draft.self_ip, "10.2.0.2");
        assert_eq!(draft.public_key, "cHVibGlj");
        assert_eq!(draft.endpoint, "jp1.example.com:51820");
        assert_eq!(draft.preshared_key.as_deref(), Some("cHNr"));
        assert_eq!(draft.allowed_ips, "0.0.0.0/0");
    }

    #[test]
    fn missing_required_key_leaves_draft_untouched() {
        let text = "PrivateKey = a\nAddress = 10.0.0.2\nEndpoint = host:51820";
        let mut draft = WireGuardConfig::draft();
        draft.name = "jp".to_string();
        let before = draft.clone();
        assert!(!apply_peer_text(&mut draft, text));
        assert_eq!(draft, before);
    }

    #[test]
    fn optional_keys_fall_back() {
        let text = "PrivateKey = a\nAddress = 10.0.0.2\nPublicKey = b\nEndpoint = host:51820";
        let mut draft = WireGuardConfig::draft();
        draft.preshared_key = Some("stale".to_string());
        assert!(apply_peer_text(&mut draft, text));
        assert_eq!(draft.allowed_ips, DEFAULT_ALLOWED_IPS);
        assert_eq!(draft.preshared_key, None);
    }
}
