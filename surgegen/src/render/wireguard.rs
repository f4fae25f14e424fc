use crate::render::non_empty;
use surgeapi::WireGuardConfig;

fn peer_clause(config: &WireGuardConfig) -> String {
    let mut parts = vec![
        format!("public-key = {}", config.public_key),
        format!("allowed-ips = \"{}\"", config.allowed_ips),
        format!("endpoint = {}", config.endpoint),
    ];
    if let Some(psk) = non_empty(&config.preshared_key) {
        parts.push(format!("preshared-key = {}", psk));
    }
    parts.push(format!("keepalive = {}", config.keepalive));
    parts.join(", ")
}

pub(crate) fn wireguard_sections(configs: &[WireGuardConfig]) -> String {
    let sections: Vec<String> = configs
        .iter()
        .map(|config| {
            format!(
                "[WireGuard {}]\nprivate-key = {}\nself-ip = {}\nmtu = {}\npeer = ({})",
                config.name,
                config.private_key,
                config.self_ip,
                config.mtu,
                peer_clause(config)
            )
        })
        .collect();
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer(name: &str) -> WireGuardConfig {
        let mut config = WireGuardConfig::draft();
        config.name = name.to_string();
        config.private_key = "PRIV".to_string();
        config.self_ip = "10.0.0.2".to_string();
        config.public_key = "PUB".to_string();
        config.endpoint = "vpn.example.com:51820".to_string();
        config
    }

    #[test]
    fn section_carries_defaults() {
        let text = wireguard_sections(&[peer("jp")]);
        assert_eq!(
            text,
            "[WireGuard jp]\n\
             private-key = PRIV\n\
             self-ip = 10.0.0.2\n\
             mtu = 1280\n\
             peer = (public-key = PUB, allowed-ips = \"0.0.0.0/0, ::/0\", \
             endpoint = vpn.example.com:51820, keepalive = 25)"
        );
    }

    #[test]
    fn preshared_key_sits_before_keepalive() {
        let mut config = peer("us");
        config.preshared_key = Some("PSK".to_string());
        let text = wireguard_sections(&[config]);
        assert!(text.contains("endpoint = vpn.example.com:51820, preshared-key = PSK, keepalive = 25)"));
    }

    #[test]
    fn sections_are_blank_line_separated() {
        let text = wireguard_sections(&[peer("a"), peer("b")]);
        assert!(text.contains("keepalive = 25)\n\n[WireGuard b]"));
    }
}
