use surgeapi::GeneralSettings;

pub(crate) fn general_section(settings: &GeneralSettings) -> String {
    format!(
        "[General]

# --- 一般設置 ---
wifi-assist = {wifi_assist}
all-hybrid = {all_hybrid}
udp-priority = {udp_priority}
internet-test-url = http://cp.cloudflare.com/generate_204
proxy-test-url = http://www.google.com/generate_204
test-timeout = 5
geoip-maxmind-url = https://raw.githubusercontent.com/NobyDa/geoip/release/Private-GeoIP-CN.mmdb
ipv6 = {ipv6}

# --- Wi-Fi 服務設置 ---
allow-wifi-access = {allow_wifi_access}
wifi-access-http-port = {wifi_access_http_port}
wifi-access-socks5-port = {wifi_access_socks5_port}
http-listen = 0.0.0.0
socks5-listen = 0.0.0.0
allow-hotspot-access = {allow_hotspot_access}

# --- 兼容性設置 ---
compatibility-mode = 0
skip-proxy = 127.0.0.1, 192.168.0.0/16, 10.0.0.0/8, 172.16.0.0/12, 100.64.0.0/10, 17.0.0.0/8, localhost, *.local
exclude-simple-hostnames = true

# --- DNS 設置 ---
read-etc-hosts = true
doh-skip-cert-verification = false
dns-server = {dns_servers}
encrypted-dns-server = {encrypted_dns_server}
use-local-host-item-for-proxy = false
encrypted-dns-follow-outbound-mode = true
include-all-networks = false
include-local-networks = false
loglevel = {loglevel}

# --- 高級設置 ---
show-error-page-for-reject = true
always-real-ip = link-ip.nextdns.io, *.msftconnecttest.com, *.msftncsi.com, *.srv.nintendo.net, *.stun.playstation.net, xbox.*.microsoft.com, *.xboxlive.com, *.logon.battlenet.com.cn, *.logon.battle.net, stun.l.google.com
hijack-dns = 8.8.8.8:53, 8.8.4.4:53
force-http-engine-hosts = *.ott.cibntv.net
use-default-policy-if-wifi-not-primary = false
udp-policy-not-supported-behaviour = REJECT
ipv6-vif = auto",
        wifi_assist = settings.wifi_assist,
        all_hybrid = settings.all_hybrid,
        udp_priority = settings.udp_priority,
        ipv6 = settings.ipv6,
        allow_wifi_access = settings.allow_wifi_access,
        wifi_access_http_port = settings.wifi_access_http_port,
        wifi_access_socks5_port = settings.wifi_access_socks5_port,
        allow_hotspot_access = settings.allow_hotspot_access,
        dns_servers = settings.dns_servers,
        encrypted_dns_server = settings.encrypted_dns_server,
        loglevel = settings.loglevel,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_render() {
        let text = general_section(&GeneralSettings::default());
        assert!(text.starts_with("[General]\n\n# --- 一般設置 ---\nwifi-assist = true\n"));
        assert!(text.contains("wifi-access-http-port = 6152\n"));
        assert!(text.contains("wifi-access-socks5-port = 6153\n"));
        assert!(text.contains("encrypted-dns-server = https://dns.alidns.com/dns-query\n"));
        assert!(text.contains("\nloglevel = notify\n"));
        assert!(text.ends_with("ipv6-vif = auto"));
    }

    #[test]
    fn toggles_flow_through() {
        let settings = GeneralSettings {
            ipv6: false,
            allow_wifi_access: false,
            wifi_access_http_port: 8888,
            ..Default::default()
        };
        let text = general_section(&settings);
        assert!(text.contains("ipv6 = false\n"));
        assert!(text.contains("allow-wifi-access = false\n"));
        assert!(text.contains("wifi-access-http-port = 8888\n"));
    }
}
