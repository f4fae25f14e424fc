use crate::cli::{GeneralOptions, GroupAddOptions, MitmOptions};
use crate::config::{export_json, import_json};
use crate::render::generate;
use crate::session::{apply_peer_text, ConfigSession};
use anyhow::{anyhow, Result};
use colored::Colorize;
use std::collections::HashSet;
use std::path::PathBuf;
use surgeapi::catalog::{
    category_of, full_catalog, rule_path, rule_url, RuleCategory, RuleCategoryInfo,
    ALL_RULE_NAMES, POPULAR_RULES, THIRD_PARTY_SOURCES,
};
use surgeapi::{
    default_config, fresh_id, GroupCategory, GroupKind, ProxyGroup, Rule, RuleType, Subscription,
    WireGuardConfig,
};
use tabular::{Row, Table};

pub(crate) struct Actions {
    session: ConfigSession,
}

impl Actions {
    pub fn new(session: ConfigSession) -> Self {
        Self { session }
    }

    pub fn init(&mut self) -> Result<()> {
        let path = self.session.profile_path().to_path_buf();
        if path.try_exists().is_ok_and(|x| x) {
            println!("Profile already exists at {}", path.to_string_lossy());
        } else {
            self.session.replace(default_config());
            println!("Successfully created profile at {}", path.to_string_lossy());
        }
        Ok(())
    }

    pub fn generate(&self, output: Option<PathBuf>) -> Result<()> {
        let text = generate(self.session.config());
        match output {
            None => println!("{}", text),
            Some(path) => {
                std::fs::write(&path, &text)
                    .map_err(|e| anyhow!("Failed to write {}: {}", path.to_string_lossy(), e))?;
                println!("Successfully written to {}", path.to_string_lossy());
            }
        }
        Ok(())
    }

    pub fn show(&self) -> Result<()> {
        let config = self.session.config();
        println!("Profile: {}", self.session.profile_path().to_string_lossy());
        println!(
            "{}: {}",
            "Subscriptions".bold().green(),
            config.subscriptions.len()
        );
        println!(
            "{}: {} ({} visible)",
            "Proxy groups".bold().green(),
            config.proxy_groups.len(),
            config.proxy_groups.iter().filter(|g| !g.hidden).count()
        );
        println!("{}: {}", "Rules".bold().green(), config.rules.len());
        println!(
            "{}: {}",
            "WireGuard peers".bold().green(),
            config.wire_guard_configs.len()
        );
        println!("{}: {}", "DNS".bold().green(), config.general.dns_servers);
        println!(
            "{}: {}",
            "DoH".bold().green(),
            config.general.encrypted_dns_server
        );
        println!("{}: {}", "Log level".bold().green(), config.general.loglevel);
        println!(
            "{}: {}",
            "MITM".bold().green(),
            if config.mitm.enabled { "on" } else { "off" }
        );
        Ok(())
    }

    pub fn export(&self, output: PathBuf) -> Result<()> {
        let text = export_json(self.session.config())
            .map_err(|e| anyhow!("Failed to serialize configuration: {}", e))?;
        std::fs::write(&output, text)
            .map_err(|e| anyhow!("Failed to write {}: {}", output.to_string_lossy(), e))?;
        println!("Successfully exported to {}", output.to_string_lossy());
        Ok(())
    }

    pub fn import(&mut self, file: PathBuf) -> Result<()> {
        let text = std::fs::read_to_string(&file)
            .map_err(|e| anyhow!("Failed to read {}: {}", file.to_string_lossy(), e))?;
        match import_json(&text) {
            Some(config) => {
                self.session.replace(config);
                println!("{}", "Success".green());
                Ok(())
            }
            None => {
                println!("{}", "Failed".red());
                Err(anyhow!(
                    "{} is not a configuration export",
                    file.to_string_lossy()
                ))
            }
        }
    }

    pub fn reset(&mut self, empty: bool) -> Result<()> {
        self.session.reset(empty);
        println!(
            "{}: restored the {} template",
            "Success".green(),
            if empty { "empty" } else { "default" }
        );
        Ok(())
    }

    pub fn sub_add(
        &mut self,
        url: String,
        name: Option<String>,
        filter: Option<String>,
        interval: u32,
        visible: bool,
    ) -> Result<()> {
        let sub = Subscription {
            id: fresh_id(),
            name: name.unwrap_or_default(),
            url,
            filter,
            update_interval: Some(interval),
            hidden: Some(!visible),
        };
        match self.session.upsert_subscription(sub) {
            Some(name) => {
                println!("{}: saved as {}", "Success".green(), name);
                Ok(())
            }
            None => {
                println!("{}", "Failed".red());
                Err(anyhow!("A subscription needs a URL"))
            }
        }
    }

    pub fn sub_list(&self) -> Result<()> {
        let mut table = Table::new("{:<} {:<} {:<} {:<} {:<}");
        table.add_row(
            Row::new()
                .with_cell("Id")
                .with_cell("Name")
                .with_cell("Interval")
                .with_cell("Hidden")
                .with_cell("Url"),
        );
        for sub in &self.session.config().subscriptions {
            table.add_row(
                Row::new()
                    .with_cell(&sub.id)
                    .with_cell(&sub.name)
                    .with_cell(
                        sub.update_interval
                            .map_or("N/A".to_string(), |h| format!("{}h", h)),
                    )
                    .with_cell(tri_state(sub.hidden))
                    .with_cell(&sub.url),
            );
        }
        println!("{}", table);
        Ok(())
    }

    pub fn sub_rm(&mut self, id: &str) -> Result<()> {
        if self.session.remove_subscription(id) {
            println!("{}", "Success".green());
            Ok(())
        } else {
            println!("{}", "Failed".red());
            Err(anyhow!("No subscription with id {}", id))
        }
    }

    pub fn group_add(&mut self, opt: GroupAddOptions) -> Result<()> {
        let kind = opt.kind.parse::<GroupKind>().map_err(|e| anyhow!(e))?;
        let category = opt
            .category
            .as_deref()
            .map(str::parse::<GroupCategory>)
            .transpose()
            .map_err(|e| anyhow!(e))?;
        let group = ProxyGroup {
            id: fresh_id(),
            name: opt.name,
            kind,
            proxies: opt.proxies,
            hidden: opt.hidden,
            include_other_group: opt.include,
            policy_regex_filter: opt.filter,
            tolerance: opt.tolerance,
            no_alert: false,
            group_category: category,
        };
        if self.session.upsert_group(group) {
            println!("{}", "Success".green());
            Ok(())
        } else {
            println!("{}", "Failed".red());
            Err(anyhow!("A group needs a name"))
        }
    }

    pub fn group_list(&self) -> Result<()> {
        let mut table = Table::new("{:<} {:<} {:<} {:<} {:<} {:<}");
        table.add_row(
            Row::new()
                .with_cell("Id")
                .with_cell("Name")
                .with_cell("Type")
                .with_cell("Category")
                .with_cell("Hidden")
                .with_cell("Members"),
        );
        for group in &self.session.config().proxy_groups {
            let members: Vec<&str> = group
                .include_other_group
                .iter()
                .chain(group.proxies.iter())
                .map(String::as_str)
                .collect();
            table.add_row(
                Row::new()
                    .with_cell(&group.id)
                    .with_cell(&group.name)
                    .with_cell(group.kind)
                    .with_cell(
                        group
                            .group_category
                            .map_or("N/A".to_string(), |c| c.to_string()),
                    )
                    .with_cell(if group.hidden { "yes" } else { "no" })
                    .with_cell(members.join(", ")),
            );
        }
        println!("{}", table);
        Ok(())
    }

    pub fn group_rm(&mut self, id: &str) -> Result<()> {
        if self.session.remove_group(id) {
            println!("{}", "Success".green());
            Ok(())
        } else {
            println!("{}", "Failed".red());
            Err(anyhow!("No group with id {}", id))
        }
    }

    pub fn rule_add(
        &mut self,
        value: String,
        kind: &str,
        policy: String,
        comment: Option<String>,
        no_resolve: bool,
    ) -> Result<()> {
        let kind = kind.parse::<RuleType>().map_err(|e| anyhow!(e))?;
        let rule = Rule {
            id: fresh_id(),
            kind,
            value,
            policy,
            comment,
            no_resolve,
        };
        if self.session.append_rule(rule) {
            println!("{}", "Success".green());
            Ok(())
        } else {
            println!("{}", "Failed".red());
            Err(anyhow!("A rule needs a value"))
        }
    }

    pub fn rule_list(&self) -> Result<()> {
        let mut table = Table::new("{:<} {:<} {:<} {:<} {:<}");
        table.add_row(
            Row::new()
                .with_cell("Id")
                .with_cell("Type")
                .with_cell("Value")
                .with_cell("Policy")
                .with_cell("Comment"),
        );
        for rule in &self.session.config().rules {
            table.add_row(
                Row::new()
                    .with_cell(&rule.id)
                    .with_cell(rule.kind)
                    .with_cell(&rule.value)
                    .with_cell(&rule.policy)
                    .with_cell(rule.comment.as_deref().unwrap_or("")),
            );
        }
        println!("{}", table);
        Ok(())
    }

    pub fn rule_rm(&mut self, id: &str) -> Result<()> {
        if self.session.remove_rule(id) {
            println!("{}", "Success".green());
            Ok(())
        } else {
            println!("{}", "Failed".red());
            Err(anyhow!("No rule with id {}", id))
        }
    }

    pub fn rule_set_policy(&mut self, id: &str, policy: &str) -> Result<()> {
        if self.session.set_rule_policy(id, policy) {
            println!("{}", "Success".green());
            Ok(())
        } else {
            println!("{}", "Failed".red());
            Err(anyhow!("No rule with id {}", id))
        }
    }

    pub fn rule_policies(&self) -> Result<()> {
        self.session
            .available_policies()
            .into_iter()
            .for_each(|p| println!("{}", p));
        Ok(())
    }

    pub fn catalog_list(
        &self,
        all: bool,
        category: Option<String>,
        query: Option<String>,
    ) -> Result<()> {
        let category = category
            .as_deref()
            .map(str::parse::<RuleCategory>)
            .transpose()
            .map_err(|e| anyhow!(e))?;
        let entries: Vec<RuleCategoryInfo> = if all || query.is_some() {
            full_catalog()
        } else {
            POPULAR_RULES.to_vec()
        };
        let added = self.added_catalog_paths();
        let query = query.map(|q| q.to_lowercase());
        let mut table = Table::new("{:<} {:<} {:<} {:<} {:<}");
        table.add_row(
            Row::new()
                .with_cell("Name")
                .with_cell("Category")
                .with_cell("Policy")
                .with_cell("Added")
                .with_cell("Description"),
        );
        for entry in entries {
            if let Some(c) = category {
                if entry.category != c {
                    continue;
                }
            }
            if let Some(q) = &query {
                let in_name = entry.name.to_lowercase().contains(q.as_str());
                let in_description = entry
                    .description
                    .is_some_and(|d| d.to_lowercase().contains(q.as_str()));
                if !in_name && !in_description {
                    continue;
                }
            }
            table.add_row(
                Row::new()
                    .with_cell(entry.name)
                    .with_cell(entry.category.label())
                    .with_cell(entry.category.default_policy())
                    .with_cell(if added.contains(entry.path) { "*" } else { "" })
                    .with_cell(entry.description.unwrap_or("")),
            );
        }
        println!("{}", table);
        Ok(())
    }

    pub fn catalog_sources(&self) -> Result<()> {
        let mut table = Table::new("{:<} {:<} {:<} {:<}");
        table.add_row(
            Row::new()
                .with_cell("Name")
                .with_cell("Category")
                .with_cell("Description")
                .with_cell("Url"),
        );
        for source in THIRD_PARTY_SOURCES {
            table.add_row(
                Row::new()
                    .with_cell(source.name)
                    .with_cell(source.category.label())
                    .with_cell(source.description)
                    .with_cell(source.url),
            );
        }
        println!("{}", table);
        Ok(())
    }

    pub fn catalog_add(&mut self, name: &str, policy: Option<String>) -> Result<()> {
        let Some(canonical) = ALL_RULE_NAMES
            .iter()
            .find(|n| n.eq_ignore_ascii_case(name))
            .copied()
        else {
            println!("{}", "Failed".red());
            return Err(anyhow!("{} is not in the catalog", name));
        };
        if self.added_catalog_paths().contains(canonical) {
            println!("{}", format!("{} is already in the rule list", canonical).yellow());
            return Ok(());
        }
        let description = POPULAR_RULES
            .iter()
            .find(|info| info.name == canonical)
            .and_then(|info| info.description);
        let rule = Rule {
            id: fresh_id(),
            kind: RuleType::RuleSet,
            value: rule_url(canonical),
            policy: policy.unwrap_or_else(|| category_of(canonical).default_policy().to_string()),
            comment: Some(description.unwrap_or(canonical).to_string()),
            no_resolve: false,
        };
        if self.session.append_rule(rule) {
            println!("{}", "Success".green());
            Ok(())
        } else {
            println!("{}", "Failed".red());
            Err(anyhow!("Failed to append rule"))
        }
    }

    pub fn wg_import(
        &mut self,
        file: PathBuf,
        name: Option<String>,
        id: Option<String>,
    ) -> Result<()> {
        let text = std::fs::read_to_string(&file)
            .map_err(|e| anyhow!("Failed to read {}: {}", file.to_string_lossy(), e))?;
        let mut peer = match &id {
            Some(id) => self
                .session
                .config()
                .wire_guard_configs
                .iter()
                .find(|w| w.id == *id)
                .cloned()
                .ok_or_else(|| anyhow!("No peer with id {}", id))?,
            None => WireGuardConfig::draft(),
        };
        if let Some(name) = name {
            peer.name = name;
        }
        if !apply_peer_text(&mut peer, &text) {
            println!("{}", "Failed".red());
            return Err(anyhow!(
                "PrivateKey, Address, PublicKey and Endpoint are all required"
            ));
        }
        let label = peer.name.clone();
        if self.session.upsert_wireguard(peer) {
            println!("{}: saved peer {}", "Success".green(), label);
            Ok(())
        } else {
            println!("{}", "Failed".red());
            Err(anyhow!("A new peer needs a name; pass --name"))
        }
    }

    pub fn wg_list(&self) -> Result<()> {
        let mut table = Table::new("{:<} {:<} {:<} {:<}");
        table.add_row(
            Row::new()
                .with_cell("Id")
                .with_cell("Name")
                .with_cell("Endpoint")
                .with_cell("Address"),
        );
        for peer in &self.session.config().wire_guard_configs {
            table.add_row(
                Row::new()
                    .with_cell(&peer.id)
                    .with_cell(&peer.name)
                    .with_cell(&peer.endpoint)
                    .with_cell(&peer.self_ip),
            );
        }
        println!("{}", table);
        Ok(())
    }

    pub fn wg_rm(&mut self, id: &str) -> Result<()> {
        if self.session.remove_wireguard(id) {
            println!("{}", "Success".green());
            Ok(())
        } else {
            println!("{}", "Failed".red());
            Err(anyhow!("No peer with id {}", id))
        }
    }

    pub fn general(&mut self, opt: GeneralOptions) -> Result<()> {
        let mut general = self.session.config().general.clone();
        let mut changed = false;
        let mut set_bool = |dst: &mut bool, src: Option<bool>| {
            if let Some(v) = src {
                *dst = v;
                changed = true;
            }
        };
        set_bool(&mut general.wifi_assist, opt.wifi_assist);
        set_bool(&mut general.all_hybrid, opt.all_hybrid);
        set_bool(&mut general.udp_priority, opt.udp_priority);
        set_bool(&mut general.ipv6, opt.ipv6);
        set_bool(&mut general.allow_wifi_access, opt.wifi_access);
        set_bool(&mut general.allow_hotspot_access, opt.hotspot);
        if let Some(port) = opt.http_port {
            general.wifi_access_http_port = port;
            changed = true;
        }
        if let Some(port) = opt.socks5_port {
            general.wifi_access_socks5_port = port;
            changed = true;
        }
        if let Some(dns) = opt.dns {
            general.dns_servers = dns;
            changed = true;
        }
        if let Some(doh) = opt.doh {
            general.encrypted_dns_server = doh;
            changed = true;
        }
        if let Some(level) = opt.loglevel {
            general.loglevel = level.parse().map_err(|e: String| anyhow!(e))?;
            changed = true;
        }
        if changed {
            self.session.set_general(general);
            println!("{}", "Success".green());
        } else {
            println!("wifi-assist: {}", general.wifi_assist);
            println!("all-hybrid: {}", general.all_hybrid);
            println!("udp-priority: {}", general.udp_priority);
            println!("ipv6: {}", general.ipv6);
            println!("wifi-access: {}", general.allow_wifi_access);
            println!("http-port: {}", general.wifi_access_http_port);
            println!("socks5-port: {}", general.wifi_access_socks5_port);
            println!("hotspot: {}", general.allow_hotspot_access);
            println!("dns: {}", general.dns_servers);
            println!("doh: {}", general.encrypted_dns_server);
            println!("loglevel: {}", general.loglevel);
        }
        Ok(())
    }

    pub fn mitm(&mut self, opt: MitmOptions) -> Result<()> {
        let mut mitm = self.session.config().mitm.clone();
        let mut changed = false;
        let mut set_bool = |dst: &mut bool, src: Option<bool>| {
            if let Some(v) = src {
                *dst = v;
                changed = true;
            }
        };
        set_bool(&mut mitm.enabled, opt.enabled);
        set_bool(&mut mitm.skip_server_cert_verify, opt.skip_verify);
        set_bool(&mut mitm.tcp_connection, opt.tcp);
        set_bool(&mut mitm.h2, opt.h2);
        if let Some(hostname) = opt.hostname {
            mitm.hostname = hostname;
            changed = true;
        }
        // An empty value clears the stored secret.
        if let Some(v) = opt.passphrase {
            mitm.ca_passphrase = (!v.is_empty()).then_some(v);
            changed = true;
        }
        if let Some(v) = opt.p12 {
            mitm.ca_p12 = (!v.is_empty()).then_some(v);
            changed = true;
        }
        if changed {
            self.session.set_mitm(mitm);
            println!("{}", "Success".green());
        } else {
            println!("enabled: {}", mitm.enabled);
            println!("skip-verify: {}", mitm.skip_server_cert_verify);
            println!("tcp: {}", mitm.tcp_connection);
            println!("h2: {}", mitm.h2);
            println!("hostname: {}", mitm.hostname);
            println!("passphrase: {}", if mitm.ca_passphrase.is_some() { "set" } else { "unset" });
            println!("p12: {}", if mitm.ca_p12.is_some() { "set" } else { "unset" });
        }
        Ok(())
    }

    fn added_catalog_paths(&self) -> HashSet<&str> {
        self.session
            .config()
            .rules
            .iter()
            .filter(|r| r.kind == RuleType::RuleSet)
            .filter_map(|r| rule_path(&r.value))
            .collect()
    }
}

fn tri_state(hidden: Option<bool>) -> &'static str {
    match hidden {
        Some(true) => "yes",
        Some(false) => "no",
        None => "N/A",
    }
}
