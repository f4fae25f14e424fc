use crate::render::non_empty;
use surgeapi::Rule;

/// User rules in order, then the fixed trailing block that keeps UDP-443,
/// LAN and CN traffic behaving regardless of what the list above does.
pub(crate) fn rule_section(rules: &[Rule]) -> String {
    let mut lines = vec!["[Rule]".to_string()];
    for rule in rules {
        let mut line = format!("{},{},{}", rule.kind, rule.value, rule.policy);
        if rule.kind.supports_no_resolve() && rule.no_resolve {
            line.push_str(",no-resolve");
        }
        if let Some(comment) = non_empty(&rule.comment) {
            line.push_str(" // ");
            line.push_str(comment);
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.push("# ============ 最终规则 ============".to_string());
    lines.push("AND,((PROTOCOL,UDP), (DEST-PORT,443)),REJECT-NO-DROP".to_string());
    lines.push("IP-CIDR,0.0.0.0/32,REJECT,no-resolve".to_string());
    lines.push("OR,((GEOIP,CN), (RULE-SET,SYSTEM), (RULE-SET,LAN)),DIRECT".to_string());
    lines.push("FINAL,保底,dns-failed".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use surgeapi::{fresh_id, RuleType};

    fn rule(kind: RuleType, value: &str, policy: &str) -> Rule {
        Rule {
            id: fresh_id(),
            kind,
            value: value.to_string(),
            policy: policy.to_string(),
            comment: None,
            no_resolve: false,
        }
    }

    #[test]
    fn trailing_block_is_always_last() {
        let text = rule_section(&[]);
        assert!(text.starts_with("[Rule]\n\n# ============ 最终规则 ============\n"));
        assert!(text.ends_with(
            "AND,((PROTOCOL,UDP), (DEST-PORT,443)),REJECT-NO-DROP\n\
             IP-CIDR,0.0.0.0/32,REJECT,no-resolve\n\
             OR,((GEOIP,CN), (RULE-SET,SYSTEM), (RULE-SET,LAN)),DIRECT\n\
             FINAL,保底,dns-failed"
        ));
    }

    #[test]
    fn comments_and_no_resolve_are_conditional() {
        let mut geoip = rule(RuleType::Geoip, "CN", "DIRECT");
        geoip.no_resolve = true;
        geoip.comment = Some("国内直连".to_string());
        let mut ruleset = rule(RuleType::RuleSet, "https://example.com/a.list", "Proxy");
        ruleset.no_resolve = true;
        let blank = rule(RuleType::Domain, "example.com", "DIRECT");

        let text = rule_section(&[geoip, ruleset, blank]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "GEOIP,CN,DIRECT,no-resolve // 国内直连");
        assert_eq!(lines[2], "RULE-SET,https://example.com/a.list,Proxy");
        assert_eq!(lines[3], "DOMAIN,example.com,DIRECT");
    }

    #[test]
    fn empty_comment_is_dropped() {
        let mut r = rule(RuleType::DomainSuffix, "cn", "DIRECT");
        r.comment = Some(String::new());
        assert!(!rule_section(&[r]).contains("//"));
    }
}
