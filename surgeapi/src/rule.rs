use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum RuleType {
    Domain,
    DomainSuffix,
    DomainKeyword,
    IpCidr,
    IpCidr6,
    Geoip,
    IpAsn,
    RuleSet,
    DomainSet,
    ProcessName,
    And,
    Or,
}

impl RuleType {
    /// Whether a `no-resolve` qualifier may be appended to the rendered
    /// line. Set-valued and compound rules never carry one.
    pub fn supports_no_resolve(&self) -> bool {
        !matches!(
            self,
            RuleType::RuleSet | RuleType::DomainSet | RuleType::And | RuleType::Or
        )
    }
}

impl Display for RuleType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RuleType::Domain => "DOMAIN",
            RuleType::DomainSuffix => "DOMAIN-SUFFIX",
            RuleType::DomainKeyword => "DOMAIN-KEYWORD",
            RuleType::IpCidr => "IP-CIDR",
            RuleType::IpCidr6 => "IP-CIDR6",
            RuleType::Geoip => "GEOIP",
            RuleType::IpAsn => "IP-ASN",
            RuleType::RuleSet => "RULE-SET",
            RuleType::DomainSet => "DOMAIN-SET",
            RuleType::ProcessName => "PROCESS-NAME",
            RuleType::And => "AND",
            RuleType::Or => "OR",
        })
    }
}

impl FromStr for RuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "DOMAIN" => RuleType::Domain,
            "DOMAIN-SUFFIX" => RuleType::DomainSuffix,
            "DOMAIN-KEYWORD" => RuleType::DomainKeyword,
            "IP-CIDR" => RuleType::IpCidr,
            "IP-CIDR6" => RuleType::IpCidr6,
            "GEOIP" => RuleType::Geoip,
            "IP-ASN" => RuleType::IpAsn,
            "RULE-SET" => RuleType::RuleSet,
            "DOMAIN-SET" => RuleType::DomainSet,
            "PROCESS-NAME" => RuleType::ProcessName,
            "AND" => RuleType::And,
            "OR" => RuleType::Or,
            _ => return Err(format!("unknown rule type: {}", s)),
        })
    }
}

/// One traffic-classification entry. `value` is a URL for RULE-SET, a
/// parenthesized sub-expression for AND/OR, and a literal pattern otherwise.
/// Sequence order is significant; the consuming client matches first to last.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RuleType,
    pub value: String,
    pub policy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub no_resolve: bool,
}

#[test]
fn test_rule_type_wire_format() {
    assert_eq!(serde_json::to_string(&RuleType::IpCidr6).unwrap(), "\"IP-CIDR6\"");
    assert_eq!(serde_json::to_string(&RuleType::ProcessName).unwrap(), "\"PROCESS-NAME\"");
    let t: RuleType = serde_json::from_str("\"DOMAIN-SUFFIX\"").unwrap();
    assert_eq!(t, RuleType::DomainSuffix);
    assert_eq!("RULE-SET".parse::<RuleType>().unwrap(), RuleType::RuleSet);
    assert!("BOGUS".parse::<RuleType>().is_err());
}

#[test]
fn test_no_resolve_support() {
    assert!(RuleType::IpCidr.supports_no_resolve());
    assert!(RuleType::Geoip.supports_no_resolve());
    assert!(!RuleType::RuleSet.supports_no_resolve());
    assert!(!RuleType::DomainSet.supports_no_resolve());
    assert!(!RuleType::And.supports_no_resolve());
    assert!(!RuleType::Or.supports_no_resolve());
}
