mod index;
mod popular;

pub use index::ALL_RULE_NAMES;
pub use popular::{RuleSource, POPULAR_RULES, THIRD_PARTY_SOURCES};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const RULE_BASE_URL: &str =
    "https://raw.githubusercontent.com/blackmatrix7/ios_rule_script/master/rule/Surge";

/// URL of the hosted `.list` file for a catalog path.
pub fn rule_url(path: &str) -> String {
    format!("{}/{}/{}.list", RULE_BASE_URL, path, path)
}

/// Inverse of `rule_url`: the catalog path embedded in a rule-set URL, if
/// the URL follows the hosted layout.
pub fn rule_path(url: &str) -> Option<&str> {
    let rest = &url[url.find("/Surge/")? + "/Surge/".len()..];
    let end = rest.find('/')?;
    (end > 0).then(|| &rest[..end])
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    AI,
    Media,
    Social,
    Game,
    Dev,
    Ad,
    Privacy,
    Direct,
    Proxy,
    Other,
}

impl RuleCategory {
    /// Display label used by the catalog browser.
    pub fn label(&self) -> &'static str {
        match self {
            RuleCategory::AI => "AI 服务",
            RuleCategory::Media => "影音媒体",
            RuleCategory::Social => "社交通讯",
            RuleCategory::Game => "游戏平台",
            RuleCategory::Dev => "开发工具",
            RuleCategory::Ad => "广告过滤",
            RuleCategory::Privacy => "隐私保护",
            RuleCategory::Direct => "国内直连",
            RuleCategory::Proxy => "代理规则",
            RuleCategory::Other => "其他",
        }
    }

    /// Suggested policy for a freshly added rule of this category.
    pub fn default_policy(&self) -> &'static str {
        match self {
            RuleCategory::Ad | RuleCategory::Privacy => "REJECT",
            RuleCategory::Direct => "DIRECT",
            _ => "保底",
        }
    }
}

impl Display for RuleCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RuleCategory::AI => "AI",
            RuleCategory::Media => "Media",
            RuleCategory::Social => "Social",
            RuleCategory::Game => "Game",
            RuleCategory::Dev => "Dev",
            RuleCategory::Ad => "Ad",
            RuleCategory::Privacy => "Privacy",
            RuleCategory::Direct => "Direct",
            RuleCategory::Proxy => "Proxy",
            RuleCategory::Other => "Other",
        })
    }
}

impl FromStr for RuleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "AI" => RuleCategory::AI,
            "Media" => RuleCategory::Media,
            "Social" => RuleCategory::Social,
            "Game" => RuleCategory::Game,
            "Dev" => RuleCategory::Dev,
            "Ad" => RuleCategory::Ad,
            "Privacy" => RuleCategory::Privacy,
            "Direct" => RuleCategory::Direct,
            "Proxy" => RuleCategory::Proxy,
            "Other" => RuleCategory::Other,
            _ => return Err(format!("unknown rule category: {}", s)),
        })
    }
}

/// One catalog entry. `path` feeds `rule_url`; `description` only exists for
/// curated entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleCategoryInfo {
    pub name: &'static str,
    pub path: &'static str,
    pub category: RuleCategory,
    pub description: Option<&'static str>,
}

const AI_NAMES: &[&str] = &[
    "openai", "claude", "gemini", "copilot", "bardai", "anthropic", "civitai", "siri", "bing",
];
const MEDIA_NAMES: &[&str] = &[
    "youtube", "netflix", "disney", "spotify", "applemusic", "tiktok", "twitch", "bilibili",
    "bahamut", "kktv", "niconico", "hbo", "hulu", "iqiyi", "youku", "tencentvideo", "abema",
    "prime", "dazn", "dmm", "vimeo",
];
const MEDIA_KEYWORDS: &[&str] = &["media", "tv", "video", "music", "anime", "movie"];
const SOCIAL_NAMES: &[&str] = &[
    "telegram", "twitter", "instagram", "facebook", "reddit", "discord", "whatsapp", "line",
    "slack", "threads", "wechat", "weibo", "clubhouse", "linkedin", "tumblr", "pinterest", "vk",
];
const GAME_NAMES: &[&str] = &[
    "steam", "epic", "nintendo", "playstation", "xbox", "blizzard", "ea", "riot", "rockstar",
    "ubisoft", "supercell", "hoyoverse", "garena", "gog", "origin", "battle", "taptap",
];
const GAME_KEYWORDS: &[&str] = &[
    "game", "warcraft", "diablo", "overwatch", "hearthstone", "starcraft",
];
const DEV_NAMES: &[&str] = &[
    "github", "gitlab", "docker", "vercel", "notion", "figma", "atlassian", "heroku", "npmjs",
    "python", "anaconda", "jetbrains", "hashicorp", "developer",
];
const AD_NAMES: &[&str] = &[
    "advertising", "advertisinglite", "adguard", "easyprivacy", "hijacking", "privacy",
    "blockhttpdns",
];
const DIRECT_NAMES: &[&str] = &[
    "china", "chinamax", "chinamedia", "chinaasn", "chinaips", "direct", "lan", "wechat", "baidu",
    "alibaba", "tencent", "jingdong", "taobao", "eleme", "meituan", "didi",
];
const PROXY_NAMES: &[&str] = &["global", "globalmedia", "proxy", "proxylite"];

fn in_set(name: &str, set: &[&str]) -> bool {
    set.contains(&name)
}

fn has_keyword(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| name.contains(k))
}

/// Best-effort classification of a bare catalog name. All comparisons are
/// ASCII-case-insensitive.
///
/// Warning: the check order is part of the contract. Names matching several
/// patterns take the first hit, so reordering changes outcomes (for example
/// ChinaMedia lands in Media via the keyword scan, never reaching the
/// direct-name set).
pub fn categorize(name: &str) -> RuleCategory {
    let n = name.to_ascii_lowercase();
    if in_set(&n, AI_NAMES) {
        RuleCategory::AI
    } else if in_set(&n, MEDIA_NAMES) || is_amazon_video(&n) {
        RuleCategory::Media
    } else if has_keyword(&n, MEDIA_KEYWORDS) {
        RuleCategory::Media
    } else if in_set(&n, SOCIAL_NAMES) {
        RuleCategory::Social
    } else if in_set(&n, GAME_NAMES) {
        RuleCategory::Game
    } else if has_keyword(&n, GAME_KEYWORDS) {
        RuleCategory::Game
    } else if in_set(&n, DEV_NAMES) {
        RuleCategory::Dev
    } else if in_set(&n, AD_NAMES) {
        RuleCategory::Ad
    } else if n.ends_with("ad") || n.ends_with("ads") || n.contains("privacy") {
        RuleCategory::Privacy
    } else if in_set(&n, DIRECT_NAMES) {
        RuleCategory::Direct
    } else if n.contains("china") || n.starts_with("cn") {
        RuleCategory::Direct
    } else if in_set(&n, PROXY_NAMES) {
        RuleCategory::Proxy
    } else {
        RuleCategory::Other
    }
}

// Amazon*Video family, e.g. AmazonPrimeVideo.
fn is_amazon_video(lower: &str) -> bool {
    lower.len() >= "amazonvideo".len()
        && lower.starts_with("amazon")
        && lower.ends_with("video")
}

/// Effective category of an entry: the curated subset wins over the
/// automatic classification.
pub fn category_of(name: &str) -> RuleCategory {
    POPULAR_RULES
        .iter()
        .find(|info| info.name == name)
        .map(|info| info.category)
        .unwrap_or_else(|| categorize(name))
}

/// Every indexed name run through the classifier.
pub fn full_catalog() -> Vec<RuleCategoryInfo> {
    ALL_RULE_NAMES
        .iter()
        .map(|&name| RuleCategoryInfo {
            name,
            path: name,
            category: categorize(name),
            description: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_set_hits() {
        assert_eq!(categorize("OpenAI"), RuleCategory::AI);
        assert_eq!(categorize("ChinaMax"), RuleCategory::Direct);
        assert_eq!(categorize("Telegram"), RuleCategory::Social);
        assert_eq!(categorize("Steam"), RuleCategory::Game);
        assert_eq!(categorize("GitHub"), RuleCategory::Dev);
        assert_eq!(categorize("Hijacking"), RuleCategory::Ad);
        assert_eq!(categorize("ProxyLite"), RuleCategory::Proxy);
        assert_eq!(categorize("Zzzyx"), RuleCategory::Other);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(categorize("netflix"), RuleCategory::Media);
        assert_eq!(categorize("CLAUDE"), RuleCategory::AI);
    }

    #[test]
    fn keyword_scans() {
        assert_eq!(categorize("LineTV"), RuleCategory::Media);
        assert_eq!(categorize("TaiheMusic"), RuleCategory::Media);
        assert_eq!(categorize("WorldofWarcraft"), RuleCategory::Game);
        assert_eq!(categorize("MIUIPrivacy"), RuleCategory::Privacy);
        assert_eq!(categorize("ZhihuAds"), RuleCategory::Privacy);
        // The ad-suffix check also catches this one; long-standing behavior.
        assert_eq!(categorize("Download"), RuleCategory::Privacy);
        assert_eq!(categorize("AirChina"), RuleCategory::Direct);
        assert_eq!(categorize("CNKI"), RuleCategory::Direct);
        assert_eq!(categorize("AmazonPrimeVideo"), RuleCategory::Media);
    }

    #[test]
    fn precedence_order_is_observable() {
        // The Media keyword scan runs before the direct-name set, so these
        // never reach their exact-set entries.
        assert_eq!(categorize("ChinaMedia"), RuleCategory::Media);
        assert_eq!(categorize("GlobalMedia"), RuleCategory::Media);
        // The Social set runs before the direct-name set.
        assert_eq!(categorize("WeChat"), RuleCategory::Social);
    }

    #[test]
    fn curated_entries_override_the_classifier() {
        assert_eq!(category_of("ChinaMedia"), RuleCategory::Direct);
        assert_eq!(category_of("WeChat"), RuleCategory::Direct);
        assert_eq!(category_of("GlobalMedia"), RuleCategory::Proxy);
        // Uncurated names fall through to the classifier.
        assert_eq!(category_of("Zzzyx"), RuleCategory::Other);
    }

    #[test]
    fn catalog_size_and_coverage() {
        assert_eq!(ALL_RULE_NAMES.len(), 669);
        let catalog = full_catalog();
        assert_eq!(catalog.len(), 669);
        assert!(catalog.iter().any(|e| e.name == "OpenAI" && e.category == RuleCategory::AI));
    }

    #[test]
    fn url_round_trip() {
        let url = rule_url("Netflix");
        assert_eq!(
            url,
            "https://raw.githubusercontent.com/blackmatrix7/ios_rule_script/master/rule/Surge/Netflix/Netflix.list"
        );
        assert_eq!(rule_path(&url), Some("Netflix"));
        assert_eq!(rule_path("https://anti-ad.net/surge.txt"), None);
        assert_eq!(rule_path("https://example.com/Surge//x.list"), None);
    }

    #[test]
    fn category_labels_and_policies() {
        assert_eq!(RuleCategory::Ad.default_policy(), "REJECT");
        assert_eq!(RuleCategory::Privacy.default_policy(), "REJECT");
        assert_eq!(RuleCategory::Direct.default_policy(), "DIRECT");
        assert_eq!(RuleCategory::Media.default_policy(), "保底");
        assert_eq!(RuleCategory::AI.label(), "AI 服务");
        assert_eq!(serde_json::to_string(&RuleCategory::AI).unwrap(), "\"AI\"");
    }
}
