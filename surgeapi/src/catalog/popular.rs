use super::{RuleCategory, RuleCategoryInfo};

const fn curated(
    name: &'static str,
    category: RuleCategory,
    description: Option<&'static str>,
) -> RuleCategoryInfo {
    RuleCategoryInfo {
        name,
        path: name,
        category,
        description,
    }
}

/// Hand-picked entries surfaced before the full index. Categories and
/// descriptions here override the automatic classification.
pub const POPULAR_RULES: &[RuleCategoryInfo] = &[
    // AI services
    curated("OpenAI", RuleCategory::AI, Some("ChatGPT, OpenAI API")),
    curated("Claude", RuleCategory::AI, Some("Anthropic Claude")),
    curated("Anthropic", RuleCategory::AI, Some("Claude API")),
    curated("Gemini", RuleCategory::AI, Some("Google Gemini")),
    curated("Copilot", RuleCategory::AI, Some("GitHub Copilot")),
    curated("BardAI", RuleCategory::AI, Some("Google Bard")),
    curated("Civitai", RuleCategory::AI, Some("AI Model Community")),
    curated("Siri", RuleCategory::AI, None),
    curated("Bing", RuleCategory::AI, Some("Bing Search & Copilot")),
    // Media services
    curated("YouTube", RuleCategory::Media, None),
    curated("Netflix", RuleCategory::Media, None),
    curated("Disney", RuleCategory::Media, Some("Disney+")),
    curated("Spotify", RuleCategory::Media, None),
    curated("AppleMusic", RuleCategory::Media, None),
    curated("TikTok", RuleCategory::Media, None),
    curated("Twitch", RuleCategory::Media, None),
    curated("BiliBili", RuleCategory::Media, None),
    curated("Bahamut", RuleCategory::Media, Some("巴哈姆特動畫瘋")),
    curated("KKTV", RuleCategory::Media, None),
    curated("Niconico", RuleCategory::Media, None),
    curated("HBO", RuleCategory::Media, None),
    // Social media
    curated("Telegram", RuleCategory::Social, None),
    curated("Twitter", RuleCategory::Social, Some("X (Twitter)")),
    curated("Instagram", RuleCategory::Social, None),
    curated("Facebook", RuleCategory::Social, None),
    curated("Reddit", RuleCategory::Social, None),
    curated("Discord", RuleCategory::Social, None),
    curated("Whatsapp", RuleCategory::Social, None),
    curated("Line", RuleCategory::Social, None),
    curated("Slack", RuleCategory::Social, None),
    curated("Threads", RuleCategory::Social, None),
    // Developer tools
    curated("GitHub", RuleCategory::Dev, None),
    curated("GitLab", RuleCategory::Dev, None),
    curated("Docker", RuleCategory::Dev, None),
    curated("Vercel", RuleCategory::Dev, None),
    curated("Notion", RuleCategory::Dev, None),
    curated("Figma", RuleCategory::Dev, None),
    // Games
    curated("Steam", RuleCategory::Game, None),
    curated("Epic", RuleCategory::Game, None),
    curated("Nintendo", RuleCategory::Game, None),
    curated("PlayStation", RuleCategory::Game, None),
    curated("Xbox", RuleCategory::Game, None),
    curated("Blizzard", RuleCategory::Game, None),
    curated("EA", RuleCategory::Game, None),
    curated("Riot", RuleCategory::Game, Some("League of Legends, Valorant")),
    // Ad blocking
    curated("AdvertisingLite", RuleCategory::Ad, Some("广告过滤（轻量版）")),
    curated("Advertising", RuleCategory::Ad, Some("广告过滤（完整版）")),
    curated("Hijacking", RuleCategory::Privacy, Some("防劫持")),
    curated("Privacy", RuleCategory::Privacy, Some("隐私保护")),
    // Direct connection
    curated("China", RuleCategory::Direct, Some("国内网站")),
    curated("ChinaMax", RuleCategory::Direct, Some("国内网站（完整版）")),
    curated("ChinaMedia", RuleCategory::Direct, Some("国内媒体")),
    curated("WeChat", RuleCategory::Direct, Some("微信")),
    // Global proxy
    curated("Global", RuleCategory::Proxy, Some("国外网站")),
    curated("GlobalMedia", RuleCategory::Proxy, Some("国外媒体")),
    curated("Proxy", RuleCategory::Proxy, Some("代理列表")),
    // Cloud and platform services
    curated("Google", RuleCategory::Other, None),
    curated("Microsoft", RuleCategory::Other, None),
    curated("Apple", RuleCategory::Other, None),
    curated("Amazon", RuleCategory::Other, None),
    curated("iCloud", RuleCategory::Other, None),
    curated("OneDrive", RuleCategory::Other, None),
    curated("TestFlight", RuleCategory::Other, None),
    curated("Scholar", RuleCategory::Other, Some("学术网站")),
    curated("Wikipedia", RuleCategory::Other, None),
    curated("Cloudflare", RuleCategory::Other, None),
    curated("Adobe", RuleCategory::Other, None),
];

/// A rule list hosted outside the blackmatrix7 catalog; the URL is used
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSource {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub category: RuleCategory,
}

pub const THIRD_PARTY_SOURCES: &[RuleSource] = &[
    RuleSource {
        name: "Anti-AD",
        url: "https://anti-ad.net/surge.txt",
        description: "广告过滤列表",
        category: RuleCategory::Ad,
    },
    RuleSource {
        name: "Adblock4limbo",
        url: "https://raw.githubusercontent.com/limbopro/Adblock4limbo/main/Adblock4limbo_surge.list",
        description: "Limbo 广告过滤",
        category: RuleCategory::Ad,
    },
    RuleSource {
        name: "NobyDa WeChat",
        url: "https://raw.githubusercontent.com/NobyDa/Script/master/Surge/WeChat.list",
        description: "微信规则",
        category: RuleCategory::Direct,
    },
    RuleSource {
        name: "NobyDa Download",
        url: "https://raw.githubusercontent.com/NobyDa/Script/master/Surge/Download.list",
        description: "下载工具规则",
        category: RuleCategory::Direct,
    },
    RuleSource {
        name: "VirgilClyne China ASN",
        url: "https://github.com/VirgilClyne/GetSomeFries/raw/main/ruleset/ASN.China.list",
        description: "中国 ASN 列表",
        category: RuleCategory::Direct,
    },
];

#[test]
fn test_popular_entries_are_indexed() {
    use super::ALL_RULE_NAMES;
    for info in POPULAR_RULES {
        assert!(
            ALL_RULE_NAMES.contains(&info.name),
            "{} missing from the index",
            info.name
        );
        assert_eq!(info.name, info.path);
    }
    assert_eq!(POPULAR_RULES.len(), 67);
    assert_eq!(THIRD_PARTY_SOURCES.len(), 5);
}
