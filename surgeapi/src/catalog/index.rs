// The blackmatrix7 iOS rule script collection, Surge flavor. Names double as
// catalog paths; see `rule_url`.
pub const ALL_RULE_NAMES: &[&str] = &[
    "115", "12306", "1337x", "17173", "178", "17zuoye", "2KGames", "360", "36kr", "3Type", "3dm",
    "4399", "4Paradigm", "4chan", "51Job", "51nod", "56", "58TongCheng", "6JianFang", "6park",
    "8btc", "9News", "9to5", "ABC", "AFP", "ALJazeera", "AMD", "AMP", "AOL", "APKCombo",
    "ATTWatchTV", "Abema", "AbemaTV", "AcFun", "Accuweather", "Acer", "Acplay", "Actalis",
    "AdColony", "AdGuardSDNSFilter", "AddToAny", "Addthis", "Adidas", "Adobe", "AdobeActivation",
    "Advertising", "AdvertisingLite", "AdvertisingMiTV", "AdvertisingTest", "Aerogard", "Afdian",
    "Agora", "AiQiCha", "AirChina", "AirWick", "Akamai", "Ali213", "AliPay", "Alibaba", "All4",
    "Amazon", "AmazonCN", "AmazonIP", "AmazonPrimeVideo", "AmazonTrust", "Americasvoice",
    "AnTianKeJi", "Anaconda", "AnandTech", "Android", "Anime", "Anjuke", "Anonv", "Anthropic",
    "Antutu", "Apifox", "Apkpure", "AppLovin", "AppStore", "Apple", "AppleDaily", "AppleDev",
    "AppleFirmware", "AppleHardware", "AppleID", "AppleMail", "AppleMedia", "AppleMusic",
    "AppleNews", "AppleProxy", "AppleTV", "Arphic", "Asahi", "AsianMedia", "Assassin'sCreed",
    "Atlassian", "Atomdata", "BBC", "BMW", "BOC", "BOCOM", "Bahamut", "BaiDuTieBa", "BaiFenDian",
    "BaiShanYunKeJi", "Baidu", "BaoFengYingYin", "BardAI", "Battle", "BeStore", "Beats", "BesTV",
    "Bestbuy", "BianFeng", "BiliBili", "BiliBiliIntl", "Binance", "Bing", "Blizzard",
    "BlockHttpDNS", "Bloomberg", "Blued", "BoXun", "Bootcss", "BrightCove", "BritboxUK",
    "Buypass", "ByteDance", "CAS", "CBS", "CCB", "CCTV", "CEB", "CETV", "CGB", "CHT", "CIBN",
    "CKJR", "CMB", "CNKI", "CNN", "CNNIC", "CSDN", "CWSeed", "CableTV", "CaiNiao",
    "CaiXinChuanMei", "Cake", "Camera360", "Canon", "ChengTongWangPan", "China", "ChinaASN",
    "ChinaDNS", "ChinaIPs", "ChinaIPsBGP", "ChinaMax", "ChinaMaxNoIP", "ChinaMaxNoMedia",
    "ChinaMedia", "ChinaMobile", "ChinaNews", "ChinaNoMedia", "ChinaTelecom", "ChinaTest",
    "ChinaUnicom", "Chromecast", "ChuangKeTie", "ChunYou", "Cisco", "Civitai", "Classic",
    "Claude", "Cloud", "Cloudflare", "Cloudflarecn", "Clubhouse", "ClubhouseIP", "Cnet",
    "Collabora", "Comodo", "Contentful", "Coolapk", "Copilot", "Crypto", "Cryptocurrency",
    "CyberTrust", "DAZN", "DMM", "DNS", "DaMai", "Dailymail", "Dailymotion", "DanDanZan",
    "Dandanplay", "DangDang", "Dedao", "Deepin", "Deezer", "Dell", "Developer", "DiDi",
    "DiLianWangLuo", "DiSiFanShi", "DiabloIII", "DianCeWangKe", "DigiCert", "DigitalOcean",
    "DingTalk", "DingXiangYuan", "Direct", "Discord", "DiscoveryPlus", "Disney", "Disqus",
    "Docker", "Domob", "Dood", "DouBan", "DouYin", "Douyu", "Download", "Dropbox", "DtDNS",
    "Dubox", "Duckduckgo", "DuoWan", "Duolingo", "DynDNS", "Dynu", "EA", "EHGallery", "EastMoney",
    "EasyPrivacy", "Electron", "Eleme", "Embl", "Emby", "Emojipedia", "EncoreTVB", "Entrust",
    "Epic", "Espn", "FOXNOW", "FOXPlus", "Facebook", "FanFou", "FangZhengDianZi", "Faronics",
    "FeiZhu", "FengHuangWang", "FengXiaWangLuo", "Figma", "Fiio", "FindMy", "FitnessPlus",
    "FlipBoard", "Flurry", "Fox", "FreeCodeCamp", "FuboTV", "Funshion", "Game", "GaoDe", "Garena",
    "Geely", "Gemini", "Gettyimages", "Gigabyte", "GitBook", "GitHub", "GitLab", "Gitee",
    "Global", "GlobalMedia", "GlobalScholar", "GlobalSign", "Gog", "Google", "GoogleDrive",
    "GoogleEarth", "GoogleFCM", "GoogleSearch", "GoogleVoice", "GovCN", "Gucci", "GuiGuDongLi",
    "HBO", "HBOAsia", "HBOHK", "HBOUSA", "HKBN", "HKOpenTV", "HKedcity", "HP", "HWTV",
    "HaiNanHangKong", "HamiVideo", "HanYi", "HashiCorp", "Haveibeenpwned", "HeMa", "Hearthstone",
    "HeroesoftheStorm", "Heroku", "HibyMusic", "Hijacking", "Himalaya", "Hkgolden", "HoYoverse",
    "Hpplay", "HuYa", "HuaShuTV", "HuanJu", "Huawei", "Huffpost", "Hulu", "HuluJP", "HuluUSA",
    "HunanTV", "Hupu", "IBM", "ICBC", "IKEA", "IMDB", "IPTVMainland", "IPTVOther", "ITV",
    "Identrust", "Imgur", "Instagram", "Intel", "Intercom", "JOOX", "Japonx", "Jetbrains",
    "Jfrog", "JiGuangTuiSong", "JianGuoYun", "JianShu", "JinJiangWenXue", "JingDong", "Jquery",
    "Jsdelivr", "JueJin", "Jwplayer", "KKBOX", "KKTV", "KakaoTalk", "Kantv", "Keep", "KingSmith",
    "Kingsoft", "KouDaiShiShang", "Ku6", "KuKeMusic", "KuaiDi100", "KuaiShou", "KuangShi",
    "KugouKuwo", "LG", "Lan", "LanZouYun", "LastFM", "LastPass", "LeJu", "LeTV", "Lenovo", "LiTV",
    "LianMeng", "Limelight", "Line", "LineTV", "Linguee", "LinkedIn", "Linux", "LivePerson",
    "Logitech", "LondonReal", "LuDaShi", "LvMiLianChuang", "MEGA", "MIUIPrivacy", "MOMOShop",
    "MOOMusic", "MOOV", "Mail", "Mailru", "Majsoul", "Manorama", "Maocloud", "Marketing",
    "McDonalds", "MeWatch", "MeiTu", "MeiTuan", "MeiZu", "MiWu", "Microsoft", "MicrosoftEdge",
    "Migu", "MingLueZhaoHui", "Mogujie", "Mojitianqi", "Movefree", "Mozilla", "My5", "NBC", "NGA",
    "NGAA", "NTPService", "NYPost", "NYTimes", "NaSDDNS", "Naver", "NaverTV", "NetEase",
    "NetEaseMusic", "Netflix", "Niconico", "Nike", "Nikkei", "Nintendo", "NivodTV", "Notion",
    "NowE", "Npmjs", "Nvidia", "OKX", "OP", "OPPO", "Olevod", "OneDrive", "OnePlus", "OpenAI",
    "Opera", "Oracle", "Oreilly", "Origin", "OuPeng", "Overcast", "Overwatch", "PBS", "PCCW",
    "PChome", "PChomeTW", "PPTV", "PSBC", "Pandora", "PandoraTV", "ParamountPlus", "Patreon",
    "PayPal", "Peacock", "Picacg", "Picsee", "PikPak", "Pinduoduo", "PingAn", "Pinterest",
    "Pixiv", "Pixnet", "PlayStation", "PotatoChat", "PrimeVideo", "Privacy", "PrivateTracker",
    "Protonmail", "Proxy", "ProxyLite", "Pubmatic", "Purikonejp", "Python", "QiNiuYun",
    "QingCloud", "Qobuz", "Qualcomm", "QuickConnect", "Qyyjt", "RTHK", "Rakuten", "Rarbg",
    "Razer", "Reabble", "Reddit", "Riot", "Rockstar", "RuanMei", "SFExpress", "SMG", "SMZDM",
    "STUN", "Salesforce", "Samsung", "Scaleflex", "Scholar", "Sectigo", "ShangHaiJuXiao",
    "Shanling", "Sharethis", "ShenMa", "ShiJiChaoXing", "ShiNongZhiKe", "Shopee", "Shopify",
    "Sina", "Siri", "SkyGO", "Slack", "SlideShare", "Sling", "SmarTone", "Snap", "Sohu", "Sony",
    "SouFang", "SoundCloud", "SourceForge", "Spark", "Speedtest", "Spotify", "Stackexchange",
    "StarCraftII", "Starbucks", "Steam", "SteamCN", "Stripe", "SuNing", "SublimeText",
    "SuiShiChuanMei", "Supercell", "Synology", "SystemOTA", "TCL", "TIDAL", "TVB", "TVer",
    "TaiKang", "TaiWanGood", "TaiheMusic", "TapTap", "TeamViewer", "Teambition", "Teams",
    "Telegram", "TelegramNL", "TelegramSG", "TelegramUS", "Tencent", "TencentVideo", "TeraBox",
    "Tesla", "TestFlight", "ThomsonReuters", "Threads", "TianTianKanKan", "TianWeiChengXin",
    "TianYaForum", "TigerFintech", "TikTok", "Tmdb", "TongCheng", "TrustWave", "TruthSocial",
    "Tumblr", "Twitch", "Twitter", "U17", "UBI", "UC", "UCloud", "UKMedia", "UPYun", "USMedia",
    "Ubisoft", "Ubuntu", "Udacity", "UnionPay", "Unity", "VISA", "VK", "VOA", "Vancl", "Vercel",
    "Verisign", "Verizon", "VidolTV", "VikACG", "Viki", "Vimeo", "VipShop", "ViuTV", "Vivo",
    "Voxmedia", "W3schools", "WIX", "WanKaHuanJu", "WanMeiShiJie", "Wanfang", "WangSuKeJi",
    "WangXinKeJi", "WeChat", "WeTV", "WeType", "WeiZhiYunDong", "Weibo", "WenJuanXing",
    "Westerndigital", "Whatsapp", "WiFiMaster", "Wikimedia", "Wikipedia", "WildRift", "WoLai",
    "Wordpress", "WorldofWarcraft", "Wteam", "Xbox", "XiamiMusic", "XianYu", "XiaoGouKeJi",
    "XiaoHongShu", "XiaoMi", "XiaoYuanKeJi", "XieCheng", "XingKongWuXian", "XueErSi", "XueQiu",
    "Xunlei", "YYeTs", "Yandex", "YiChe", "YiXiaKeJi", "YiZhiBo", "YouMengChuangXiang", "YouTube",
    "YouTubeMusic", "YouZan", "Youku", "YuanFuDao", "YunFanJiaSu", "ZDNS", "Zalo", "Zee", "ZeeTV",
    "Zendesk", "ZhangYue", "ZhiYinManKe", "ZhiYunZhong", "Zhihu", "ZhihuAds", "ZhongGuoShiHua",
    "ZhongWeiShiJi", "ZhongXingTongXun", "ZhongYuanYiShang", "ZhuanZhuan", "Zoho", "aiXcoder",
    "eBay", "friDay", "iCloud", "iCloudPrivateRelay", "iFlytek", "iQIYI", "iQIYIIntl", "iTalkBB",
    "ifanr", "myTVSUPER", "zhanqi",
];
