mod actions;

use crate::session::ConfigSession;
use actions::Actions;
use clap::{Args, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub(crate) enum SubscriptionOptions {
    /// Add a subscription; a blank name is derived from the URL
    Add {
        #[clap(value_hint = ValueHint::Url)]
        url: String,
        #[arg(short, long)]
        name: Option<String>,
        /// Node name regex for policy-regex-filter
        #[arg(short, long)]
        filter: Option<String>,
        /// Refresh period in hours
        #[arg(short, long, default_value_t = 1)]
        interval: u32,
        /// Keep the derived smart group visible in the client UI
        #[arg(long)]
        visible: bool,
    },
    /// List all subscriptions
    List,
    /// Remove a subscription
    Rm {
        #[clap(value_hint = ValueHint::Other)]
        id: String,
    },
}

#[derive(Debug, Args)]
pub(crate) struct GroupAddOptions {
    #[clap(value_hint = ValueHint::Other)]
    name: String,
    /// select, smart, url-test, fallback or load-balance
    #[arg(short = 't', long = "type", default_value = "select")]
    kind: String,
    /// Member policies, comma separated, in order
    #[arg(short, long, value_delimiter = ',')]
    proxies: Vec<String>,
    /// Groups whose nodes are pulled in via include-other-group
    #[arg(long, value_delimiter = ',')]
    include: Vec<String>,
    /// Node name regex for policy-regex-filter
    #[arg(short, long)]
    filter: Option<String>,
    #[arg(long)]
    hidden: bool,
    /// subscription, region or service
    #[arg(short, long)]
    category: Option<String>,
    #[arg(long)]
    tolerance: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum GroupOptions {
    /// Add a proxy group
    Add(GroupAddOptions),
    /// List all proxy groups
    List,
    /// Remove a proxy group
    Rm {
        #[clap(value_hint = ValueHint::Other)]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum RuleOptions {
    /// Append a rule to the end of the list
    Add {
        #[clap(value_hint = ValueHint::Other)]
        value: String,
        /// DOMAIN, DOMAIN-SUFFIX, IP-CIDR, RULE-SET, ...
        #[arg(short = 't', long = "type", default_value = "RULE-SET")]
        kind: String,
        #[arg(short, long, default_value = "保底")]
        policy: String,
        #[arg(short, long)]
        comment: Option<String>,
        /// Append the no-resolve qualifier where the rule type allows it
        #[arg(long)]
        no_resolve: bool,
    },
    /// List all rules
    List,
    /// Remove a rule
    Rm {
        #[clap(value_hint = ValueHint::Other)]
        id: String,
    },
    /// Point an existing rule at another policy
    SetPolicy {
        #[clap(value_hint = ValueHint::Other)]
        id: String,
        #[clap(value_hint = ValueHint::Other)]
        policy: String,
    },
    /// List the policies a rule may reference
    Policies,
}

#[derive(Debug, Subcommand)]
pub(crate) enum CatalogOptions {
    /// List catalog entries; the curated subset unless filtered or --all
    List {
        /// Show the full 669-name index
        #[arg(short, long)]
        all: bool,
        /// AI, Media, Social, Game, Dev, Ad, Privacy, Direct, Proxy or Other
        #[arg(short, long)]
        category: Option<String>,
        /// Case-insensitive name search across the full index
        #[arg(short, long)]
        query: Option<String>,
    },
    /// List third-party rule lists hosted outside the catalog
    Sources,
    /// Append a catalog entry as a RULE-SET rule with its suggested policy
    Add {
        #[clap(value_hint = ValueHint::Other)]
        name: String,
        /// Override the suggested policy
        #[arg(short, long)]
        policy: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum WireGuardOptions {
    /// Create or update a peer from a standard peer-configuration file
    Import {
        #[clap(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Peer name; required when creating a new peer
        #[arg(short, long)]
        name: Option<String>,
        /// Update this existing peer instead of creating one
        #[arg(long)]
        id: Option<String>,
    },
    /// List all WireGuard peers
    List,
    /// Remove a peer
    Rm {
        #[clap(value_hint = ValueHint::Other)]
        id: String,
    },
}

/// [General] switches. With no option set, prints the effective values.
#[derive(Debug, Args)]
pub(crate) struct GeneralOptions {
    #[arg(long)]
    wifi_assist: Option<bool>,
    #[arg(long)]
    all_hybrid: Option<bool>,
    #[arg(long)]
    udp_priority: Option<bool>,
    #[arg(long)]
    ipv6: Option<bool>,
    #[arg(long)]
    wifi_access: Option<bool>,
    #[arg(long)]
    http_port: Option<u16>,
    #[arg(long)]
    socks5_port: Option<u16>,
    #[arg(long)]
    hotspot: Option<bool>,
    /// Plain DNS servers, comma separated
    #[arg(long)]
    dns: Option<String>,
    /// DNS-over-HTTPS endpoint
    #[arg(long)]
    doh: Option<String>,
    /// verbose, info, notify, warning or error
    #[arg(long)]
    loglevel: Option<String>,
}

/// [MITM] switches. With no option set, prints the effective values.
#[derive(Debug, Args)]
pub(crate) struct MitmOptions {
    #[arg(long)]
    enabled: Option<bool>,
    #[arg(long)]
    skip_verify: Option<bool>,
    #[arg(long)]
    tcp: Option<bool>,
    #[arg(long)]
    h2: Option<bool>,
    /// Hostname patterns, comma separated
    #[arg(long)]
    hostname: Option<String>,
    #[arg(long)]
    passphrase: Option<String>,
    #[arg(long)]
    p12: Option<String>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum SubCommand {
    /// Create the profile with the default template if it does not exist
    Init,
    /// Render the configuration text to stdout or a file
    Generate {
        /// Output file; the conventional name is surge.conf
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Summarize the current profile
    Show,
    /// Write the configuration as portable JSON
    Export {
        #[arg(short, long, default_value = "surge-config-backup.json")]
        output: PathBuf,
    },
    /// Replace the configuration from an exported JSON file
    Import {
        #[clap(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// Restore a bundled template, discarding the current configuration
    Reset {
        /// Use the minimal template instead of the default one
        #[arg(long)]
        empty: bool,
    },
    /// Subscription management
    #[command(subcommand)]
    Sub(SubscriptionOptions),
    /// Proxy group management
    #[command(subcommand)]
    Group(GroupOptions),
    /// Rule management
    #[command(subcommand)]
    Rule(RuleOptions),
    /// Hosted rule catalog
    #[command(subcommand)]
    Catalog(CatalogOptions),
    /// WireGuard peer management
    #[command(subcommand)]
    Wg(WireGuardOptions),
    /// Show or change [General] settings
    General(GeneralOptions),
    /// Show or change [MITM] settings
    Mitm(MitmOptions),
}

pub(crate) fn run(session: ConfigSession, cmd: SubCommand) -> anyhow::Result<()> {
    let mut actions = Actions::new(session);
    match cmd {
        SubCommand::Init => actions.init(),
        SubCommand::Generate { output } => actions.generate(output),
        SubCommand::Show => actions.show(),
        SubCommand::Export { output } => actions.export(output),
        SubCommand::Import { file } => actions.import(file),
        SubCommand::Reset { empty } => actions.reset(empty),
        SubCommand::Sub(opt) => match opt {
            SubscriptionOptions::Add {
                url,
                name,
                filter,
                interval,
                visible,
            } => actions.sub_add(url, name, filter, interval, visible),
            SubscriptionOptions::List => actions.sub_list(),
            SubscriptionOptions::Rm { id } => actions.sub_rm(&id),
        },
        SubCommand::Group(opt) => match opt {
            GroupOptions::Add(add) => actions.group_add(add),
            GroupOptions::List => actions.group_list(),
            GroupOptions::Rm { id } => actions.group_rm(&id),
        },
        SubCommand::Rule(opt) => match opt {
            RuleOptions::Add {
                value,
                kind,
                policy,
                comment,
                no_resolve,
            } => actions.rule_add(value, &kind, policy, comment, no_resolve),
            RuleOptions::List => actions.rule_list(),
            RuleOptions::Rm { id } => actions.rule_rm(&id),
            RuleOptions::SetPolicy { id, policy } => actions.rule_set_policy(&id, &policy),
            RuleOptions::Policies => actions.rule_policies(),
        },
        SubCommand::Catalog(opt) => match opt {
            CatalogOptions::List {
                all,
                category,
                query,
            } => actions.catalog_list(all, category, query),
            CatalogOptions::Sources => actions.catalog_sources(),
            CatalogOptions::Add { name, policy } => actions.catalog_add(&name, policy),
        },
        SubCommand::Wg(opt) => match opt {
            WireGuardOptions::Import { file, name, id } => actions.wg_import(file, name, id),
            WireGuardOptions::List => actions.wg_list(),
            WireGuardOptions::Rm { id } => actions.wg_rm(&id),
        },
        SubCommand::General(opt) => actions.general(opt),
        SubCommand::Mitm(opt) => actions.mitm(opt),
    }
}
