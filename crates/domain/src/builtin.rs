//! Built-in namespace: the default TLD allow-list and the system domains
//! seeded at startup so the service answers with zero configuration.

pub const LOOPBACK_ADDRESS: &str = "127.0.0.1";

/// Default TLD allow-list.
///
/// One profane TLD from the historical list is intentionally absent; list it
/// under `dns.tlds` to accept it again.
pub const DEFAULT_TLDS: &[&str] = &[
    "ao",
    "ara",
    "epic",
    "internal",
    "ki",
    "local",
    "localhost",
    "lore",
    "mail",
    "mi",
    "myth",
    "neko",
    "os",
    "pwn",
    "root",
    "test",
    "thc",
    "waifu",
];

/// System domains and the labels registered under each, all pointing at
/// [`LOOPBACK_ADDRESS`].
pub const SYSTEM_DOMAINS: &[(&str, &[&str])] = &[
    ("domains.internal", &["@", "api"]),
    ("admin.mail", &["@"]),
    ("user.mail", &["@"]),
];

pub fn default_tlds() -> Vec<String> {
    DEFAULT_TLDS.iter().map(|tld| tld.to_string()).collect()
}
