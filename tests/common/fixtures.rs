use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Common test domains
pub struct TestDomains;

impl TestDomains {
    pub fn site() -> &'static str {
        "site.test"
    }

    pub fn www() -> &'static str {
        "www.site.test"
    }

    pub fn unsupported() -> &'static str {
        "site.bogus"
    }

    pub fn dashboard() -> &'static str {
        "domains.internal"
    }

    pub fn dashboard_api() -> &'static str {
        "api.domains.internal"
    }
}

/// Common test addresses
pub struct TestIps;

impl TestIps {
    pub fn site() -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5))
    }

    pub fn www() -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, 6))
    }

    pub fn site_v6() -> IpAddr {
        IpAddr::V6(Ipv6Addr::new(0xfd00, 0, 0, 0, 0, 0, 0, 5))
    }

    pub fn loopback() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }
}
