//! Internal-call detection.
//!
//! A request counts as internal when the caller sits on a private network
//! *and* sends `X-Internal-Call: true`. Anyone on a private network can set
//! that header, so the result is a routing or logging hint. It must never
//! gate access on its own.

use std::net::{IpAddr, Ipv4Addr};

use ipnetwork::{IpNetwork, Ipv4Network};

use crate::headers::{self, HeaderLookup};

/// RFC 1918 ranges checked by default.
const PRIVATE_RANGES: [(Ipv4Addr, u8); 3] = [
    (Ipv4Addr::new(10, 0, 0, 0), 8),
    (Ipv4Addr::new(172, 16, 0, 0), 12),
    (Ipv4Addr::new(192, 168, 0, 0), 16),
];

/// Configuration for internal-call detection.
///
/// Built in the same style as the rest of the crate's builders:
///
/// ```
/// use tour_auth::InternalCallPolicy;
///
/// let policy = InternalCallPolicy::new()
///     .with_network("100.64.0.0/10".parse().unwrap())
///     .trust_forwarded_headers(false);
///
/// assert!(policy.is_private("100.64.1.1"));
/// assert!(policy.is_private("10.1.2.3"));
/// assert!(!policy.is_private("8.8.8.8"));
/// assert!(!policy.trusts_forwarded_headers());
/// ```
#[derive(Debug, Clone)]
pub struct InternalCallPolicy {
    networks: Vec<IpNetwork>,
    trust_forwarded: bool,
}

impl InternalCallPolicy {
    /// Private IPv4 ranges, forwarded headers trusted.
    pub fn new() -> Self {
        let networks = PRIVATE_RANGES
            .iter()
            .filter_map(|(addr, prefix)| Ipv4Network::new(*addr, *prefix).ok())
            .map(IpNetwork::V4)
            .collect();

        Self {
            networks,
            trust_forwarded: true,
        }
    }

    /// Adds a network treated as private.
    pub fn with_network(mut self, network: IpNetwork) -> Self {
        self.networks.push(network);
        self
    }

    /// Drops every configured network, including the defaults.
    pub fn without_networks(mut self) -> Self {
        self.networks.clear();
        self
    }

    /// Whether `X-Forwarded-For` / `X-Real-IP` may supply the client address.
    ///
    /// When disabled, only the socket peer address is used.
    pub fn trust_forwarded_headers(mut self, trust: bool) -> Self {
        self.trust_forwarded = trust;
        self
    }

    /// Returns the current forwarded-header setting.
    pub fn trusts_forwarded_headers(&self) -> bool {
        self.trust_forwarded
    }

    /// Networks treated as private.
    pub fn networks(&self) -> &[IpNetwork] {
        &self.networks
    }

    /// Returns `true` if `addr` parses as an IP inside a configured network.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:10.0.0.1`) are matched as IPv4.
    pub fn is_private(&self, addr: &str) -> bool {
        let Ok(ip) = addr.parse::<IpAddr>() else {
            return false;
        };
        let ip = ip.to_canonical();
        self.networks.iter().any(|net| net.contains(ip))
    }

    /// Returns `true` iff `client_ip` is private and the internal marker
    /// header equals `"true"`, ignoring case.
    ///
    /// A missing or unparseable address yields `false`.
    pub fn is_internal_call<H>(&self, client_ip: Option<&str>, headers: &H) -> bool
    where
        H: HeaderLookup + ?Sized,
    {
        let marked = headers
            .header(headers::INTERNAL_CALL)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"));

        marked && client_ip.is_some_and(|ip| self.is_private(ip))
    }
}

impl Default for InternalCallPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// [`InternalCallPolicy::is_internal_call`] with the default policy.
pub fn is_internal_call<H>(client_ip: Option<&str>, headers: &H) -> bool
where
    H: HeaderLookup + ?Sized,
{
    InternalCallPolicy::default().is_internal_call(client_ip, headers)
}
