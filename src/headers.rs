//! Header names and the lookup seam the extractors read through.

use axum::http::HeaderMap;

/// Numeric access level.
pub const USER_LEVEL: &str = "x-user-level";
/// User identifier.
pub const USER_ID: &str = "x-user-id";
/// User email.
pub const USER_EMAIL: &str = "x-user-email";
/// Tour operator the user belongs to.
pub const USER_TOUR_OPERATOR: &str = "x-user-touroperator";
/// Self-declared internal caller marker.
pub const INTERNAL_CALL: &str = "x-internal-call";
/// Proxy chain, leftmost entry is the original client.
pub const FORWARDED_FOR: &str = "x-forwarded-for";
/// Client address set by nginx-style proxies.
pub const REAL_IP: &str = "x-real-ip";

/// Case-insensitive, first-value header lookup.
///
/// Implemented for [`HeaderMap`] and for the framework-agnostic
/// [`RequestAdapter`](crate::web::RequestAdapter). Other frameworks can
/// implement it for their own request types and reuse
/// [`extract_principal`](crate::extract_principal) and
/// [`InternalCallPolicy`](crate::InternalCallPolicy) unchanged.
///
/// Values are returned verbatim when they decode as UTF-8; undecodable bytes
/// are reported as absent.
pub trait HeaderLookup {
    /// Returns the first value of `name`, if any.
    ///
    /// `name` is always passed lowercase.
    fn header(&self, name: &str) -> Option<&str>;
}

impl HeaderLookup for HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
    }
}
