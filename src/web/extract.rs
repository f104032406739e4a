//! Accessors and extractors for handlers behind [`inject_principal`].
//!
//! [`inject_principal`]: super::inject_principal

use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum::http::Extensions;

use crate::error::MissingPrincipal;
use crate::headers::{self, HeaderLookup};
use crate::internal::InternalCallPolicy;
use crate::principal::Principal;

/// Returns the principal stored for this request, if any.
///
/// Never fails: a request that did not pass through the middleware simply
/// has no principal. Handlers decide what absence means.
///
/// # Examples
///
/// ```
/// use axum::http::Extensions;
/// use tour_auth::web::principal;
///
/// let extensions = Extensions::new();
/// assert!(principal(&extensions).is_none());
/// ```
pub fn principal(extensions: &Extensions) -> Option<&Principal> {
    extensions.get::<Principal>()
}

/// Extractor for the request's principal.
///
/// Rejects with `401 {"error": "user not found"}` when no principal was
/// installed. Use [`principal`] directly for an optional lookup.
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Principal);

impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = MissingPrincipal;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match principal(&parts.extensions) {
            Some(p) => Ok(Self(p.clone())),
            None => {
                tracing::debug!(path = %parts.uri.path(), "No principal in request context");
                Err(MissingPrincipal)
            }
        }
    }
}

/// Resolves the caller's address.
///
/// With forwarded headers trusted: leftmost `X-Forwarded-For` entry, then
/// `X-Real-IP`. A forwarded value that does not parse as an IP is skipped.
/// Otherwise, or when neither yields an address, the socket peer from
/// [`ConnectInfo`]. Returns `None` when nothing is available.
pub fn client_ip(parts: &Parts, policy: &InternalCallPolicy) -> Option<String> {
    if policy.trusts_forwarded_headers() {
        let leftmost = parts
            .headers
            .header(headers::FORWARDED_FOR)
            .and_then(|chain| chain.split(',').next());
        let real_ip = parts.headers.header(headers::REAL_IP);

        let forwarded = [leftmost, real_ip]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find_map(|candidate| candidate.parse::<IpAddr>().ok());

        if let Some(ip) = forwarded {
            return Some(ip.to_string());
        }
    }

    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}

/// Whether the request looks like an internal call.
///
/// Uses the [`InternalCallPolicy`] installed with `axum::Extension`, or the
/// default policy when none is. This is a hint for routing and logging, not
/// an access check.
///
/// # Examples
///
/// ```
/// use axum::{routing::get, Extension, Router};
/// use tour_auth::web::InternalCall;
/// use tour_auth::InternalCallPolicy;
///
/// async fn handler(InternalCall(internal): InternalCall) -> &'static str {
///     if internal { "internal" } else { "external" }
/// }
///
/// let app: Router = Router::new()
///     .route("/", get(handler))
///     .layer(Extension(InternalCallPolicy::new().trust_forwarded_headers(false)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InternalCall(pub bool);

impl<S> FromRequestParts<S> for InternalCall
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let policy = parts
            .extensions
            .get::<InternalCallPolicy>()
            .cloned()
            .unwrap_or_default();

        let ip = client_ip(parts, &policy);
        let internal = policy.is_internal_call(ip.as_deref(), &parts.headers);

        tracing::debug!(client_ip = ?ip, internal, "Internal call check");

        Ok(Self(internal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::AccessLevel;
    use axum::http::Request;

    fn parts(builder: axum::http::request::Builder) -> Parts {
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn principal_absent_without_middleware() {
        let parts = parts(Request::builder());
        assert!(principal(&parts.extensions).is_none());
    }

    #[test]
    fn principal_present_after_insert() {
        let mut parts = parts(Request::builder());
        let p = Principal::new("1", "a@b.cl", "op", AccessLevel::Guide).unwrap();
        parts.extensions.insert(p.clone());

        assert_eq!(principal(&parts.extensions), Some(&p));
    }

    #[tokio::test]
    async fn current_principal_rejects_when_absent() {
        let mut parts = parts(Request::builder());
        let result = CurrentPrincipal::from_request_parts(&mut parts, &()).await;
        assert_eq!(result.unwrap_err(), MissingPrincipal);
    }

    #[test]
    fn client_ip_prefers_leftmost_forwarded_entry() {
        let parts = parts(
            Request::builder()
                .header("X-Forwarded-For", " 10.0.0.3 , 203.0.113.1")
                .header("X-Real-IP", "192.168.9.9"),
        );
        assert_eq!(
            client_ip(&parts, &InternalCallPolicy::default()).as_deref(),
            Some("10.0.0.3")
        );
    }

    #[test]
    fn client_ip_falls_back_to_real_ip() {
        let parts = parts(Request::builder().header("X-Real-IP", "192.168.9.9"));
        assert_eq!(
            client_ip(&parts, &InternalCallPolicy::default()).as_deref(),
            Some("192.168.9.9")
        );
    }

    #[test]
    fn client_ip_skips_forwarded_entries_that_are_not_addresses() {
        let parts = parts(
            Request::builder()
                .header("X-Forwarded-For", "unknown, 10.0.0.1")
                .header("X-Real-IP", "10.0.0.2"),
        );
        assert_eq!(
            client_ip(&parts, &InternalCallPolicy::default()).as_deref(),
            Some("10.0.0.2")
        );
    }

    #[test]
    fn client_ip_falls_back_to_peer_when_forwarded_values_are_garbage() {
        let mut parts = parts(
            Request::builder()
                .header("X-Forwarded-For", "unknown")
                .header("X-Real-IP", "localhost"),
        );
        let peer: SocketAddr = "192.168.3.3:9000".parse().unwrap();
        parts.extensions.insert(ConnectInfo(peer));

        assert_eq!(
            client_ip(&parts, &InternalCallPolicy::default()).as_deref(),
            Some("192.168.3.3")
        );
    }

    #[test]
    fn client_ip_uses_peer_when_forwarding_untrusted() {
        let mut parts = parts(Request::builder().header("X-Forwarded-For", "10.0.0.3"));
        let peer: SocketAddr = "203.0.113.5:4000".parse().unwrap();
        parts.extensions.insert(ConnectInfo(peer));

        let policy = InternalCallPolicy::new().trust_forwarded_headers(false);
        assert_eq!(client_ip(&parts, &policy).as_deref(), Some("203.0.113.5"));
    }

    #[test]
    fn client_ip_absent_without_any_source() {
        let parts = parts(Request::builder());
        assert!(client_ip(&parts, &InternalCallPolicy::default()).is_none());
    }

    #[tokio::test]
    async fn internal_call_reads_installed_policy() {
        let mut parts = parts(
            Request::builder()
                .header("X-Forwarded-For", "10.0.0.3")
                .header("X-Internal-Call", "true"),
        );
        let InternalCall(internal) = InternalCall::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(internal);

        parts
            .extensions
            .insert(InternalCallPolicy::new().trust_forwarded_headers(false));
        let InternalCall(internal) = InternalCall::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(!internal);
    }
}
