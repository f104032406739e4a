//! Owned request view for frameworks other than axum.

use std::collections::HashMap;

use crate::error::Rejection;
use crate::extract::extract_principal;
use crate::headers::HeaderLookup;
use crate::internal::InternalCallPolicy;
use crate::principal::Principal;

/// Framework-agnostic snapshot of the parts of a request this crate reads.
///
/// Integrations that do not run on axum copy the headers and the resolved
/// client address into a `RequestAdapter` and call its methods. Header names
/// are matched case-insensitively and, as with HTTP header maps, the first
/// value added for a name wins.
///
/// # Examples
///
/// ```
/// use tour_auth::web::RequestAdapter;
/// use tour_auth::{AccessLevel, InternalCallPolicy};
///
/// let mut adapter = RequestAdapter::new();
/// adapter.add_header("X-User-ID", "123");
/// adapter.add_header("X-User-Email", "test@email.cl");
/// adapter.add_header("X-User-TourOperator", "andes");
/// adapter.add_header("X-User-Level", "5");
/// adapter.add_header("X-Internal-Call", "true");
/// adapter.set_client_ip(Some("10.0.0.7".to_string()));
///
/// let principal = adapter.extract_principal().expect("valid headers");
/// assert_eq!(principal.level(), AccessLevel::Guide);
/// assert!(adapter.is_internal_call(&InternalCallPolicy::default()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestAdapter {
    /// Lowercased header names to their first value
    headers: HashMap<String, String>,
    /// Client address as resolved by the hosting framework
    client_ip: Option<String>,
}

impl RequestAdapter {
    /// Creates an adapter with no headers and no client address.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a header value. Later values for the same name are ignored.
    pub fn add_header(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.headers
            .entry(name.as_ref().to_ascii_lowercase())
            .or_insert_with(|| value.into());
    }

    /// Sets the resolved client address.
    ///
    /// This should be the address after any proxy-aware resolution the
    /// framework performs.
    pub fn set_client_ip(&mut self, client_ip: Option<String>) {
        self.client_ip = client_ip;
    }

    /// Returns the resolved client address, if known.
    pub fn client_ip(&self) -> Option<&str> {
        self.client_ip.as_deref()
    }

    /// Validates the identity headers. See [`extract_principal`].
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] hit while validating.
    pub fn extract_principal(&self) -> Result<Principal, Rejection> {
        extract_principal(self)
    }

    /// Applies `policy` to this request's address and marker header.
    pub fn is_internal_call(&self, policy: &InternalCallPolicy) -> bool {
        policy.is_internal_call(self.client_ip(), self)
    }
}

impl HeaderLookup for RequestAdapter {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::AccessLevel;

    #[test]
    fn new_adapter_is_empty() {
        let adapter = RequestAdapter::new();
        assert!(adapter.header("x-user-id").is_none());
        assert!(adapter.client_ip().is_none());
    }

    #[test]
    fn header_names_are_case_insensitive() {
        let mut adapter = RequestAdapter::new();
        adapter.add_header("X-User-Id", "123");

        assert_eq!(adapter.header("x-user-id"), Some("123"));
    }

    #[test]
    fn first_header_value_wins() {
        let mut adapter = RequestAdapter::new();
        adapter.add_header("X-User-Level", "1");
        adapter.add_header("x-user-level", "2");

        assert_eq!(adapter.header("x-user-level"), Some("1"));
    }

    #[test]
    fn extract_principal_uses_recorded_headers() {
        let mut adapter = RequestAdapter::new();
        adapter.add_header("X-User-Level", "0");
        adapter.add_header("X-User-ID", "root");
        adapter.add_header("X-User-Email", "root@tours.cl");
        adapter.add_header("X-User-TourOperator", "platform");

        let principal = adapter.extract_principal().unwrap();
        assert!(principal.is_administrator());
        assert_eq!(principal.level(), AccessLevel::TopAdmin);
    }

    #[test]
    fn extract_principal_reports_missing_information() {
        let mut adapter = RequestAdapter::new();
        adapter.add_header("X-User-Level", "1");

        assert_eq!(
            adapter.extract_principal(),
            Err(Rejection::MissingUserInformation)
        );
    }

    #[test]
    fn internal_call_needs_address_and_marker() {
        let policy = InternalCallPolicy::default();
        let mut adapter = RequestAdapter::new();
        adapter.add_header("X-Internal-Call", "true");
        assert!(!adapter.is_internal_call(&policy));

        adapter.set_client_ip(Some("203.0.113.9".to_string()));
        assert!(!adapter.is_internal_call(&policy));

        adapter.set_client_ip(Some("172.16.4.4".to_string()));
        assert!(adapter.is_internal_call(&policy));
    }
}
