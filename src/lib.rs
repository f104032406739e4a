//! Header-derived authentication context for services behind a trusted
//! gateway.
//!
//! An upstream gateway authenticates the caller and forwards who they are in
//! request headers. This crate turns those headers into a typed
//! [`Principal`] for the rest of the request:
//!
//! - **Access levels**: [`AccessLevel`] is a closed, ranked set of six roles.
//! - **Principal**: identity, email, tour operator and level, with
//!   [`Principal::is_administrator`] and [`Principal::has_role`].
//! - **Extraction**: [`extract_principal`] validates `X-User-Level`,
//!   `X-User-ID`, `X-User-Email` and `X-User-TourOperator` in a fixed order
//!   and reports the first [`Rejection`].
//! - **Internal calls**: [`InternalCallPolicy`] flags requests from private
//!   networks that send `X-Internal-Call: true`.
//! - **Web integration**: [`web`] provides the axum middleware, extractors
//!   and a framework-agnostic [`web::RequestAdapter`].
//!
//! The header values are trusted as-is. This crate does not verify where they
//! came from, issue credentials, or evaluate authorization policy beyond level
//! comparison.
//!
//! # Examples
//!
//! ```
//! use axum::http::{HeaderMap, HeaderValue};
//! use tour_auth::{extract_principal, AccessLevel};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert("X-User-ID", HeaderValue::from_static("123"));
//! headers.insert("X-User-Email", HeaderValue::from_static("test@email.cl"));
//! headers.insert("X-User-TourOperator", HeaderValue::from_static("test_tour_operator"));
//! headers.insert("X-User-Level", HeaderValue::from_static("1"));
//!
//! let user = extract_principal(&headers).expect("valid identity headers");
//! assert_eq!(user.level(), AccessLevel::TourAdmin);
//! assert!(user.has_role(AccessLevel::TourAdmin));
//! assert!(!user.has_role(AccessLevel::Operator));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod extract;
pub mod headers;
mod internal;
mod level;
mod principal;
pub mod web;

pub use error::{MissingPrincipal, Rejection};
pub use extract::extract_principal;
pub use headers::HeaderLookup;
pub use internal::{is_internal_call, InternalCallPolicy};
pub use level::AccessLevel;
pub use principal::Principal;
