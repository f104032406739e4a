//! Web framework integration surface.
//!
//! The validation itself lives in [`extract_principal`](crate::extract_principal)
//! and [`InternalCallPolicy`](crate::InternalCallPolicy) and knows nothing
//! about any framework. This module wires them into axum:
//!
//! - [`inject_principal`]: middleware that validates the `X-User-*` headers
//!   and stores the [`Principal`](crate::Principal) in request extensions,
//!   or answers 403 with `{"error": "<reason>"}`.
//! - [`principal`] and [`CurrentPrincipal`]: read the stored principal back.
//! - [`InternalCall`] and [`client_ip`]: proxy-aware address resolution and
//!   the internal-call hint.
//!
//! [`RequestAdapter`] covers frameworks other than axum.
//!
//! # Example Flow
//!
//! ```
//! use axum::{middleware, routing::get, Extension, Router};
//! use tour_auth::web::{inject_principal, CurrentPrincipal, InternalCall};
//! use tour_auth::{AccessLevel, InternalCallPolicy};
//!
//! async fn bookings(
//!     CurrentPrincipal(user): CurrentPrincipal,
//!     InternalCall(internal): InternalCall,
//! ) -> String {
//!     if user.has_role(AccessLevel::TourSeller) || internal {
//!         format!("bookings for {}", user.tour_operator())
//!     } else {
//!         "nothing to show".to_string()
//!     }
//! }
//!
//! let app: Router = Router::new()
//!     .route("/bookings", get(bookings))
//!     .layer(middleware::from_fn(inject_principal))
//!     .layer(Extension(InternalCallPolicy::default()));
//! ```

mod adapter;
mod extract;
mod middleware;

pub use adapter::RequestAdapter;
pub use extract::{client_ip, principal, CurrentPrincipal, InternalCall};
pub use middleware::inject_principal;
