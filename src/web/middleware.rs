//! Axum middleware installing the request's [`Principal`].
//!
//! ```text
//! HTTP Request
//!   ↓
//! inject_principal: validate X-User-* headers
//!   ↓ ok                         ↓ rejected
//! Principal in extensions        403 {"error": "<reason>"}
//!   ↓
//! handler (CurrentPrincipal / principal())
//! ```

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::extract::extract_principal;

/// Validates identity headers and stores the [`Principal`](crate::Principal)
/// in the request extensions.
///
/// Install with [`axum::middleware::from_fn`]. On any
/// [`Rejection`](crate::Rejection) the request is answered with 403 and never
/// reaches the handler.
///
/// # Examples
///
/// ```
/// use axum::{middleware, routing::get, Router};
/// use tour_auth::web::{inject_principal, CurrentPrincipal};
///
/// async fn whoami(CurrentPrincipal(user): CurrentPrincipal) -> String {
///     user.id().to_string()
/// }
///
/// let app: Router = Router::new()
///     .route("/whoami", get(whoami))
///     .layer(middleware::from_fn(inject_principal));
/// ```
pub async fn inject_principal(mut req: Request, next: Next) -> Response {
    match extract_principal(req.headers()) {
        Ok(principal) => {
            tracing::debug!(
                user_id = %principal.id(),
                tour_operator = %principal.tour_operator(),
                level = %principal.level(),
                "Principal injected"
            );
            req.extensions_mut().insert(principal);
            next.run(req).await
        }
        Err(rejection) => {
            tracing::debug!(
                path = %req.uri().path(),
                reason = rejection.reason(),
                "Identity headers rejected"
            );
            rejection.into_response()
        }
    }
}
