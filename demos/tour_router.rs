//! Runs a small axum server behind the principal middleware.
//!
//! ```text
//! cargo run --example tour_router
//!
//! curl -H 'X-User-ID: 123' -H 'X-User-Email: test@email.cl' \
//!      -H 'X-User-TourOperator: andes' -H 'X-User-Level: 1' \
//!      localhost:3000/me
//! ```

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};
use serde_json::json;
use tour_auth::web::{inject_principal, CurrentPrincipal, InternalCall};
use tour_auth::{AccessLevel, InternalCallPolicy};

async fn me(CurrentPrincipal(user): CurrentPrincipal) -> impl IntoResponse {
    Json(json!({
        "user": user,
        "level_name": user.level().display_name(),
        "administrator": user.is_administrator(),
    }))
}

async fn operations(
    CurrentPrincipal(user): CurrentPrincipal,
    InternalCall(internal): InternalCall,
) -> impl IntoResponse {
    if !user.has_role(AccessLevel::Operator) {
        return (StatusCode::FORBIDDEN, Json(json!({ "error": "operators only" })));
    }

    tracing::info!(user_id = %user.id(), internal, "Operations dashboard opened");
    (
        StatusCode::OK,
        Json(json!({ "tour_operator": user.tour_operator(), "internal": internal })),
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let app = Router::new()
        .route("/me", get(me))
        .route("/operations", get(operations))
        .layer(middleware::from_fn(inject_principal))
        .layer(Extension(InternalCallPolicy::default()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
