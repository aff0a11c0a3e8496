//! Web console: page shells behind the route guard, plus a health endpoint.

pub mod guard;
pub mod handlers;

pub use guard::{GuardConfig, GuardDecision};

use anyhow::Result;
use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Request},
    middleware,
    routing::get,
    Router,
};
use handlers::{health, pages};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer, set_header::SetRequestHeaderLayer, trace::TraceLayer,
};
use tracing::{info, info_span, Span};
use ulid::Ulid;

/// Builds the console router with the guard and request-id/trace layers.
/// `config` must pass [`GuardConfig::validate`].
#[must_use]
pub fn router(config: GuardConfig) -> Router {
    let config = Arc::new(config);

    let mut router = Router::new()
        .route("/", get(pages::root))
        .route(config.login_path(), get(pages::login));

    let mut sections: Vec<&str> = guard::PROTECTED_SECTIONS.to_vec();
    if !sections.contains(&config.landing_path()) && config.landing_path() != config.login_path() {
        sections.push(config.landing_path());
    }
    for section in sections {
        router = router
            .route(section, get(pages::section))
            .route(&format!("{section}/*rest"), get(pages::section));
    }

    router
        .route(guard::HEALTH_PATH, get(health::health))
        .layer(middleware::from_fn_with_state(config.clone(), guard::guard))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span)),
        )
        .with_state(config)
}

/// Serves the console until Ctrl-C.
///
/// # Errors
/// Returns an error if the guard paths overlap, the port cannot be bound or
/// the server fails.
pub async fn serve(port: u16, config: GuardConfig) -> Result<()> {
    config.validate().map_err(anyhow::Error::msg)?;
    let app = router(config);

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}
