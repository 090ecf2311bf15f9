use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use axum_server::tls_rustls::RustlsConfig;
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;
use tracing::{debug, info};

use crate::agent::config::Config;
use crate::commands::dispatcher::{Command, CommandDispatcher};
use crate::platform::InputDriver;
use crate::security::rate_limit::RateLimiter;
use crate::synthesis::random::EntropyRandom;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Arc<Config>,
    pub limiter: RateLimiter,
    pub dispatcher: CommandDispatcher,
}

impl AppState {
    pub fn new(config: Arc<Config>, driver: Arc<dyn InputDriver>) -> Self {
        let limiter = RateLimiter::new(
            config.rate_limit.requests_per_sec,
            config.rate_limit.burst,
        );
        let dispatcher = CommandDispatcher::new(driver, Arc::new(EntropyRandom));
        Self {
            config,
            limiter,
            dispatcher,
        }
    }
}

pub fn create_router(state: SharedState) -> Router {
    // Rate limiting covers the command endpoint only; the security headers
    // layer is outermost so rejections carry them too.
    Router::new()
        .route("/v1/rb", post(command_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), rate_limit))
        .route("/health", get(health))
        .layer(middleware::from_fn(security_headers))
        .with_state(state)
}

async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'self'"),
    );
    response
}

async fn rate_limit(State(state): State<SharedState>, request: Request, next: Next) -> Response {
    if !state.limiter.allow().await {
        debug!("rate limit exceeded");
        return (StatusCode::TOO_MANY_REQUESTS, "Too Many Requests").into_response();
    }
    next.run(request).await
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

// Strict decode by hand so every malformed body maps to 400 with the
// decoder's message; dispatcher errors (unknown action included) are 500.
async fn command_handler(State(state): State<SharedState>, body: Bytes) -> Response {
    let cmd: Command = match serde_json::from_slice(&body) {
        Ok(cmd) => cmd,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };

    match state.dispatcher.dispatch(&cmd).await {
        Ok(()) => (StatusCode::OK, "Command executed").into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response(),
    }
}

pub async fn serve(config: Config, driver: Arc<dyn InputDriver>) -> Result<()> {
    let cfg = Arc::new(config);
    let state = Arc::new(AppState::new(cfg.clone(), driver));
    let app = create_router(state);

    let addr: SocketAddr = (cfg.host.as_str(), cfg.port)
        .to_socket_addrs()
        .context("resolving listen address")?
        .next()
        .context("listen address resolved to nothing")?;

    if cfg.tls.enabled {
        let tls = RustlsConfig::from_pem_file(&cfg.tls.cert_file, &cfg.tls.key_file)
            .await
            .context("loading TLS certificate")?;
        info!("HTTPS server listening on {}", addr);
        axum_server::bind_rustls(addr, tls)
            .serve(app.into_make_service())
            .await?;
    } else {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("HTTP server listening on {}", addr);
        axum::serve(listener, app).await?;
    }
    Ok(())
}
