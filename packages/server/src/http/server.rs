use crate::config::Config;
use axum::{
    handler::HandlerWithoutStateExt,
    middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utils::{context::AppContext, http::BearerAuth};
use wildmatch::WildMatch;

use super::{
    handlers::{
        handle_config, handle_config_script, handle_create_token, handle_index, handle_not_found,
        handle_openapi,
    },
    state::HttpState,
};

// this is called from main
pub fn start(ctx: AppContext, config: Config) -> anyhow::Result<()> {
    // The server runs within the tokio runtime
    ctx.rt.clone().block_on(async move {
        let (host, port) = (config.host.clone(), config.port);

        let mut shutdown_signal = ctx.get_kill_receiver();

        let router = make_router(HttpState::new(config));

        let listener = tokio::net::TcpListener::bind(&format!("{}:{}", host, port)).await?;

        tracing::info!(
            "Server running at http://{}:{}",
            host,
            listener.local_addr()?.port()
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown_signal.recv().await.ok();

                tracing::debug!("Http server shutting down");
            })
            .await?;

        anyhow::Ok(())
    })?;

    Ok(())
}

// this is called from main and tests
pub fn make_router(state: HttpState) -> axum::Router {
    let config = state.config.clone();

    // everything not routed explicitly is looked up in the static directory
    let static_files =
        ServeDir::new(&config.static_dir).not_found_service(handle_not_found.into_service());

    // public routes
    let public = axum::Router::new()
        .route("/", get(handle_index))
        .route("/config", get(handle_config))
        .route("/config.js", get(handle_config_script))
        .route("/api-docs/openapi.json", get(handle_openapi))
        .with_state(state.clone());

    // protected routes (POST)
    let protected = axum::Router::new()
        .route("/api/tokens", post(handle_create_token))
        .with_state(state);

    // apply bearer auth to protected routes if configured
    let mut router = public
        .merge(match &config.bearer_token {
            Some(token) => protected.layer(middleware::from_fn_with_state(
                BearerAuth::new(token.clone(), "launchpad"),
                utils::http::verify_bearer,
            )),
            None => protected,
        })
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer(&config) {
        router = router.layer(cors);
    }

    router
}

fn cors_layer(config: &Config) -> Option<CorsLayer> {
    if config.cors_allowed_origins.is_empty() {
        None
    } else {
        let allowed_origins: Vec<WildMatch> = config
            .cors_allowed_origins
            .iter()
            .map(|s| WildMatch::new(s))
            .collect();

        Some(
            CorsLayer::new()
                // using a predicate so we have more flexibility over wildcard patterns
                .allow_origin(tower_http::cors::AllowOrigin::predicate(
                    move |origin, _parts| {
                        origin
                            .to_str()
                            .map(|origin| {
                                allowed_origins
                                    .iter()
                                    .any(|allowed_origin| allowed_origin.matches(origin))
                            })
                            .unwrap_or(false)
                    },
                ))
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
    }
}
