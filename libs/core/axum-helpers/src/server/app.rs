use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors::cors_layer_from_env, security::security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::{Future, IntoFuture};
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI documentation (Swagger UI, ReDoc, RapiDoc, Scalar), with the
///   JSON document at `/api-docs/openapi.json`
/// - API routes mounted at the root
/// - Common middleware (tracing, security headers, CORS, compression)
/// - JSON 404 fallback handler
///
/// Health endpoints are added by the app with `health_router()` and its own
/// readiness handler.
///
/// # CORS Configuration
///
/// `CORS_ALLOWED_ORIGIN` may hold comma-separated allowed origins, e.g.
/// `CORS_ALLOWED_ORIGIN=http://localhost:3000,https://shop.example.com`.
/// When it is unset any origin is allowed.
///
/// # Errors
/// Returns an error if `CORS_ALLOWED_ORIGIN` is set but empty or invalid.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use utoipa::OpenApi;
/// use axum_helpers::server::create_router;
///
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// // Routes with state already applied
/// let api_routes = Router::new()
///     .route("/example", get(handler))
///     .with_state(my_state);
///
/// let router = create_router::<ApiDoc>(api_routes)?;
/// ```
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = cors_layer_from_env()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        // gzip, br, deflate or zstd depending on Accept-Encoding
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serve `router` until `coordinator` signals shutdown.
///
/// After the signal the listener stops accepting connections and in-flight
/// requests get `grace` to finish. Whatever is still running after that is
/// abandoned and the future resolves.
pub fn serve_until_shutdown(
    listener: TcpListener,
    router: Router,
    coordinator: &ShutdownCoordinator,
    grace: Duration,
) -> impl Future<Output = io::Result<()>> + Send + 'static {
    // Subscribe before the caller gets a chance to signal
    let mut graceful_rx = coordinator.subscribe();
    let mut deadline_rx = coordinator.subscribe();

    async move {
        let server = axum::serve(listener, router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = graceful_rx.recv().await;
            })
            .into_future();

        let grace_expired = async move {
            let _ = deadline_rx.recv().await;
            tokio::time::sleep(grace).await;
        };

        tokio::select! {
            result = server => result.inspect_err(|e| {
                tracing::error!("Server encountered an error: {:?}", e);
            }),
            _ = grace_expired => {
                warn!(
                    "Shutdown grace period of {:?} elapsed, abandoning in-flight requests",
                    grace
                );
                Ok(())
            }
        }
    }
}

/// Production server with signal handling, a shutdown grace period and
/// cleanup.
///
/// # Arguments
/// * `router` - The configured Axum router
/// * `server_config` - Server configuration
/// * `shutdown_timeout` - Grace period for in-flight requests, also the upper
///   bound for `cleanup`
/// * `cleanup` - Runs after the server stops, e.g. closing connections
///
/// # Example
/// ```ignore
/// use std::time::Duration;
/// use axum_helpers::server::create_production_app;
///
/// let cleanup = async move {
///     database::postgres::close(db).await;
/// };
///
/// create_production_app(router, &config, Duration::from_secs(5), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let coordinator = ShutdownCoordinator::default();
    let server = serve_until_shutdown(listener, router, &coordinator, shutdown_timeout);

    let signal_handle = coordinator.clone();
    tokio::spawn(async move { signal_handle.wait_for_signal().await });

    let serve_result = server.await;

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
