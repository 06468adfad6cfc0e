mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::{Config, SwaggerConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::districts::{routes as districts_routes, DistrictService};
use crate::features::map::{routes as map_routes, MapService};
use crate::features::report_form::{
    routes as report_form_routes, LocationService, SubmissionService,
};
use crate::modules::backend::{DisasterBackend, HttpDisasterBackend};
use crate::modules::geocoding::{NominatimClient, ReverseGeocoder};
use axum::{extract::DefaultBodyLimit, middleware::from_fn, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Services shared by the feature routers
struct AppServices {
    districts: DistrictService,
    location_service: Arc<LocationService>,
    submission_service: Arc<SubmissionService>,
    map_service: Arc<MapService>,
}

impl AppServices {
    fn new(
        config: &Config,
        backend: Arc<dyn DisasterBackend>,
        geocoder: Arc<dyn ReverseGeocoder>,
    ) -> Self {
        let districts = DistrictService::new();

        Self {
            districts,
            location_service: Arc::new(LocationService::new(geocoder, districts)),
            submission_service: Arc::new(SubmissionService::new(
                Arc::clone(&backend),
                districts,
                config.report.utc_offset,
            )),
            map_service: Arc::new(MapService::new(backend, config.map.clone())),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    let backend: Arc<dyn DisasterBackend> = Arc::new(
        HttpDisasterBackend::new(config.backend.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize backend client: {}", e))?,
    );
    tracing::info!(
        "Disaster backend client initialized: {} (aid requests: {})",
        config.backend.base_url,
        config
            .backend
            .aid_requests_path
            .as_deref()
            .unwrap_or("disabled")
    );

    let geocoder: Arc<dyn ReverseGeocoder> = Arc::new(
        NominatimClient::new(&config.geocoding)
            .map_err(|e| anyhow::anyhow!("Failed to initialize Nominatim client: {}", e))?,
    );
    tracing::info!(
        "Reverse geocoder initialized: {}",
        config.geocoding.base_url
    );

    let services = AppServices::new(&config, backend, geocoder);
    tracing::info!("Report form and map services initialized");

    let app = build_app(&config, services);

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}

fn swagger_router(config: &SwaggerConfig) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.title.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    if let Some(credentials) = config.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        swagger.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
            credentials,
        ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        swagger
    }
}

async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

fn build_app(config: &Config, services: AppServices) -> Router {
    let api_routes = Router::new()
        .merge(districts_routes::routes(services.districts))
        .merge(report_form_routes::routes(
            services.districts,
            services.location_service,
            services.submission_service,
        ))
        .merge(map_routes::routes(services.map_service));

    Router::new()
        .merge(swagger_router(&config.swagger))
        .merge(api_routes)
        .route("/health", axum::routing::get(health_check))
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                // Propagate X-Request-Id to response headers
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
