use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::{Arc, RwLock};
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lead_crm_api::config::Config;
use lead_crm_api::directory::PartnerDirectory;
use lead_crm_api::handlers::{self, AppState};
use lead_crm_api::registry::FormRegistry;
use lead_crm_api::seed;
use lead_crm_api::store::LeadStore;

/// Main entry point for the application.
///
/// Initializes logging, configuration, the in-memory state (optionally
/// seeded with demo data), and the HTTP routes with their middleware
/// (CORS, tracing, body limit, rate limiting), then starts the axum
/// server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lead_crm_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Build the in-memory state
    let mut directory = PartnerDirectory::new(
        &config.admin_username,
        &config.admin_password,
        &config.admin_name,
    );
    let mut store = LeadStore::new();
    if config.seed_demo_data {
        seed::demo_partners(&mut directory)?;
        store = LeadStore::from_records(seed::demo_leads());
        tracing::info!(leads = store.len(), "demo data seeded");
    }

    let app_state = Arc::new(AppState {
        config: config.clone(),
        store: RwLock::new(store),
        directory: RwLock::new(directory),
        forms: RwLock::new(FormRegistry::new()),
    });

    // Configure rate limiter: 10 requests/second per IP, burst of 20
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    // Build protected routes with security layers
    let protected_routes = Router::new()
        // Authentication shell
        .route("/api/v1/auth/login", post(handlers::login))
        .route("/api/v1/auth/register", post(handlers::register))
        // Lead endpoints
        .route("/api/v1/leads", get(handlers::list_leads))
        .route("/api/v1/leads", post(handlers::create_lead))
        .route("/api/v1/leads/:id", get(handlers::get_lead))
        .route("/api/v1/leads/:id", put(handlers::update_lead))
        .route(
            "/api/v1/leads/:id/documents",
            post(handlers::attach_document),
        )
        // Aggregation endpoints
        .route("/api/v1/dashboard", get(handlers::dashboard))
        .route("/api/v1/reports", get(handlers::monthly_report))
        // Partner form builder
        .route("/api/v1/forms", post(handlers::create_form))
        .route("/api/v1/forms", get(handlers::list_forms))
        // Partner management (admin)
        .route("/api/v1/partners", get(handlers::list_partners))
        .route("/api/v1/partners", post(handlers::add_partner))
        .layer(
            ServiceBuilder::new()
                // Request size limit: 2MB max payload
                .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
                // Rate limiting: 10 req/sec per IP, burst of 20
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        );

    // Build final app with health check bypassing rate limiting
    let app = Router::new()
        .route("/health", get(handlers::health))
        .merge(protected_routes)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
