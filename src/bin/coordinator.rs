use taskwire::api::{self, AppState};
use taskwire::config::CoordinatorConfig;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = match CoordinatorConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "invalid coordinator configuration");
            std::process::exit(1);
        }
    };

    // Build router
    let app = api::router(AppState::default());

    // Start server
    tracing::info!("Coordinator listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
