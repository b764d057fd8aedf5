use taskwire::agent::AgentRuntime;
use taskwire::config::AgentConfig;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = match AgentConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "invalid agent configuration");
            std::process::exit(1);
        }
    };

    let runtime = match AgentRuntime::new(&config) {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(%err, "failed to start agent");
            std::process::exit(1);
        }
    };

    tracing::info!(
        agent_id = %config.agent_id,
        "Agent polling {}",
        config.coordinator_url
    );

    tokio::select! {
        _ = runtime.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutting down");
        }
    }
}
