use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use purity_gate::clock::SystemClock;
use purity_gate::config::{Args, RateLimitConfig};
use purity_gate::router;
use purity_gate::state::AppState;
use purity_gate::storage::{FileStore, KeyValueStore, MemoryStore};

#[tokio::main]
async fn main() -> ExitCode {
    // parse cli arguments
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(filter).init();

    let config = match &args.rate_limits {
        Some(path) => match RateLimitConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => RateLimitConfig::default(),
    };

    let store: Arc<dyn KeyValueStore> = match &args.state_dir {
        Some(dir) => match FileStore::open(dir) {
            Ok(store) => {
                info!("Persisting rate limits under {}", dir.display());
                Arc::new(store)
            }
            Err(e) => {
                error!("Cannot open state dir {}: {e}", dir.display());
                return ExitCode::FAILURE;
            }
        },
        None => Arc::new(MemoryStore::new()),
    };

    for (action, rule) in config.actions() {
        info!(
            "Rate limit: {action} allows {} per {} ms",
            rule.max_attempts, rule.window_ms
        );
    }

    // creating shared state
    let state = Arc::new(AppState::new(store, Arc::new(SystemClock), config));
    let app = router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {addr}: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Purity gate running on http://localhost:{}", args.port);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
