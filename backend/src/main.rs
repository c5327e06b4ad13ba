//! Backend entry-point: config, engine connection, and the HTTP server.

use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::server::{ServerConfig, run};

/// Application bootstrap. Configuration or engine failures before binding are
/// fatal: log and exit without serving.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env().map_err(|e| {
        error!(error = %e, "configuration load failed");
        std::io::Error::other(e.to_string())
    })?;

    run(config).await
}
