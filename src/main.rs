use std::process::ExitCode;

use clap::Parser;
use placement_lib::bootstrap::{self, Cli};
use tracing::{debug, error, warn};

#[tokio::main]
async fn main() -> ExitCode {
    // Real environment variables win over .env entries
    let dotenv = bootstrap::load_dotenv();

    if let Err(e) = bootstrap::tracing::init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {}", e);
    }

    match dotenv {
        Ok(Some(path)) => debug!(path = %path.display(), "Loaded .env file"),
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Ignoring malformed .env file"),
    }

    let cli = Cli::parse();
    match bootstrap::run(cli).await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            error!("Startup failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
