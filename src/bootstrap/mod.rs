pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_config_with_env, load_dotenv};
pub use run::{run, Cli, RunOutcome};
pub use wiring::{wire_dependencies, WiringError, WiringResult};
