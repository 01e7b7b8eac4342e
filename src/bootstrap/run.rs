//! Command-line entry: load config, wire the app, reconcile one user.
//! 命令行入口：加载配置、组装应用、对单个用户执行对账。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pl_app::App;
use pl_core::ports::QueryError;
use pl_core::{AuthenticatedUser, Session, UserId};
use tracing::{error, info, info_span, Instrument};

use super::config::load_config_with_env;
use super::wiring::wire_dependencies;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "placement.toml";

/// Exit code for a failed store query (startup failures use 1).
pub const EXIT_QUERY_FAILED: u8 = 2;

/// What one CLI run ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Reconciled { complete: bool },
    QueryFailed(QueryError),
}

impl RunOutcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RunOutcome::Reconciled { .. } => ExitCode::SUCCESS,
            RunOutcome::QueryFailed(_) => ExitCode::from(EXIT_QUERY_FAILED),
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "placement",
    about = "Reconcile a candidate's onboarding steps and report whether onboarding is complete"
)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, short = 'c', env = "PLACEMENT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Authenticated user id to reconcile
    pub user_id: String,
}

impl Cli {
    /// Config file to load. A path given on the command line (or via
    /// `PLACEMENT_CONFIG`) must exist; the implicit default is optional.
    pub fn config_source(&self) -> Option<PathBuf> {
        match &self.config {
            Some(path) => Some(path.clone()),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                default.exists().then_some(default)
            }
        }
    }
}

/// Build the caller's session. A blank id means nobody is signed in.
pub fn session_for(user_id: &str) -> Session {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        Session::anonymous()
    } else {
        Session::authenticated(AuthenticatedUser::new(UserId::from(user_id)))
    }
}

pub fn outcome_label(complete: bool) -> &'static str {
    if complete {
        "complete"
    } else {
        "incomplete"
    }
}

/// Run one reconciliation for the session's user.
pub async fn reconcile(app: &App, session: &Session) -> Result<bool, QueryError> {
    let span = info_span!(
        "command.reconcile_onboarding",
        authenticated = session.is_authenticated()
    );
    app.is_onboarding_complete()
        .execute_for_session(session)
        .instrument(span)
        .await
}

/// Execute the CLI. Startup failures come back as `Err`; a failed store
/// query is logged and reported as [`RunOutcome::QueryFailed`].
pub async fn run(cli: Cli) -> anyhow::Result<RunOutcome> {
    let config_source = cli.config_source();
    let config = load_config_with_env(config_source.as_deref())?;
    let deps = wire_dependencies(&config)?;
    let app = App::new(deps);

    let session = session_for(&cli.user_id);
    match reconcile(&app, &session).await {
        Ok(complete) => {
            info!(complete, "Onboarding reconciliation finished");
            println!("{}", outcome_label(complete));
            Ok(RunOutcome::Reconciled { complete })
        }
        Err(e) => {
            error!(error = %e, "Onboarding reconciliation failed");
            Ok(RunOutcome::QueryFailed(e))
        }
    }
}
