//! Codesafe login demo - Entry Point
//!
//! Interactive username/password login that records every attempt in an
//! in-memory activity log and replays it on exit.

use log::{info, warn};
use std::process::ExitCode;
use tokio::io::BufReader;

use codesafe_login::error::{DemoError, error_to_exit_code, handle_error};
use codesafe_login::{ActivityLog, DemoConfig, LogMode, LoginSystem, SessionOutcome, run_session};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching login demo...");

    match run().await {
        Ok(outcome) => {
            info!("Session finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            handle_error(&err);
            ExitCode::from(error_to_exit_code(&err))
        }
    }
}

async fn run() -> Result<SessionOutcome, DemoError> {
    let config = DemoConfig::load()?;
    if config.log_mode == LogMode::Insecure {
        warn!("Insecure log mode enabled: passwords will be written to the activity log");
    }

    let store = config.credential_store();
    info!("Loaded {} accounts: {:?}", store.len(), store.usernames());

    let mut system = LoginSystem::with_mode(store, ActivityLog::new(), config.log_mode);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    let outcome = run_session(stdin, &mut stdout, &mut system, config.max_attempts).await?;
    Ok(outcome)
}
