use std::process::ExitCode;

use catalog_cli::{Cli, commands, logger};
use catalog_client::ClientError;
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let _guard = match logger::init_logger(cli.verbose, cli.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {:#}", e);
            None
        }
    };

    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("error: {:#}", e);
            if e
                .downcast_ref::<ClientError>()
                .is_some_and(ClientError::is_auth_failure)
            {
                eprintln!("hint: run `catalog login` first");
            }
            ExitCode::FAILURE
        }
    }
}
