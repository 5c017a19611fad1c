use std::process::ExitCode;

use clap::Parser;
use wordroll::{logging, Config};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    let _log_guard = match logging::init(&config.log_filter, config.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("wordroll: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = wordroll::run(config).await {
        tracing::error!(error = %e, "wordroll exited with an error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
