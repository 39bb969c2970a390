mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;

use std::process::ExitCode;

use clap::Parser;

use app::{CliArgs, ExtractorApp};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    log::info!(
        "{} Starting {}: {}",
        global_constants::LOG_TAG_MAIN,
        global_constants::APPLICATION_NAME,
        global_constants::APPLICATION_SUBTITLE
    );

    let result = match ExtractorApp::load_settings(&args).and_then(ExtractorApp::build) {
        Ok(app) => app.run(&args).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(error) => {
            log::error!("{} {:#}", global_constants::LOG_TAG_MAIN, error);
            eprintln!("{} {:#}", global_constants::USER_MESSAGE_ERROR_PREFIX, error);
            ExitCode::FAILURE
        }
    }
}
