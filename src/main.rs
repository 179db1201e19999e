use std::process::ExitCode;

use anyhow::Result;
use env_logger::Env;

use template_composer::cli;
use template_composer::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Parse configuration from command line and config file
    let (config, command) = Config::from_args_and_env()?;

    // RUST_LOG still wins over --log-level
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .format_timestamp(None)
        .init();

    if let Some(path) = &config.config_path {
        log::debug!("Using config file {}", path.display());
    }

    if cli::run(command, &config).await? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
