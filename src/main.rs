use std::process::ExitCode;

use runtime_healthcheck::check::{self, Health};
use runtime_healthcheck::config::ProbeConfig;
use runtime_healthcheck::error::CheckFailure;
use runtime_healthcheck::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();

    let mut stdout = tokio::io::stdout();
    let health: Health = match ProbeConfig::from_env() {
        Ok(config) => check::run(&config, &mut stdout).await,
        Err(e) => check::conclude(Err(CheckFailure::Config(e)), &mut stdout).await,
    };

    health.into()
}
