//! check-ssl-expiration - monitoring plugin for TLS certificate expiry
//!
//! Prints a single result line on stdout and exits with the plugin status:
//! 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN.

use check_ssl_expiration::cli::{version_line, Cli};
use check_ssl_expiration::models::CheckResult;
use check_ssl_expiration::runner;
use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        // clap exits 2 on usage errors, which a dispatcher would read as CRITICAL
        Err(e) => {
            let rendered = e.to_string();
            let message = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ");
            return report(CheckResult::unknown(message));
        }
    };

    if cli.version {
        println!("{}", version_line());
        return ExitCode::SUCCESS;
    }

    // Logs go to stderr; stdout carries only the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.check_config() {
        Ok(config) => runner::run(&config).await,
        Err(e) => CheckResult::unknown(e.to_string()),
    };

    report(result)
}

fn report(result: CheckResult) -> ExitCode {
    println!("{}", result);
    ExitCode::from(result.exit_code())
}
