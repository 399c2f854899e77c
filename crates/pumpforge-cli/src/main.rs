//! pumpforge entry point.
//!
//! Binary name: `pumpforge`
//!
//! Parses flags, sets up tracing, runs one token generation, and maps the
//! result to the process exit code: 0 on success, 1 on any error.

mod cli;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if cli::is_informational(&err) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    if let Err(e) = pumpforge_observe::tracing_setup::init_tracing(cli.log_filter(), cli.otel) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    let result = cli::generate::run(&cli).await;
    pumpforge_observe::tracing_setup::shutdown_tracing();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::generate::report_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}
