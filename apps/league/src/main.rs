use clap::Parser;
use league::cli::{Cli, init_tracing, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "league manager stopped");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
