use std::process::ExitCode;

use clap::Parser;
use shamir_cli::{logging, Cli, Status};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = cli.log.as_deref();
    if let Err(err) = logging::init(cli.verbose, filter, cli.log_format) {
        eprintln!("warning: logging disabled: {err}");
    }

    match shamir_cli::run(&cli) {
        Ok(output) => {
            println!("{output}");
            Status::Success.into()
        }
        Err(err) => {
            let status = Status::from_error(&err);
            tracing::debug!(?status, "command failed");
            eprintln!("error: {err:#}");
            status.into()
        }
    }
}
