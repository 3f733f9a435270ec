use clap::Parser;
use code_snapshot::args::Args;
use code_snapshot::error::AppError;
use code_snapshot::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.behavior.verbose) {
        presentation::print_error(&AppError::from(e));
        return ExitCode::FAILURE;
    }

    match code_snapshot::run(args) {
        Ok(result) => {
            presentation::print_success(&result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            presentation::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
