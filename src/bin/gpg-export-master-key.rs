use std::process::ExitCode;

use clap::Parser;

use gnupgtools::cli::{self, ExportCli, output};

fn main() -> ExitCode {
    let args = ExportCli::parse();
    cli::init_logging();

    match cli::commands::export::execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}
