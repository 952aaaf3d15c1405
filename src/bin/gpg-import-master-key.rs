use std::process::ExitCode;

use clap::Parser;

use gnupgtools::cli::{self, ImportCli, output};

fn main() -> ExitCode {
    let args = ImportCli::parse();
    cli::init_logging();

    match cli::commands::import::execute(&args) {
        Ok(code) => code,
        Err(e) => {
            output::error(format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}
