//! cg-trace CLI entrypoint.
//!
//! Parse args, launch the traced program, write exports, and exit with the
//! appropriate status. Usage errors exit through clap (status 2).
use std::process::ExitCode;

use cg_trace::{Error, cli};

fn main() -> ExitCode {
    let args = match cli::parse(std::env::args_os().skip(1)) {
        Ok(args) => args,
        Err(Error::Usage(e)) => e.exit(),
        Err(e) => {
            eprintln!("cg-trace: {e}");
            return ExitCode::FAILURE;
        }
    };

    cli::init_logging();

    match cli::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cg-trace: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
