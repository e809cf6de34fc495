//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported on stderr before exiting"
)]
fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("catchwise: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> eyre::Result<()> {
    catchwise_cli::run()?;
    Ok(())
}
