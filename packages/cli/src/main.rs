//! `seedpass` binary

use clap::Parser;
use seedpass_cli::{Cli, TerminalPrompter};
use seedpass_common::{LOG_TARGET, LoggingTransformer};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    LoggingTransformer::init();

    let cli = Cli::parse();
    match seedpass_cli::run(cli, &mut TerminalPrompter).await {
        Ok(output) => {
            println!("{}", output.as_str());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!(target: LOG_TARGET, "error backtrace:\n{:?}", e.backtrace());
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
