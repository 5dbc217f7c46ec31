use clap::Parser;
use reveal_core::Revealer;
use std::path::Path;
use std::process::ExitCode;

mod cli;
mod logging;
mod notify;
mod settings;

use cli::{Cli, Command, RevealArgs};
use settings::AppSettings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = AppSettings::load();
    logging::init_logging(settings.debug_logging, cli.verbose);

    log::info!("reveal-explorer {} starting", env!("CARGO_PKG_VERSION"));

    let revealer = Revealer::detect(settings.mount_drive(cli.mount_drive.as_deref()));

    match cli.into_command() {
        Command::Reveal(args) => reveal(&revealer, args).await,
        Command::Translate { path } => translate(&revealer, &path).await,
    }
}

async fn translate(revealer: &Revealer, path: &str) -> ExitCode {
    match revealer.target_path(Path::new(path)).await {
        Ok(target) => {
            println!("{}", target);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Translate failed: {}", e);
            eprintln!("{}", notify::error_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn reveal(revealer: &Revealer, args: RevealArgs) -> ExitCode {
    let result = revealer
        .reveal_current(args.path.as_deref(), args.active_document.as_deref())
        .await;

    match result {
        Ok(outcome) => {
            log::debug!(
                "Reveal finished: {} (exit code {:?})",
                outcome.command_line,
                outcome.exit_code
            );
            println!("{}", notify::success_message(&outcome));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Reveal failed: {}", e);
            eprintln!("{}", notify::error_message(&e));
            ExitCode::FAILURE
        }
    }
}
