use std::process::ExitCode;

use anyhow::Context;
use bookclub_app::App;
use bookclub_kernel::settings::Settings;
use clap::Parser;

mod cli;
mod commands;

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let settings =
        Settings::load_from(cli.config_dir).context("failed to load book club settings")?;
    bookclub_telemetry::init(&settings.telemetry)?;

    let app = App::bootstrap(&settings)?;
    commands::run(&app, cli.command).await
}
