use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod input;
mod output;

#[derive(Parser)]
#[command(
    name = "filterql",
    version = "0.1.0",
    about = "Render logical filters into N1QL fragments"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Render {
            filter,
            options,
            json,
        } => {
            let options = input::load_options(&options)?;
            debug!(?options, "resolved options");

            let document = input::read_document(&filter)?;
            let result = stringify::stringify_json(&document, &options)?;

            let rendered = if json {
                output::format_json(&result)?
            } else {
                output::format_text(&result)?
            };
            println!("{rendered}");
        }
        Commands::Ast { filter } => {
            let document = input::read_document(&filter)?;
            let ast = filter_syntax::decode::from_str(&document)?;
            println!("{ast}");
        }
    }

    Ok(())
}
