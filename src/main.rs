use std::{fs::File, path::Path};

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;

use backend::Endpoint;
use config::Config;
use host::Event;

mod adapter;
mod backend;
mod config;
mod error;
mod host;
mod wrap;

#[derive(Parser)]
pub struct Cli {
    /// Generate endpoint, overriding the configured one.
    #[arg(long)]
    endpoint: Option<Endpoint>,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Run as a launcher plugin: events on stdin, render actions on stdout.
    Serve,
    /// Answer a single query and print the render action.
    Query { prompt: Option<String> },
}

fn setup_tracing(log_file: impl AsRef<Path>) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_span_events(FmtSpan::FULL)
        .with_writer(File::create(log_file)?)
        .init();

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let mut config = Config::load()?;
    setup_tracing(&config.log_file)?;

    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }

    let client = backend::Client::new(config.endpoint.clone());
    let adapter = adapter::PromptAdapter::new(config, client);

    match args.mode {
        Mode::Serve => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            host::stdio::serve(stdin.lock(), stdout.lock(), &adapter)?;
        }
        Mode::Query { prompt } => {
            let event = Event::KeywordQuery { argument: prompt };
            let render = adapter.handle_query(&event);
            println!("{}", serde_json::to_string_pretty(&render)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_parser_is_valid() {
        Cli::command().debug_assert();
    }
}
