//! `catfact`: fetch and print cat facts and breeds.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catfact_core::{CatFactService, DisplayState, FactPresenter, Transport};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.client_config();
    info!(base_url = %config.base_url, "using cat fact API");
    let service = CatFactService::new(&config);

    match cli.command {
        Commands::Fact { max_length } if cli.json => {
            let fact = service
                .get_cat_fact(max_length)
                .await
                .context("Failed to get a cat fact")?;
            println!("{}", serde_json::to_string_pretty(&fact)?);
        }
        Commands::Fact { max_length } => {
            let presenter = FactPresenter::new(service);
            println!("{}", fetch_fact_text(&presenter, max_length).await?);
        }
        Commands::Breeds { limit } => {
            let page = service
                .get_cat_breeds(limit)
                .await
                .context("Failed to get cat breeds")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&page)?);
                return Ok(());
            }
            for breed in &page.data {
                println!(
                    "{} ({}; coat: {}; pattern: {})",
                    breed.breed,
                    or_dash(&breed.country),
                    or_dash(&breed.coat),
                    or_dash(&breed.pattern)
                );
            }
            let p = &page.pagination;
            println!(
                "-- {} of {} breeds, page {} of {}",
                page.len(),
                p.total,
                p.current_page,
                p.last_page
            );
        }
    }

    Ok(())
}

/// Run one fetch through the presenter and return the text to show.
///
/// Awaits the fetch task itself, so a task that dies without publishing a
/// settled state is reported instead of waited on forever.
async fn fetch_fact_text<T: Transport + 'static>(
    presenter: &FactPresenter<T>,
    max_length: Option<u32>,
) -> Result<String> {
    presenter
        .request_fact(max_length)
        .await
        .context("Fact request task failed")?;

    match presenter.current() {
        DisplayState::Fact(text) => Ok(text),
        DisplayState::Failed(message) => bail!("Failed to get a cat fact: {message}"),
        other => bail!("Fact request ended in an unexpected state: {other:?}"),
    }
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
