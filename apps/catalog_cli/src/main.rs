mod browse;
mod render;

use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, load_settings_from, CatalogSource, CatalogStore, ClientSettings,
    HttpCatalogSource,
};
use shared::protocol::SearchQuery;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Browse and search the audio catalog")]
struct Cli {
    /// Settings file; defaults to ./catalog.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long)]
    search_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the home sections once.
    Home {
        #[arg(long = "type")]
        content_type: Option<String>,
    },
    /// Run a single search.
    Search {
        query: String,
        #[arg(long = "type")]
        content_type: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Interactive session: filter with `:type <t>` / `:all`, type to search.
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = resolve_settings(&cli);
    info!(
        base_url = %settings.base_url,
        search_url = %settings.search_url,
        "catalog endpoints"
    );
    let source = HttpCatalogSource::new(&settings)?;

    match cli.command {
        Command::Home { content_type } => {
            let mut store = CatalogStore::new();
            store.replace(source.fetch_home_sections().await?);
            println!(
                "{}",
                render::render_chips(&store.content_type_labels(), content_type.as_deref())
            );
            print!(
                "{}",
                render::render_sections(&store.filtered(content_type.as_deref()))
            );
        }
        Command::Search {
            query,
            content_type,
            page,
            limit,
        } => {
            let query = SearchQuery::new(query, content_type)
                .with_page(page)
                .with_limit(limit.or(settings.search_limit));
            let sections = source.search_content(&query).await?;
            print!("{}", render::render_sections(&sections));
        }
        Command::Browse => {
            let source: Arc<dyn CatalogSource> = Arc::new(source);
            browse::run(source, &settings).await?;
        }
    }

    Ok(())
}

fn resolve_settings(cli: &Cli) -> ClientSettings {
    let mut settings = match &cli.config {
        Some(path) => load_settings_from(path),
        None => load_settings(),
    };
    if let Some(base_url) = &cli.base_url {
        settings.base_url = base_url.clone();
    }
    if let Some(search_url) = &cli.search_url {
        settings.search_url = search_url.clone();
    }
    settings
}
