use std::sync::Arc;

use anyhow::{Context, Result};
use client_core::{spawn_coordinator, CatalogSource, ClientSettings, CoordinatorOptions};
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::render::render_view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    SelectType(Option<String>),
    Refresh,
    Quit,
    Search(String),
}

impl BrowseInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            ":quit" | ":q" => BrowseInput::Quit,
            ":refresh" => BrowseInput::Refresh,
            ":all" => BrowseInput::SelectType(None),
            _ => match trimmed.strip_prefix(":type") {
                Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
                    let content_type = rest.trim();
                    BrowseInput::SelectType(
                        (!content_type.is_empty()).then(|| content_type.to_string()),
                    )
                }
                _ => BrowseInput::Search(line.to_string()),
            },
        }
    }
}

pub async fn run(source: Arc<dyn CatalogSource>, settings: &ClientSettings) -> Result<()> {
    let handle = spawn_coordinator(source, CoordinatorOptions::from(settings));
    let mut state = handle.subscribe();
    let mut lines = BufReader::new(io::stdin()).lines();

    println!("{}", render_view(&state.borrow_and_update()));
    loop {
        tokio::select! {
            changed = state.changed() => {
                if changed.is_err() {
                    break;
                }
                println!("\n{}", render_view(&state.borrow_and_update()));
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                let input = BrowseInput::parse(&line);
                debug!(?input, "browse input");
                match input {
                    BrowseInput::Quit => break,
                    BrowseInput::Refresh => handle.refresh(),
                    BrowseInput::SelectType(content_type) => handle.select_type(content_type),
                    BrowseInput::Search(text) => handle.change_search_text(text),
                }
            }
        }
    }

    handle.shutdown().await;
    Ok(())
}

#[cfg(test)]
#[path = "tests/browse_tests.rs"]
mod tests;
