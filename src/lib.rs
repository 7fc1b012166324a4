//! Interfly: browse, search and filter software project listings.
//!
//! This crate wires the catalog layers together and renders the view in the
//! terminal.

pub mod bootstrap;
pub mod cli;
pub mod render;

use std::io::Write;

use anyhow::Context;
use ifly_app::models::{CategoryOptionDto, ListingCardDto};
use ifly_app::CatalogApp;
use ifly_core::{CatalogStatus, CategoryId, ListingId};
use serde::Serialize;

use crate::cli::Cli;

/// JSON shape of `--json` output.
#[derive(Debug, Serialize)]
struct CatalogReport {
    catalog: CatalogStatus,
    search_term: String,
    category: String,
    listings: Vec<ListingCardDto>,
}

/// Resolve configuration, mount one catalog view and render it to `out`.
pub async fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = bootstrap::resolve_config(cli.config.clone(), cli.endpoint.clone())?;
    let app = bootstrap::build_catalog_app(&config)?;
    render_view(&app, &cli, out).await
}

/// Mount a view on `app`, apply the filters from `cli` and render the result.
pub async fn render_view(app: &CatalogApp, cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    if cli.categories {
        let options: Vec<CategoryOptionDto> = app
            .taxonomy()
            .iter()
            .map(|category| CategoryOptionDto::new(category, &CategoryId::wildcard()))
            .collect();
        write!(out, "{}", render::category_list(&options))?;
        return Ok(());
    }

    let mut session = app.mount();

    // Inputs are applied before the load resolves; the view picks them up
    if let Some(term) = &cli.search {
        session.set_search_term(term.clone());
    }
    if let Some(category) = &cli.category {
        session
            .select_category(CategoryId::from(category.as_str()))
            .with_context(|| format!("Cannot filter by category '{category}'"))?;
    }

    let status = session.wait_until_settled().await;

    if let Some(id) = &cli.details {
        let target = session.view_details(ListingId::from(id.as_str()));
        match session.listing(&target.listing_id) {
            Some(listing) => write!(out, "{}", render::detail(&listing))?,
            None => writeln!(out, "No listing with id {id} ({target})")?,
        }
        return Ok(());
    }

    let cards = session.cards();
    if cli.json {
        let report = CatalogReport {
            catalog: status,
            search_term: session.search_term().to_string(),
            category: session.selected_category().to_string(),
            listings: cards,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", render::category_bar(&session.category_options()))?;
    if let Some(notice) = render::status_notice(&status, cards.len()) {
        writeln!(out, "{notice}")?;
    }
    write!(out, "{}", render::cards(&cards))?;

    session.teardown();
    Ok(())
}
