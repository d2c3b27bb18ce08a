//! Handlers for the `articles` and `stores` commands.

use std::io::Write;

use anyhow::Context;
use systembolaget::{Article, Articles, CatalogClient, Store, Stores};

pub(crate) async fn run_articles(
    client: &CatalogClient,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = client
        .fetch_articles()
        .await
        .context("failed to fetch article catalog")?;
    tracing::info!(
        articles = catalog.articles.len(),
        created_at = %catalog.created_at,
        "fetched article catalog"
    );

    let mut out = std::io::stdout().lock();
    write_articles(&mut out, &catalog, limit, json)
}

pub(crate) async fn run_stores(
    client: &CatalogClient,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let directory = client
        .fetch_stores()
        .await
        .context("failed to fetch store directory")?;
    tracing::info!(stores = directory.stores.len(), "fetched store directory");

    let mut out = std::io::stdout().lock();
    write_stores(&mut out, &directory, limit, json)
}

fn write_articles<W: Write>(
    out: &mut W,
    catalog: &Articles,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let shown: Vec<&Article> = catalog
        .articles
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    if json {
        let doc = serde_json::json!({
            "created_at": catalog.created_at,
            "message": catalog.info.message,
            "articles": shown,
        });
        serde_json::to_writer_pretty(&mut *out, &doc)?;
        writeln!(out)?;
        return Ok(());
    }

    if !catalog.info.message.is_empty() {
        writeln!(out, "# {}", catalog.info.message)?;
    }
    for article in shown {
        writeln!(out, "{}", article_line(article))?;
    }
    Ok(())
}

fn write_stores<W: Write>(
    out: &mut W,
    directory: &Stores,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let shown: Vec<&Store> = directory
        .stores
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    if json {
        let doc = serde_json::json!({
            "message": directory.info.message,
            "stores": shown,
        });
        serde_json::to_writer_pretty(&mut *out, &doc)?;
        writeln!(out)?;
        return Ok(());
    }

    if !directory.info.message.is_empty() {
        writeln!(out, "# {}", directory.info.message)?;
    }
    for store in shown {
        writeln!(out, "{}", store_line(store))?;
    }
    Ok(())
}

fn article_line(article: &Article) -> String {
    let name = if article.sub_name.is_empty() {
        article.name.clone()
    } else {
        format!("{} {}", article.name, article.sub_name)
    };
    format!("{:>8}  {}  {} kr", article.number, name, article.price)
}

fn store_line(store: &Store) -> String {
    format!(
        "{:>8}  {:<6}  {}",
        store.number,
        store.kind,
        store.address_lines().join(", ")
    )
}
