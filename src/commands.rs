//! Subcommand execution and terminal output.

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::blog;
use crate::cli::{Cli, Commands};
use crate::config::FolioConfig;
use crate::content::{Book, ContentItem, ContentStore, ProjectStatus, ReadingStatus};
use crate::log;
use crate::memo::MetadataMemo;
use crate::search::{self, ScoredResult};

/// Load the content store and run the requested subcommand.
pub fn run(cli: &Cli, config: &FolioConfig) -> Result<()> {
    let store = ContentStore::load(&config.data).with_context(|| {
        format!("failed to load content from `{}`", config.data.dir.display())
    })?;

    match &cli.command {
        Commands::Blog { query, tag } => list_blog(&store, query, tag.as_deref()),
        Commands::Tags => list_tags(&store),
        Commands::Meta { id } => show_meta(&store, id),
        Commands::Search { query, json, .. } => run_search(&store, config, query, *json),
        Commands::Projects {
            status,
            category,
            tag,
        } => list_projects(&store, *status, category.as_deref(), tag.as_deref()),
        Commands::Library { status } => list_library(&store, *status),
    }
}

fn list_blog(store: &ContentStore, query: &str, tag: Option<&str>) -> Result<()> {
    let memo = MetadataMemo::new();
    let items = blog::filter_blog_items(store.blog_items(), query, tag);

    for item in &items {
        print_blog_item(item, &memo);
    }
    log!("blog"; "{} of {} items", items.len(), store.blog_items().len());
    Ok(())
}

fn print_blog_item(item: &ContentItem, memo: &MetadataMemo) {
    let meta = memo.get(item);
    let kind = format!("[{}]", item.kind().name());
    println!("{} {} {}", kind.dimmed(), item.title().bold(), item.id().dimmed());
    println!(
        "    {} · {} min · {}",
        meta.date,
        meta.reading_time,
        meta.authors.join(", ")
    );
    if !meta.tags.is_empty() {
        println!("    #{}", meta.tags.join(" #").cyan());
    }
}

fn list_tags(store: &ContentStore) -> Result<()> {
    for tag in blog::list_all_tags(store.blog_items()) {
        println!("{tag}");
    }
    Ok(())
}

fn show_meta(store: &ContentStore, id: &str) -> Result<()> {
    let Some(item) = store.blog_item_by_id(id) else {
        bail!("blog item `{id}` not found");
    };
    let meta = blog::aggregate_metadata(item);

    println!("{}", item.title().bold());
    println!("  kind:         {}", item.kind().name());
    println!("  date:         {}", meta.date);
    println!("  authors:      {}", meta.authors.join(", "));
    println!("  reading time: {} min", meta.reading_time);
    println!("  tags:         {}", meta.tags.join(", "));

    if let ContentItem::Series(_) = item {
        let parts = item.accept(&blog::FlattenVisitor);
        for (n, part) in parts.iter().enumerate() {
            println!("  part {}: {} ({} min)", n + 1, part.title, part.reading_time);
        }
    }
    Ok(())
}

fn run_search(store: &ContentStore, config: &FolioConfig, query: &str, json: bool) -> Result<()> {
    let results = search::search_content(
        store,
        query,
        &config.search.collections,
        config.search.limit,
    );

    if json {
        let output =
            serde_json::to_string_pretty(&results).context("failed to serialize results")?;
        println!("{output}");
        return Ok(());
    }

    for result in &results {
        print_result(result);
    }
    log!("search"; "{} results for `{}`", results.len(), query);
    Ok(())
}

fn print_result(result: &ScoredResult) {
    println!(
        "{:>6.2}  {} {}  {}",
        result.score,
        format!("[{}]", result.kind.name()).dimmed(),
        result.title.bold(),
        result.url.cyan()
    );
}

fn list_projects(
    store: &ContentStore,
    status: Option<ProjectStatus>,
    category: Option<&str>,
    tag: Option<&str>,
) -> Result<()> {
    let projects = store.select_projects(status, category, tag);

    for project in &projects {
        println!(
            "{} {} {}",
            format!("[{}]", project.status).dimmed(),
            project.title.bold(),
            project.id.dimmed()
        );
        println!("    {}", project.description);
    }
    log!("projects"; "{} projects", projects.len());
    Ok(())
}

fn list_library(store: &ContentStore, status: Option<ReadingStatus>) -> Result<()> {
    let books: Vec<&Book> = match status {
        Some(status) => store.books_by_status(status),
        None => store.books().iter().collect(),
    };

    for book in &books {
        let star = if book.favorite { "★ " } else { "" };
        println!(
            "{} {}{} by {}",
            format!("[{}]", book.reading_status).dimmed(),
            star.yellow(),
            book.title.bold(),
            book.author
        );
    }
    log!("library"; "{} books", books.len());
    Ok(())
}
