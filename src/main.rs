use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;
use tooldir::catalog::{self, CatalogStore, CategoryFilter};
use tooldir::domain::Tool;
use tooldir::navigate::{Navigator, SystemNavigator};
use tooldir::storage::JsonFileStore;
use tooldir::tui::{self, App, TuiRunner};

type Store = CatalogStore<JsonFileStore>;

fn setup_logging(level: Option<&str>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tooldir")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("tooldir.log");

    // The terminal belongs to the TUI, so logs go to a file
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::new()
        .parse_filters(level.unwrap_or("info"))
        .parse_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn open_store(config: &Config) -> Result<Store> {
    let tools = match &config.data.path {
        Some(path) => catalog::load_tools(path).context(format!("Failed to load catalog from {}", path.display()))?,
        None => catalog::bundled_tools().context("Failed to load bundled catalog")?,
    };

    let storage = JsonFileStore::open(&config.storage.path)
        .context(format!("Failed to open storage at {}", config.storage.path.display()))?;

    Ok(CatalogStore::new(tools, storage))
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    let mut store = open_store(config)?;

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
        println!("  Storage: {}", store.storage().path().display());
    }

    match &cli.command {
        None => run_tui(store, config),
        Some(Commands::List {
            query,
            category,
            bookmarks,
        }) => handle_list_command(&mut store, query.as_deref(), category.as_deref(), *bookmarks),
        Some(Commands::Categories) => handle_categories_command(&store),
        Some(Commands::Show { id }) => handle_show_command(&store, *id),
        Some(Commands::Bookmark { id }) => handle_bookmark_command(&mut store, *id),
        Some(Commands::Bookmarks) => handle_bookmarks_command(&store),
        Some(Commands::Open { id }) => handle_open_command(&store, *id),
        Some(Commands::Theme { toggle }) => handle_theme_command(&mut store, *toggle),
    }
}

fn run_tui(store: Store, config: &Config) -> Result<()> {
    info!("Launching TUI mode");
    let terminal = tui::init_terminal().context("Failed to initialize terminal")?;

    let app = App::new(store, SystemNavigator);
    let result = TuiRunner::new(terminal, app, config.tui.tick_rate_ms).run();

    tui::restore_terminal().context("Failed to restore terminal")?;
    result
}

fn find_tool(store: &Store, id: u32) -> Result<&Tool> {
    store.tool(id).ok_or_else(|| tooldir::Error::ToolNotFound(id).into())
}

fn print_tool_row(tool: &Tool, bookmarked: bool) {
    let marker = if bookmarked { "*".blue().to_string() } else { " ".to_string() };
    let featured = if tool.featured { " Featured".magenta().to_string() } else { String::new() };
    println!(
        "{} {:>4}  {}{}  {}",
        marker,
        tool.id,
        tool.name.bold(),
        featured,
        tool.category.dimmed()
    );
}

fn handle_list_command(store: &mut Store, query: Option<&str>, category: Option<&str>, bookmarks: bool) -> Result<()> {
    info!("Listing tools - query: {:?}, category: {:?}, bookmarks: {}", query, category, bookmarks);
    if let Some(q) = query {
        store.set_search_query(q);
    }
    if let Some(c) = category {
        store.set_category(CategoryFilter::from_label(c));
    }
    store.set_bookmarks_only(bookmarks);

    let visible = store.visible();
    for tool in &visible {
        print_tool_row(tool, store.is_bookmarked(tool.id));
    }
    let count = visible.len();
    println!("{}", format!("{} tool{} found", count, if count == 1 { "" } else { "s" }).dimmed());
    Ok(())
}

fn handle_categories_command(store: &Store) -> Result<()> {
    info!("Listing categories");
    for category in store.categories() {
        let count = store.tools().iter().filter(|t| &t.category == category).count();
        println!("{}  {}", category.cyan(), format!("({})", count).dimmed());
    }
    Ok(())
}

fn handle_show_command(store: &Store, id: u32) -> Result<()> {
    info!("Showing tool: {}", id);
    let tool = find_tool(store, id)?;

    let featured = if tool.featured { format!(" {}", "Featured".magenta()) } else { String::new() };
    println!("{}{}", tool.name.bold().cyan(), featured);
    println!("{}", tool.category.dimmed());
    println!();
    println!("{}", tool.description);
    if !tool.tags.is_empty() {
        println!();
        println!("{}", tool.tags.iter().map(|t| format!("[{}]", t)).collect::<Vec<_>>().join(" "));
    }
    println!();
    println!("{} {}", "Website:".green(), tool.website);
    println!("{} {}", "Logo:".green(), tool.logo);
    if store.is_bookmarked(id) {
        println!("{}", "Bookmarked".blue());
    }
    Ok(())
}

fn handle_bookmark_command(store: &mut Store, id: u32) -> Result<()> {
    info!("Toggling bookmark: {}", id);
    let name = find_tool(store, id)?.name.clone();

    if store.toggle_bookmark(id).context("Failed to save bookmarks")? {
        println!("{} {}", "Bookmarked:".green(), name);
    } else {
        println!("{} {}", "Removed bookmark:".yellow(), name);
    }
    Ok(())
}

fn handle_bookmarks_command(store: &Store) -> Result<()> {
    info!("Listing bookmarks");
    let bookmarked = store.bookmarked_tools();
    if bookmarked.is_empty() {
        println!("{}", "No bookmarks yet".dimmed());
    }
    for tool in bookmarked {
        print_tool_row(tool, true);
    }
    Ok(())
}

fn handle_open_command(store: &Store, id: u32) -> Result<()> {
    info!("Opening tool: {}", id);
    let tool = find_tool(store, id)?;
    SystemNavigator.open(&tool.website)?;
    println!("{} {}", "Opening:".green(), tool.website);
    Ok(())
}

fn handle_theme_command(store: &mut Store, toggle: bool) -> Result<()> {
    let theme = if toggle {
        store.toggle_theme().context("Failed to save theme")?
    } else {
        store.theme()
    };
    println!("{} {}", "Theme:".green(), theme.name());
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging
    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
