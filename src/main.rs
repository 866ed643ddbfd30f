// parascope - Parachain Scope: terminal explorer for MetaMUI networks
// Auctions, crowdloans, runtime constants and RPC endpoint selection

mod app;
mod chain;
mod consts;
mod endpoints;
mod env;
mod format;
mod i18n;
mod parachains;
mod storage;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::{event::handle_key_event, AppOptions, AppState};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use endpoints::create_ws_endpoints;
use env::HostEnv;
use i18n::Translator;
use storage::{FileStore, KvStore, MemoryStore};

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal explorer for MetaMUI parachain auctions and crowdloans", long_about = None)]
struct Cli {
    /// Chain snapshot JSON written by the collector
    #[arg(long, env = "PARASCOPE_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Local storage file (defaults to the platform data directory)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Keep local storage in memory only
    #[arg(long, conflicts_with = "store")]
    no_persist: bool,

    /// `KEY=VALUE` file injected as the secondary environment context
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Locale catalog (`{ "<ns>": { "<key>": "<text>" } }`)
    #[arg(long)]
    locale: Option<PathBuf>,

    /// UI refresh interval in milliseconds
    #[arg(long, default_value_t = app::config::DEFAULT_REFRESH_MS)]
    refresh_ms: u64,

    /// Write logs to this file (filtered by RUST_LOG, default `info`)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Store a custom endpoint URL and exit
    #[arg(long, value_name = "URL")]
    add_endpoint: Option<String>,

    /// Remove a stored custom endpoint URL and exit
    #[arg(long, value_name = "URL")]
    remove_endpoint: Option<String>,

    /// Print the endpoint list and exit
    #[arg(long)]
    list_endpoints: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut store = open_store(&cli)?;
    let translator = match &cli.locale {
        Some(path) => Translator::load(path)?,
        None => Translator::new(),
    };
    let host_env = match &cli.env_file {
        Some(path) => HostEnv::from_file(path)?,
        None => HostEnv::default(),
    };
    let env = host_env.resolve();

    // One-shot endpoint maintenance commands
    if let Some(url) = &cli.add_endpoint {
        if storage::add_custom_endpoint(store.as_mut(), url)? {
            println!("added {}", url);
        } else {
            println!("{} is already stored", url);
        }
        return Ok(());
    }
    if let Some(url) = &cli.remove_endpoint {
        if storage::remove_custom_endpoint(store.as_mut(), url)? {
            println!("removed {}", url);
        } else {
            println!("{} is not stored", url);
        }
        return Ok(());
    }
    if cli.list_endpoints {
        for option in create_ws_endpoints(&translator, &env, store.as_ref()) {
            if option.is_header {
                println!("# {}", option.text);
            } else {
                println!("{:<36} {:<40} {}", option.text, option.value, option.text_by);
            }
        }
        return Ok(());
    }

    let options = AppOptions {
        translator,
        env,
        store,
        snapshot_path: cli.snapshot,
        refresh_ms: cli.refresh_ms,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, options);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
        println!("Error: {:?}", err);
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    options: AppOptions,
) -> Result<()> {
    let mut app = AppState::new(options);
    tracing::info!(endpoints = app.endpoints.len(), "parascope started");

    loop {
        app.on_tick();
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !app.running {
            return Ok(());
        }

        if event::poll(app.refresh_config.ui_interval())? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    handle_key_event(&mut app, key.code);
                }
            }
        }
    }
}

fn open_store(cli: &Cli) -> Result<Box<dyn KvStore>> {
    if cli.no_persist {
        return Ok(Box::new(MemoryStore::new()));
    }

    let path = match &cli.store {
        Some(path) => path.clone(),
        None => FileStore::default_path().context("no data directory; pass --store or --no-persist")?,
    };
    tracing::debug!(path = %path.display(), "Using file store");
    Ok(Box::new(FileStore::new(path)))
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
