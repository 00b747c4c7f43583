//! # Passport Helper CLI Entry Point
//!
//! ## Usage
//!
//! ```bash
//! # Open the interactive guide
//! passport-helper
//!
//! # Ask the assistant a single question
//! passport-helper --ask "How much does it cost?"
//!
//! # Use a custom FAQ table
//! passport-helper --faq ./faq.json
//!
//! # Print the FAQ table and exit
//! passport-helper --list-faq
//! ```
//!
//! Logs go to `passport-helper.log` in the user's data directory while the
//! TUI is running, and to stderr otherwise. Set `PASSPORT_HELPER_LOG` to
//! change the filter (e.g. `debug`).

use passport_helper::faq::FaqTable;
use passport_helper::settings::{JsonFileStorage, SettingsStorage};
use passport_helper::ui::{self, App};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "PASSPORT_HELPER_LOG";

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// Passport Helper - Philippine passport guide with a FAQ assistant
#[derive(Parser, Debug)]
#[command(name = "passport-helper")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A terminal guide to Philippine passport applications", long_about = None)]
struct Args {
    /// Ask the assistant one question, print the answer and exit
    #[arg(long, value_name = "QUESTION", conflicts_with = "list_faq")]
    ask: Option<String>,

    /// Print the FAQ table and exit
    #[arg(long)]
    list_faq: bool,

    /// Load the FAQ table from a JSON file instead of the built-in one
    #[arg(long, value_name = "FILE")]
    faq: Option<PathBuf>,

    /// Settings storage file (defaults to the user config directory)
    #[arg(long, value_name = "FILE")]
    storage: Option<PathBuf>,

    /// Delay before the assistant's reply is shown, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 500)]
    reply_delay_ms: u64,
}

impl Args {
    fn is_interactive(&self) -> bool {
        self.ask.is_none() && !self.list_faq
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = init_logging(args.is_interactive()) {
        eprintln!("Warning: Could not initialize logging: {:#}", e);
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args, &mut io::stdout()).await;

    let _ = panic::take_hook();

    result
}

fn init_logging(to_file: bool) -> Result<()> {
    let default_level = if to_file { "info" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    if to_file {
        let path = log_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create log directory: {}", parent.display())
            })?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow!("{}", e))?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init()
            .map_err(|e| anyhow!("{}", e))?;
    }
    Ok(())
}

fn log_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "passport-helper")
        .context("Could not determine data directory")?;
    Ok(dirs.data_dir().join("passport-helper.log"))
}

/// Load a custom FAQ table, falling back to the built-in one on any error.
fn load_faq(path: Option<&Path>) -> FaqTable {
    match path {
        Some(path) => match FaqTable::load_from(path) {
            Ok(table) => {
                info!("Loaded {} FAQ entries from {}", table.len(), path.display());
                table
            }
            Err(e) => {
                warn!("Using built-in FAQ table: {:#}", e);
                FaqTable::builtin().clone()
            }
        },
        None => FaqTable::builtin().clone(),
    }
}

fn open_storage(path: Option<PathBuf>) -> Result<Box<dyn SettingsStorage>> {
    let storage = match path {
        Some(path) => JsonFileStorage::at(path),
        None => JsonFileStorage::new()?,
    };
    Ok(Box::new(storage))
}

async fn run_application(args: Args, out: &mut dyn Write) -> Result<()> {
    let faq = load_faq(args.faq.as_deref());

    if args.list_faq {
        for entry in faq.entries() {
            writeln!(out, "{}\n    Keywords: {}\n", entry.topic, entry.keywords.join(", "))?;
        }
        writeln!(out, "Total: {} topics", faq.len())?;
        return Ok(());
    }

    if let Some(question) = args.ask.as_deref() {
        writeln!(out, "{}", faq.respond(Some(question)))?;
        return Ok(());
    }

    let storage = open_storage(args.storage).context("Failed to open settings storage")?;
    let mut app = App::new(faq, storage, Duration::from_millis(args.reply_delay_ms));

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Passport Helper v{} started", env!("CARGO_PKG_VERSION"));

    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let size = terminal.size().context("Failed to read terminal size")?;
    app.resize(Rect::new(0, 0, size.width, size.height));

    loop {
        app.tick(Instant::now());

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        // Poll faster while a reply is pending or the page is scrolling
        let poll_timeout = if app.is_busy() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if let Some(event) = event_reader.read_event(poll_timeout)? {
            ui::handle_event(app, &event, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    info!("Passport Helper exiting");
    Ok(())
}
