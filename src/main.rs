use std::io::stdout;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use autosuggest::app::App;
use autosuggest::config::{self, Config, SourceKind};
use autosuggest::error::AutosuggestError;
use autosuggest::fetch::spawn_worker;
use autosuggest::source;
use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::unbounded_channel;

/// Type to search, arrows to navigate, Enter or click to select
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Where suggestions come from
    #[arg(long, value_enum)]
    source: Option<SourceKind>,

    /// Remote endpoint, queried as <url>?name_like=<query>
    #[arg(long)]
    url: Option<String>,

    /// Quiet period before a fetch, in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Config file (defaults to ~/.config/autosuggest/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let config = load_settings(&args)?;
    let source = source::from_config(&config.source)?;

    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let worker = spawn_worker(source, request_rx, response_tx);

    let mut app = App::new(&config);
    app.set_channels(request_tx, response_rx);

    let terminal = ratatui::init();
    let result = run(terminal, &mut app);
    let _ = execute!(stdout(), DisableMouseCapture, DisableFocusChange);
    ratatui::restore();

    // Dropping the request sender lets the worker thread finish
    app.close_channels();
    if worker.join().is_err() {
        log::error!("Fetch worker panicked");
    }

    result?;

    if let Some(name) = app.selected_name() {
        println!("{}", name);
    }

    Ok(())
}

fn load_settings(args: &Args) -> Result<Config, AutosuggestError> {
    let mut config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };

    if let Some(kind) = args.source {
        config.source.kind = kind;
    }
    if let Some(url) = &args.url {
        config.source.url = url.clone();
    }
    if let Some(debounce_ms) = args.debounce_ms {
        config.autocomplete.debounce_ms = debounce_ms;
    }

    Ok(config)
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.next_wakeup(Instant::now()))? {
            app.handle_event(event::read()?);
        }
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file in the temp dir so output never lands on the TUI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    let path = std::env::temp_dir().join("autosuggest.log");
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
