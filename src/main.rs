mod config;
mod error;
mod logger;
mod render;
mod repl;
mod store;

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{LevelFilter, debug};
use termfolio_core::config::TYPEWRITER_DELAY;
use termfolio_core::models::SiteContent;
use termfolio_core::{
    ContentError, Interpreter, KeyValueStore, MemoryStore, Session, SessionOptions, Shell,
};

use config::{APP_NAME, SITE_JSON, STORE_FILE_NAME};
use error::AppError;
use store::JsonFileStore;

#[derive(Parser, Debug)]
#[command(name = "termfolio", version)]
#[command(about = "Interactive terminal portfolio")]
struct Args {
    /// JSON file persisting history and settings (default: ~/.termfolio.json)
    #[arg(long, conflicts_with = "ephemeral")]
    store: Option<PathBuf>,

    /// Keep history and settings in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Site content JSON (default: the bundled content)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Delay between typed characters when the typewriter is on
    #[arg(long, default_value_t = TYPEWRITER_DELAY.as_millis() as u64)]
    typewriter_delay_ms: u64,

    /// Do not record blank lines in history
    #[arg(long)]
    skip_blank_history: bool,

    /// Read whole lines even when stdin is a terminal
    #[arg(long)]
    line_mode: bool,

    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(args.log_level);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", APP_NAME, e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let content = load_content(&args)?;
    let session = Session::with_options(
        open_store(&args)?,
        SessionOptions {
            record_blank_history: !args.skip_blank_history,
        },
    );
    let mut shell = Shell::new(Interpreter::from_content(&content), session);
    let delay = Duration::from_millis(args.typewriter_delay_ms);

    if args.line_mode || !io::stdin().is_terminal() {
        repl::run_lines(&mut shell, delay).await
    } else {
        repl::run_raw(&mut shell, delay).await
    }
}

fn load_content(args: &Args) -> Result<SiteContent, AppError> {
    let content = match &args.content {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(ContentError::from)?;
            SiteContent::from_json(&raw)?
        }
        None => SiteContent::from_json(SITE_JSON)?,
    };
    Ok(content)
}

fn open_store(args: &Args) -> Result<Box<dyn KeyValueStore>, AppError> {
    if args.ephemeral {
        return Ok(Box::new(MemoryStore::new()));
    }

    let path = match &args.store {
        Some(path) => path.clone(),
        None => std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(STORE_FILE_NAME))
            .ok_or(AppError::NoHome)?,
    };
    let store = JsonFileStore::open(path)?;
    debug!("persisting session to {}", store.path().display());
    Ok(Box::new(store))
}
