//! Terminal front end.
//!
//! Environment:
//! - `ONESUIT_SAVE`: save file path (default `saved_game.json`).
//! - `ONESUIT_SEED`: shuffle seed (default: current time).
//! - `ONESUIT_LOG`: log level printed to stderr (`error` .. `trace`, default off).

use std::env;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};
use onesuit::{FileStore, GameOptions, IoConsole, Session};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = env::var("ONESUIT_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Off);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() -> ExitCode {
    init_logging();

    let store = env::var("ONESUIT_SAVE").map_or_else(|_| FileStore::default(), FileStore::new);
    let seed = env::var("ONESUIT_SEED")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    log::debug!("seed {seed}, saving to {}", store.path().display());

    let mut session = Session::new(IoConsole::stdio(), store, GameOptions::default(), seed);
    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
