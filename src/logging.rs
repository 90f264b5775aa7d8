#![cfg(feature = "std")]

use std::env;
use std::fmt;
use std::string::String;
use log::{self, Level, LevelFilter, Metadata, Record};

const CRATE_TARGET: &str = "battleships";

/// Logger for game events. Records are tagged with the engine module that
/// emitted them (`game`, `placement`, `targeting`, ...); records from other
/// crates are only shown at `warn` and above.
struct GameLogger;

impl log::Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
            && (is_game_target(metadata.target()) || metadata.level() <= Level::Warn)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record.level(), record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

fn is_game_target(target: &str) -> bool {
    target == CRATE_TARGET || target.starts_with("battleships::")
}

/// `[LEVEL module] message`, with the crate prefix dropped from our own
/// module paths.
fn format_record(level: Level, target: &str, args: &fmt::Arguments<'_>) -> String {
    let module = target
        .strip_prefix("battleships::")
        .unwrap_or(if target == CRATE_TARGET { "core" } else { target });
    format!("[{:<5} {}] {}", level, module, args)
}

static LOGGER: GameLogger = GameLogger;

/// Initialize logging with a level taken from the `BATTLESHIPS_LOG` environment variable.
/// Defaults to `warn` so game events do not interleave with the board display.
pub fn init_logging() {
    let level = env::var("BATTLESHIPS_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tagged_with_engine_module() {
        let line = format_record(Level::Info, "battleships::game", &format_args!("Human wins after 9 attacks"));
        assert_eq!(line, "[INFO  game] Human wins after 9 attacks");
    }

    #[test]
    fn test_foreign_target_kept_verbatim() {
        let line = format_record(Level::Warn, "clap_builder", &format_args!("odd"));
        assert_eq!(line, "[WARN  clap_builder] odd");
    }

    #[test]
    fn test_game_targets() {
        assert!(is_game_target("battleships"));
        assert!(is_game_target("battleships::targeting"));
        assert!(!is_game_target("battleships_extra"));
        assert!(!is_game_target("rand"));
    }
}
