//! Log setup: `env_logger` writing to stderr, optionally tee'd into a file.
//!
//! Normal mode prints bare messages (warnings and errors prefixed and
//! colored). Verbose mode adds timestamps, levels, and module targets.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;

/// Environment variable for fine-grained filters, e.g. `movielens_db=debug`.
const LOG_ENV_VAR: &str = "MOVIELENS_LOG";

pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = match logfile {
        Some(path) => Some(File::create(path).map_err(|e| {
            CliError::config(format!("Cannot create log file {}: {}", path.display(), e))
        })?),
        None => None,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var(LOG_ENV_VAR) {
        builder.parse_filters(&filters);
    }
    builder
        .format(move |buf, record| {
            if verbose {
                writeln!(
                    buf,
                    "{} {:<5} {}: {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    record.args(),
                )
            } else {
                match record.level() {
                    Level::Error => writeln!(
                        buf,
                        "{} {}",
                        "error:".if_supports_color(Stderr, |t| t.red()),
                        record.args(),
                    ),
                    Level::Warn => writeln!(
                        buf,
                        "{} {}",
                        "warning:".if_supports_color(Stderr, |t| t.yellow()),
                        record.args(),
                    ),
                    _ => writeln!(buf, "{}", record.args()),
                }
            }
        })
        .target(env_logger::Target::Pipe(Box::new(TeeWriter {
            console: io::stderr(),
            file,
        })));

    builder
        .try_init()
        .map_err(|e| CliError::config(format!("Failed to initialize logging: {}", e)))
}

/// Writes every record to stderr and, if configured, to a log file with
/// ANSI escapes removed.
struct TeeWriter {
    console: io::Stderr,
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.console.write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.console.flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}
