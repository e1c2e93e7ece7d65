//! Console logging setup shared by anything embedding the engine.

use colored::Colorize;
use env_logger::Builder;
use log::LevelFilter;

/// Initialises the global logger with the engine's console format.
///
/// Safe to call more than once; later calls are ignored. `RUST_LOG` still
/// overrides the default filters.
pub fn init() {
    let _ = Builder::new()
        .format(|buf, record| {
            use std::io::Write;

            let ts = chrono::offset::Local::now().format("%Y-%m-%dT%H:%M:%S");

            let colored_level = match record.level() {
                log::Level::Error => record.level().to_string().red().bold(),
                log::Level::Warn => record.level().to_string().yellow().bold(),
                log::Level::Info => record.level().to_string().green().bold(),
                log::Level::Debug => record.level().to_string().blue().bold(),
                log::Level::Trace => record.level().to_string().cyan().bold(),
            };

            let file_info = format!(
                "{}:{}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0)
            )
            .bright_black();

            writeln!(
                buf,
                "{} {} [{}] - {}",
                file_info,
                ts.to_string().bright_black(),
                colored_level,
                record.args()
            )
        })
        .filter(Some("bilby_engine"), LevelFilter::Debug)
        .filter(Some("bilby_ffi"), LevelFilter::Debug)
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .try_init();
}
