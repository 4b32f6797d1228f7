use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Maps the `-v` count to a level. Dropped datagrams are logged at WARN,
/// so they show up without any flag.
pub fn level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    }
}

// The returned guards must be kept alive so the file writer gets flushed
pub fn init(level: tracing::Level, console: bool, log_file: Option<PathBuf>) -> Vec<WorkerGuard> {
    let mut guards = Vec::new();
    let filter = LevelFilter::from_level(level);

    // stdout carries the decoded JSON lines, console logs go to stderr
    let console_layer = console.then(|| {
        fmt::layer()
            .with_level(true) // include levels in formatted output
            .with_target(true) // include targets
            .with_thread_ids(false) // don't include the thread ID of the current thread
            .with_thread_names(false) // don't include the name of the current thread
            .compact() // use the `Compact` formatting style.
            .with_writer(std::io::stderr)
            .with_filter(filter)
    });

    let file_layer = log_file.and_then(|path| {
        let name = path.file_name()?.to_os_string();
        let dir = match path.parent() {
            Some(dir) if dir != Path::new("") => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
        guards.push(guard);
        Some(
            fmt::layer()
                .with_level(true)
                .with_target(true)
                .with_ansi(false)
                .compact()
                .with_writer(writer)
                .with_filter(filter),
        )
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
    guards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_shows_warnings() {
        assert_eq!(level(0), tracing::Level::WARN);
        assert_eq!(level(1), tracing::Level::INFO);
        assert_eq!(level(2), tracing::Level::DEBUG);
        assert_eq!(level(7), tracing::Level::DEBUG);
    }
}
