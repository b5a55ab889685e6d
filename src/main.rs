use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use libris::config::Config;
use libris::route::Route;
use libris::ui::runtime;

/// Terminal browser for a book and author REST backend.
#[derive(Debug, Parser)]
#[command(name = "libris", version, about)]
struct CliArgs {
    /// Path to the config file (default: platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the REST backend; overrides the config file
    #[arg(long)]
    server: Option<String>,

    /// Route to open at startup, e.g. "/book/42"
    #[arg(long, default_value = "/book")]
    open: String,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(server) = &args.server {
        config.server.base_url = server.clone();
        config.normalize();
        config.validate()?;
    }

    let initial_route = Route::parse(&args.open)
        .with_context(|| format!("Unrecognized route '{}'", args.open))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;

    runtime::run(config, runtime.handle().clone(), initial_route)?;
    Ok(())
}

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default for TUI mode.
/// Set `LIBRIS_LOG` env var to a file path to enable logging.
///
/// Log files are created with unique names to prevent conflicts when
/// multiple instances run simultaneously: `{path}.{timestamp}.{pid}`
fn init_tracing() {
    let Some(log_path) = std::env::var("LIBRIS_LOG").ok() else {
        // No logging configured - skip initialization entirely
        // This is the default for TUI mode to avoid corrupting the display
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn defaults_open_the_book_list() {
        let args = CliArgs::parse_from(["libris"]);
        assert_eq!(args.open, "/book");
        assert!(args.config.is_none());
        assert!(args.server.is_none());
    }

    #[test]
    fn accepts_server_and_route_overrides() {
        let args = CliArgs::parse_from([
            "libris",
            "--server",
            "http://books.internal:8080",
            "--open",
            "/book/42",
        ]);
        assert_eq!(args.server.as_deref(), Some("http://books.internal:8080"));
        assert_eq!(args.open, "/book/42");
    }
}
