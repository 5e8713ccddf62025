//! Bookshelf Interactive Shell
//!
//! Runs the numbered-menu loop over stdin/stdout.

use std::io;

use clap::Parser;

use bookshelf::shell::Session;
use bookshelf::{Config, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// Bookshelf interactive shell
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(about = "Personal library catalog manager")]
#[command(version)]
struct Args {
    /// Backing file for the catalog
    #[arg(short, long, default_value = bookshelf::config::DEFAULT_DATA_FILE)]
    data_file: String,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bookshelf=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::debug!("Bookshelf v{}, data file: {}", bookshelf::VERSION, args.data_file);

    let config = Config::builder().data_path(&args.data_file).build();

    let store = match Store::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(store, stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}
