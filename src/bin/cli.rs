//! Bookshelf CLI
//!
//! One-shot, scriptable counterpart to the interactive shell: each
//! subcommand performs a single store operation and prints the same
//! human-readable lines.

use clap::{Parser, Subcommand};

use bookshelf::{Config, Result, SearchQuery, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// Bookshelf CLI
#[derive(Parser, Debug)]
#[command(name = "bookshelf-cli")]
#[command(about = "One-shot commands for the Bookshelf catalog")]
#[command(version)]
struct Args {
    /// Backing file for the catalog
    #[arg(short, long, default_value = bookshelf::config::DEFAULT_DATA_FILE)]
    data_file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a book
    Add {
        /// Book title
        title: String,

        /// Book author
        author: String,

        /// Year of publication
        year: i32,
    },

    /// Remove a book by id
    Remove {
        /// The id to remove
        id: u64,
    },

    /// Search by title, author, and/or year (criteria combine with OR)
    Search {
        /// Title substring (case-insensitive)
        #[arg(short, long)]
        title: Option<String>,

        /// Author substring (case-insensitive)
        #[arg(short, long)]
        author: Option<String>,

        /// Exact publication year
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// List all books
    List,

    /// Change a book's status
    Status {
        /// The id to update
        id: u64,

        /// New status text (e.g. "available" or "checked out")
        status: String,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::builder().data_path(&args.data_file).build();
    let mut store = Store::open(config)?;

    match args.command {
        Commands::Add { title, author, year } => {
            let record = store.add(title, author, year)?;
            println!("Book '{}' added with id {}", record.title, record.id);
        }

        Commands::Remove { id } => {
            if store.remove(id)? {
                println!("Book with id {} removed", id);
            } else {
                println!("Book with id {} not found", id);
            }
        }

        Commands::Search { title, author, year } => {
            let query = SearchQuery { title, author, year };
            let results = store.search(&query);
            if results.is_empty() {
                println!("No books found.");
            }
            for record in results {
                println!("{}", record);
            }
        }

        Commands::List => {
            if store.is_empty() {
                println!("No books in the library.");
            }
            for record in store.list() {
                println!("{}", record);
            }
        }

        Commands::Status { id, status } => {
            if store.change_status(id, status.clone())? {
                println!("Status of book {} changed to '{}'", id, status);
            } else {
                println!("Book with id {} not found", id);
            }
        }
    }

    Ok(())
}
