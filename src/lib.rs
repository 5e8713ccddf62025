//! # Bookshelf
//!
//! A personal library catalog manager with:
//! - A JSON flat-file backing store (human-readable, non-ASCII safe)
//! - Add/remove/search/list/change-status operations over book records
//! - An interactive numbered-menu shell, testable without a terminal
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           Interactive Shell                 │
//! │     (menu dispatch over BufRead/Write)      │
//! └─────────────────────┬───────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────┐
//! │                  Store                      │
//! │    (owned Vec<Record>, id generation)       │
//! └─────────────────────┬───────────────────────┘
//!                       │
//!                       ▼
//!               ┌──────────────┐
//!               │ Backing file │
//!               │ (books.json) │
//!               └──────────────┘
//! ```
//!
//! Every mutation rewrites the whole backing file; the store is
//! single-threaded and exclusively owns its file.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, ShelfError};
pub use config::Config;
pub use record::Record;
pub use store::{SearchQuery, Store};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Bookshelf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
