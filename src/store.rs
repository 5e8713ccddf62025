//! Store Module
//!
//! The record store that owns the in-memory collection and keeps it
//! synchronized with the JSON backing file.
//!
//! ## Responsibilities
//! - Load the collection eagerly at construction
//! - Assign ids on add (`max existing id + 1`)
//! - Persist the whole collection after every mutation
//! - Answer lookups and searches over the collection

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use crate::config::Config;
use crate::error::Result;
use crate::record::Record;

/// The record store
///
/// Single-threaded and synchronous: every mutating operation runs a full
/// read-modify-write-whole-file cycle before returning. The backing file is
/// exclusively owned by one store instance; two stores pointed at the same
/// file are unsupported (last writer wins).
///
/// "Not found" is a business-logic outcome here, reported as `Ok(false)` or
/// `None`; only I/O failures surface as errors.
pub struct Store {
    /// Owned collection, in insertion order
    records: Vec<Record>,

    /// Path of the JSON backing file
    data_path: PathBuf,
}

impl Store {
    /// Open a store with the given config
    ///
    /// Loads the backing file eagerly. An absent file yields an empty
    /// collection; a present but malformed file is reset to empty (logged
    /// at warn level, not surfaced to the caller). Other I/O failures
    /// propagate.
    pub fn open(config: Config) -> Result<Self> {
        let records = load_records(&config.data_path)?;

        Ok(Self {
            records,
            data_path: config.data_path,
        })
    }

    /// Open with a path (convenience method)
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_path(path).build())
    }

    /// Serialize the entire collection to the backing file
    ///
    /// Full overwrite of prior contents; not atomic (no temp-file-and-rename).
    /// Accepted for this scope: a crash mid-write can corrupt the file, which
    /// the lenient load policy then resets to empty.
    pub fn save(&self) -> Result<()> {
        let values: Vec<Value> = self.records.iter().map(Record::to_value).collect();
        let text = serde_json::to_string_pretty(&values)?;
        fs::write(&self.data_path, text)?;
        Ok(())
    }

    /// Add a book and persist the collection
    ///
    /// The new id is `max(existing ids, or 0) + 1`. Ids are not a gap-safe
    /// sequence: removing the highest-id record lets its id be reissued.
    /// The new record gets [`Record::DEFAULT_STATUS`].
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Result<Record> {
        let record = Record::new(self.next_id(), title, author, year);
        self.records.push(record.clone());
        self.save()?;
        Ok(record)
    }

    /// Remove a book by id and persist
    ///
    /// Returns `Ok(false)` (collection untouched) if no record has that id.
    pub fn remove(&mut self, id: u64) -> Result<bool> {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Find a record by id (linear scan)
    pub fn find_by_id(&self, id: u64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Overwrite a record's status and persist
    ///
    /// Only the status field changes; id/title/author/year are immutable.
    /// Returns `Ok(false)` if no record has that id.
    pub fn change_status(&mut self, id: u64, status: impl Into<String>) -> Result<bool> {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.status = status.into();
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Search by any combination of title, author, and year
    ///
    /// The criteria combine with OR, not AND: a record matching any one
    /// given criterion qualifies. Title and author match by case-insensitive
    /// substring, year by equality. An empty query matches nothing.
    pub fn search(&self, query: &SearchQuery) -> Vec<&Record> {
        self.records.iter().filter(|r| query.matches(r)).collect()
    }

    /// All records, in insertion order
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the backing file
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    fn next_id(&self) -> u64 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }
}

/// Load the collection from the backing file
///
/// Recovery policy for malformed persisted data: reset to an empty
/// collection without surfacing an error. This mirrors the whole-file
/// overwrite model (the next save rewrites the file) but silently discards
/// whatever the file held; kept deliberately, logged at warn level.
fn load_records(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let text = fs::read_to_string(path)?;

    let values: Vec<Value> = match serde_json::from_str(&text) {
        Ok(values) => values,
        Err(err) => {
            warn!(path = %path.display(), %err, "malformed backing file, starting empty");
            return Ok(Vec::new());
        }
    };

    let mut records = Vec::with_capacity(values.len());
    for value in &values {
        match Record::from_value(value) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(path = %path.display(), %err, "malformed record in backing file, starting empty");
                return Ok(Vec::new());
            }
        }
    }

    Ok(records)
}

/// Search criteria for [`Store::search`]
///
/// Each field is optional; given criteria combine with OR.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
}

impl SearchQuery {
    /// Query matching titles containing `title` (case-insensitive)
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Query matching authors containing `author` (case-insensitive)
    pub fn by_author(author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            ..Self::default()
        }
    }

    /// Query matching records published in `year`
    pub fn by_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    fn matches(&self, record: &Record) -> bool {
        let title_hit = self
            .title
            .as_deref()
            .is_some_and(|t| record.title.to_lowercase().contains(&t.to_lowercase()));

        let author_hit = self
            .author
            .as_deref()
            .is_some_and(|a| record.author.to_lowercase().contains(&a.to_lowercase()));

        let year_hit = self.year.is_some_and(|y| record.year == y);

        title_hit || author_hit || year_hit
    }
}
