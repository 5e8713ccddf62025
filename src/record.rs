//! Record type
//!
//! A `Record` is one catalog entry: id, title, author, year, status.
//! Pure data holder; records are created, mutated, and destroyed only
//! through [`Store`](crate::store::Store) operations.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::{Result, ShelfError};

/// One catalog entry (book)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique positive identifier, assigned by the store
    pub id: u64,

    /// Book title (free-form, may contain non-ASCII text)
    pub title: String,

    /// Book author
    pub author: String,

    /// Year of publication
    pub year: i32,

    /// Availability marker (free text, e.g. "available" / "checked out")
    pub status: String,
}

impl Record {
    /// Status assigned to every newly created record
    pub const DEFAULT_STATUS: &'static str = "available";

    /// Construct a record with the default status
    pub fn new(id: u64, title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            status: Self::DEFAULT_STATUS.to_string(),
        }
    }

    /// Serialize into a JSON mapping with keys `id, title, author, year, status`
    pub fn to_value(&self) -> Value {
        json!({
            "id": self.id,
            "title": self.title,
            "author": self.author,
            "year": self.year,
            "status": self.status,
        })
    }

    /// Reconstruct a record from a JSON mapping
    ///
    /// Fails with [`ShelfError::MalformedRecord`] if the value is not an
    /// object, a required key is missing, or a value has the wrong type.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| ShelfError::MalformedRecord("expected a JSON object".to_string()))?;

        Ok(Self {
            id: require(map, "id", Value::as_u64)?,
            title: require(map, "title", |v| v.as_str().map(str::to_string))?,
            author: require(map, "author", |v| v.as_str().map(str::to_string))?,
            year: require(map, "year", Value::as_i64)? as i32,
            status: require(map, "status", |v| v.as_str().map(str::to_string))?,
        })
    }
}

/// Extract a required key from a record mapping, with a typed accessor
fn require<T>(map: &Map<String, Value>, key: &str, as_type: impl Fn(&Value) -> Option<T>) -> Result<T> {
    let value = map
        .get(key)
        .ok_or_else(|| ShelfError::MalformedRecord(format!("missing key '{}'", key)))?;

    as_type(value)
        .ok_or_else(|| ShelfError::MalformedRecord(format!("wrong type for key '{}'", key)))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, title: {}, author: {}, year: {}, status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}
