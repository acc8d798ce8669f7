//! Keyed persistence substrate.
//!
//! # Responsibility
//! - Define the string-keyed map abstraction every persistence path uses.
//! - Keep substrate errors in one transport-level taxonomy.
//!
//! # Invariants
//! - `list_keys` returns ascending lexicographic order on every
//!   implementation, so dated bucket keys enumerate chronologically.
//! - `get` of an absent key is `Ok(None)`, never an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod keys;
mod memory;
mod sqlite;

pub use memory::MemoryKeyedStore;
pub use sqlite::SqliteKeyedStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level error for keyed store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "keyed store requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "keyed store requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "keyed store requires column `{column}` in table `{table}`")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistent string-keyed map consumed by repositories and analytics.
///
/// The substrate provides no transactions; callers must not assume atomicity
/// across multiple calls forming one logical operation. This matches the
/// single-writer usage model of the core.
pub trait KeyedStore {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Inserts or replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Returns every stored key starting with `prefix`, ascending
    /// lexicographically.
    fn list_keys(&self, prefix: &str) -> StoreResult<Vec<String>>;
}
