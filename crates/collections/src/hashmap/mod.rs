use thiserror::Error;

mod hash_fn;
mod hash_table;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    /// A table needs at least one bucket to hash into
    #[error("Invalid table capacity: {capacity}, capacity must be at least 1")]
    InvalidCapacity { capacity: usize },

    /// `remove` was asked for a key the table does not hold
    #[error("Key not found: {key:?}")]
    NotFound { key: String },

    /// The bucket array could not be allocated
    #[error("Out of memory while allocating {capacity} buckets")]
    OutOfMemory { capacity: usize },
}

pub use hash_fn::{djb2, hash};
pub use hash_table::HashTable;
