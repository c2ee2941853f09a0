pub mod config;
pub mod scenario;

use collections::TableError;
use thiserror::Error;

pub use config::DemoConfig;
pub use scenario::{fill_and_drain, grow};

#[derive(Debug, Error)]
pub enum DemoError {
    /// A table operation failed, like a zero capacity or removing an absent key
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Derived IO error from writing the report
    #[error("Io error: {0}")]
    IoError(#[from] std::io::Error),

    /// A command line argument could not be used
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
