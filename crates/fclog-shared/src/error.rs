//! Error types for fclog.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FclogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
