//! Error types for the kiosk
//!
//! Every error here is recovered at the boundary of a single menu
//! action: the triggering operation aborts, the user is told what
//! happened, and the surrounding interactive loop continues.

use std::path::PathBuf;

/// Errors from the flat-file stores (menu and credentials).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backing file missing or unopenable
    #[error("failed to open {path}")]
    Unavailable { path: PathBuf },

    /// IO error during read or write
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Menu already holds the maximum number of items
    #[error("cannot add more items: maximum of 30 reached")]
    CapacityExceeded,
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors from validating user-supplied values against the loaded menu.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// 1-based position outside the loaded menu
    #[error("invalid item number {position}: menu has {count} items")]
    PositionOutOfRange { position: usize, count: usize },

    /// Stored price text is not a parseable amount
    #[error("price '{raw}' is not a valid amount")]
    InvalidPrice { raw: String },
}

/// Combined kiosk error
#[derive(Debug, thiserror::Error)]
pub enum KioskError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl KioskError {
    /// Whether the surrounding interactive loop can carry on after
    /// reporting this error. Only raw IO on the console itself is fatal.
    pub fn is_recoverable(&self) -> bool {
        match self {
            KioskError::Store(_) => true,
            KioskError::Validation(_) => true,
            KioskError::Config { .. } => false,
            KioskError::Io(_) => false,
        }
    }
}

/// Result type alias for kiosk operations
pub type KioskResult<T> = Result<T, KioskError>;
