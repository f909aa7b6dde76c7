//! Unified error type for grant derivation
//!
//! Derivation is deliberately forgiving: unmapped labels and type mismatches
//! skip records instead of failing. The only error this system produces is a
//! programmer error at the dispatch boundary.

use serde::{Deserialize, Serialize};

/// Unified error for all derivation operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// An entry-point name matched no fixed handler and no dynamic pattern.
    #[error("unknown entry point: {name}")]
    UnknownEntryPoint {
        /// The name that failed to resolve.
        name: String,
    },
}

impl Error {
    /// Create an unknown-entry-point error.
    pub fn unknown_entry_point(name: impl Into<String>) -> Self {
        Self::UnknownEntryPoint { name: name.into() }
    }
}

/// Standard result type for derivation operations.
pub type Result<T> = std::result::Result<T, Error>;
