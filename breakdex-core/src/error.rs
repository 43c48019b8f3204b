//! Error taxonomy shared by every layer
//!
//! All failures are reported synchronously by the call that triggered them.
//! There are no partial results: a failed `map` produces no index.

use thiserror::Error;

use crate::{kind::BoundaryKind, unit::CharWidth};

/// Errors raised while building or looking up break indexes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    /// The analyzer has no rules for the requested kind
    #[error("boundary kind '{kind}' is not supported by this {width} analyzer")]
    UnsupportedBoundaryKind {
        /// The kind that was requested
        kind: BoundaryKind,
        /// Code-unit width of the analyzer that rejected it
        width: CharWidth,
    },

    /// `begin > end` or a position outside the buffer
    #[error("invalid range {begin}..{end} for a buffer of {len} code units")]
    InvalidRange {
        /// Requested start position
        begin: usize,
        /// Requested end position
        end: usize,
        /// Length of the buffer the range points into
        len: usize,
    },

    /// Nothing installed for a locale/width pair
    #[error("no {width} boundary analyzer installed for locale '{locale}'")]
    NoAnalyzerAvailable {
        /// Canonical name of the locale that was looked up
        locale: String,
        /// Width that was looked up
        width: CharWidth,
    },

    /// An analyzer tried to produce an index that breaks the ordering invariant
    #[error("malformed break index: {reason}")]
    MalformedIndex {
        /// What was wrong with the points
        reason: String,
    },

    /// A locale name that cannot be parsed
    #[error("invalid locale '{name}': {reason}")]
    InvalidLocale {
        /// The name as given
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Rule-set configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for boundary operations
pub type Result<T> = std::result::Result<T, BoundaryError>;
