//! Catalog loading from structured-text payloads.
//!
//! # Responsibility
//! - Parse raw catalog payloads into validated [`Catalog`] instances.
//! - Report the first malformed record instead of loading a partial catalog.
//!
//! # Invariants
//! - A catalog is returned only when every record validates.
//! - Loading happens once per session; sources are not re-read.

use crate::model::catalog::Catalog;
use crate::model::project::ProjectValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json;

pub use json::{bundled_catalog, parse_catalog, JsonFileSource, JsonStrSource};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Load-time failures.
#[derive(Debug)]
pub enum CatalogError {
    /// Payload file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Payload is not a JSON array of project objects.
    Parse(serde_json::Error),
    /// Record at `index` is structurally valid but breaks a model invariant.
    InvalidRecord {
        index: usize,
        source: ProjectValidationError,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "malformed catalog payload: {err}"),
            Self::InvalidRecord { index, source } => {
                write!(f, "invalid catalog record #{index}: {source}")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidRecord { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Supplies the initial catalog.
pub trait CatalogSource {
    /// Short label for diagnostics, e.g. a file path.
    fn describe(&self) -> String;

    fn load(&self) -> CatalogResult<Catalog>;
}
