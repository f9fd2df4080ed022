//! JSON catalog payloads.

use crate::model::catalog::Catalog;
use crate::model::project::{Project, RawProject};
use crate::source::{CatalogError, CatalogResult, CatalogSource};
use log::{error, info};
use std::path::PathBuf;

const BUNDLED_GAMES_JSON: &str = include_str!("../../data/games.json");

/// Parses a JSON array of project objects.
///
/// # Errors
/// - [`CatalogError::Parse`] for malformed JSON or missing/mistyped fields.
/// - [`CatalogError::InvalidRecord`] for the first record failing validation.
pub fn parse_catalog(payload: &str) -> CatalogResult<Catalog> {
    let raw: Vec<RawProject> = serde_json::from_str(payload)?;
    let projects = raw
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Project::try_from(record)
                .map_err(|source| CatalogError::InvalidRecord { index, source })
        })
        .collect::<CatalogResult<Vec<_>>>()?;
    Ok(Catalog::new(projects))
}

/// Demo catalog compiled into the crate.
pub fn bundled_catalog() -> CatalogResult<Catalog> {
    JsonStrSource::new("bundled:games.json", BUNDLED_GAMES_JSON).load()
}

/// In-memory JSON payload.
#[derive(Debug, Clone)]
pub struct JsonStrSource {
    label: String,
    payload: String,
}

impl JsonStrSource {
    pub fn new(label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: payload.into(),
        }
    }
}

impl CatalogSource for JsonStrSource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn load(&self) -> CatalogResult<Catalog> {
        log_outcome(&self.label, parse_catalog(&self.payload))
    }
}

/// JSON payload stored in a file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> CatalogResult<Catalog> {
        let label = self.describe();
        let payload = match std::fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(source) => {
                return log_outcome(
                    &label,
                    Err(CatalogError::Io {
                        path: self.path.clone(),
                        source,
                    }),
                )
            }
        };
        log_outcome(&label, parse_catalog(&payload))
    }
}

fn log_outcome(label: &str, result: CatalogResult<Catalog>) -> CatalogResult<Catalog> {
    match &result {
        Ok(catalog) => info!(
            "event=catalog_loaded module=source status=ok source={} records={}",
            label,
            catalog.len()
        ),
        Err(err) => error!(
            "event=catalog_loaded module=source status=error source={} error={}",
            label, err
        ),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::{bundled_catalog, parse_catalog};
    use crate::source::CatalogError;

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = bundled_catalog().expect("bundled payload should load");
        assert_eq!(catalog.len(), 11);
    }

    #[test]
    fn empty_array_is_an_empty_catalog() {
        let catalog = parse_catalog("[]").expect("empty array is valid");
        assert!(catalog.is_empty());
    }

    #[test]
    fn non_array_payload_is_a_parse_error() {
        let err = parse_catalog("{\"name\": \"x\"}").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
