//! Dataset catalog: the fixed descriptor list standing in for the BPS listing
//! API (webapi.bps.go.id), persisted as datasets.json so downstream consumers
//! can enumerate available tables without re-running the harvest.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const CATALOG_FILE_NAME: &str = "datasets.json";

/// Lightweight record identifying a dataset without containing its data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    pub id: String,
    pub name: String,
    pub year: String,
}

impl DatasetDescriptor {
    pub fn new(id: &str, name: &str, year: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            year: year.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Serialize(serde_json::Error),
    Write(std::io::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "failed to serialize catalog: {err}"),
            Self::Write(err) => write!(f, "failed to write catalog file: {err}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The fixed five-dataset listing. A real listing endpoint would replace this;
/// its auth/pagination contract is undefined upstream, so the simulated list
/// stays authoritative for now.
pub fn available_datasets() -> Vec<DatasetDescriptor> {
    vec![
        DatasetDescriptor::new("1", "Jumlah Penduduk per Provinsi", "2020"),
        DatasetDescriptor::new("2", "Produk Domestik Regional Bruto", "2019"),
        DatasetDescriptor::new("3", "Tingkat Pengangguran Terbuka", "2021"),
        DatasetDescriptor::new("4", "Indeks Pembangunan Manusia", "2021"),
        DatasetDescriptor::new("5", "Persentase Penduduk Miskin", "2021"),
    ]
}

/// Write the catalog as pretty JSON, replacing any previous file.
pub fn persist_catalog(path: &Path, datasets: &[DatasetDescriptor]) -> Result<(), CatalogError> {
    let payload = serde_json::to_string_pretty(datasets).map_err(CatalogError::Serialize)?;
    fs::write(path, payload).map_err(CatalogError::Write)
}

/// Load a previously persisted catalog. Returns None if the file is missing
/// or unparseable.
pub fn load_catalog(path: &Path) -> Option<Vec<DatasetDescriptor>> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_complete_entries() {
        let datasets = available_datasets();
        assert_eq!(datasets.len(), 5);
        for dataset in &datasets {
            assert!(!dataset.id.is_empty());
            assert!(!dataset.name.is_empty());
            assert!(!dataset.year.is_empty());
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let datasets = available_datasets();
        let mut ids: Vec<&str> = datasets.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), datasets.len());
    }

    #[test]
    fn persist_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CATALOG_FILE_NAME);
        let datasets = available_datasets();

        persist_catalog(&path, &datasets).unwrap();
        let loaded = load_catalog(&path).expect("catalog should load back");
        assert_eq!(loaded, datasets);
    }

    #[test]
    fn persist_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CATALOG_FILE_NAME);

        std::fs::write(&path, "stale").unwrap();
        persist_catalog(&path, &available_datasets()).unwrap();
        let loaded = load_catalog(&path).expect("catalog should load back");
        assert_eq!(loaded.len(), 5);
    }

    #[test]
    fn persist_to_missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join(CATALOG_FILE_NAME);
        let err = persist_catalog(&path, &available_datasets()).unwrap_err();
        assert!(matches!(err, CatalogError::Write(_)));
    }

    #[test]
    fn load_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_catalog(&dir.path().join("absent.json")).is_none());
    }
}
