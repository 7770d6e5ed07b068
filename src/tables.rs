//! Synthetic per-province statistic tables. One CSV per dataset, header
//! province,value,year, one row per province in the fixed enumeration order.
//! Values are uniform draws in [10, 100] rounded to two decimals; they are
//! placeholders for what a real BPS table endpoint would return.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::catalog::DatasetDescriptor;
use crate::provinces::PROVINCES;
use crate::rng::{round2, Rng};

pub const VALUE_MIN: f64 = 10.0;
pub const VALUE_MAX: f64 = 100.0;

/// One row of a generated table. Immutable once built; year is copied from
/// the owning dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvinceRecord {
    pub province: String,
    pub value: f64,
    pub year: String,
}

#[derive(Debug)]
pub enum TableError {
    /// Descriptor with an empty id; the filename scheme needs it.
    MissingId { name: String },
    /// Descriptor with an empty name; the filename scheme needs it.
    MissingName { id: String },
    Csv(csv::Error),
    Flush(std::io::Error),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId { name } => {
                write!(f, "dataset descriptor '{name}' has an empty id")
            }
            Self::MissingName { id } => {
                write!(f, "dataset descriptor id={id} has an empty name")
            }
            Self::Csv(err) => write!(f, "failed to write table: {err}"),
            Self::Flush(err) => write!(f, "failed to flush table: {err}"),
        }
    }
}

impl std::error::Error for TableError {}

/// Lowercase and replace spaces with underscores to form a filesystem-safe
/// name. Idempotent.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Derive the table file name: `<id>_<normalized name>.csv`. Rejects
/// descriptors with an empty id or name instead of producing a junk path.
pub fn table_file_name(dataset: &DatasetDescriptor) -> Result<String, TableError> {
    if dataset.id.trim().is_empty() {
        return Err(TableError::MissingId {
            name: dataset.name.clone(),
        });
    }
    if dataset.name.trim().is_empty() {
        return Err(TableError::MissingName {
            id: dataset.id.clone(),
        });
    }
    Ok(format!(
        "{}_{}.csv",
        dataset.id,
        normalize_name(&dataset.name)
    ))
}

/// Build the 34 records for one dataset, in province enumeration order.
pub fn synthesize_records(dataset: &DatasetDescriptor, rng: &mut Rng) -> Vec<ProvinceRecord> {
    PROVINCES
        .iter()
        .map(|province| ProvinceRecord {
            province: (*province).to_string(),
            value: round2(rng.uniform(VALUE_MIN, VALUE_MAX)),
            year: dataset.year.clone(),
        })
        .collect()
}

/// Serialize records as CSV with a header row, replacing any previous file.
pub fn write_table(path: &Path, records: &[ProvinceRecord]) -> Result<(), TableError> {
    let mut writer = csv::Writer::from_path(path).map_err(TableError::Csv)?;
    for record in records {
        writer.serialize(record).map_err(TableError::Csv)?;
    }
    writer.flush().map_err(TableError::Flush)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> DatasetDescriptor {
        DatasetDescriptor::new("3", "Tingkat Pengangguran Terbuka", "2021")
    }

    #[test]
    fn normalize_lowercases_and_underscores() {
        assert_eq!(
            normalize_name("Jumlah Penduduk per Provinsi"),
            "jumlah_penduduk_per_provinsi"
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_name("Indeks Pembangunan Manusia");
        assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn table_file_name_combines_id_and_normalized_name() {
        assert_eq!(
            table_file_name(&dataset()).unwrap(),
            "3_tingkat_pengangguran_terbuka.csv"
        );
    }

    #[test]
    fn table_file_name_rejects_empty_id() {
        let bad = DatasetDescriptor::new("", "Some Name", "2021");
        assert!(matches!(
            table_file_name(&bad),
            Err(TableError::MissingId { .. })
        ));
    }

    #[test]
    fn table_file_name_rejects_empty_name() {
        let bad = DatasetDescriptor::new("9", "  ", "2021");
        assert!(matches!(
            table_file_name(&bad),
            Err(TableError::MissingName { .. })
        ));
    }

    #[test]
    fn synthesize_builds_34_rows_in_province_order() {
        let mut rng = Rng::new(7);
        let records = synthesize_records(&dataset(), &mut rng);
        assert_eq!(records.len(), 34);
        for (record, province) in records.iter().zip(PROVINCES.iter()) {
            assert_eq!(record.province, *province);
            assert_eq!(record.year, "2021");
        }
    }

    #[test]
    fn synthesized_values_are_bounded_and_two_decimal() {
        let mut rng = Rng::new(99);
        for record in synthesize_records(&dataset(), &mut rng) {
            assert!(record.value >= VALUE_MIN, "too low: {}", record.value);
            assert!(record.value <= VALUE_MAX, "too high: {}", record.value);
            assert_eq!(round2(record.value), record.value);
        }
    }

    #[test]
    fn synthesize_is_deterministic_for_a_seed() {
        let a = synthesize_records(&dataset(), &mut Rng::new(5));
        let b = synthesize_records(&dataset(), &mut Rng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn write_table_emits_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("3_tingkat_pengangguran_terbuka.csv");
        let mut rng = Rng::new(1);
        let records = synthesize_records(&dataset(), &mut rng);

        write_table(&path, &records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("province,value,year"));
        assert_eq!(lines.count(), 34);
    }

    #[test]
    fn written_rows_parse_back_within_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut rng = Rng::new(13);
        write_table(&path, &synthesize_records(&dataset(), &mut rng)).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        for row in reader.records() {
            let row = row.unwrap();
            let value: f64 = row[1].parse().unwrap();
            assert!((VALUE_MIN..=VALUE_MAX).contains(&value));
        }
    }
}
