//! Country reference data (CSV) -> [`RegionTable`].
//!
//! Expected layout, one country per row after a header:
//! `name,alpha-2,alpha-3,country-code,iso_3166-2,region,...`

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use shiprate_pricing::{RegionTable, RegionTableError};

#[derive(Debug, Error)]
pub enum CountryDataError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid country data: {0}")]
    Table(#[from] RegionTableError),
}

/// Load the region table from a CSV file on disk.
pub fn load_region_table(path: impl AsRef<Path>) -> Result<RegionTable, CountryDataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CountryDataError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let table = read_region_table(file)?;
    tracing::info!(path = %path.display(), countries = table.len(), "loaded country reference data");
    Ok(table)
}

/// Parse CSV from any reader. The header row is handed to the table builder,
/// which skips it.
pub fn read_region_table<R: Read>(reader: R) -> Result<RegionTable, CountryDataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    Ok(RegionTable::from_rows(records.iter())?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = "\
name,alpha-2,alpha-3,country-code,iso_3166-2,region,sub-region
Sweden,SE,SWE,752,ISO 3166-2:SE,Europe,Northern Europe
Germany,DE,DEU,276,ISO 3166-2:DE,Europe,Western Europe
United States of America,US,USA,840,ISO 3166-2:US,Americas,Northern America
\"Korea, Republic of\",KR,KOR,410,ISO 3166-2:KR,Asia,Eastern Asia
";

    #[test]
    fn reads_codes_and_regions() {
        let table = read_region_table(SAMPLE.as_bytes()).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.resolve("SE"), Ok("Europe"));
        assert_eq!(table.resolve("US"), Ok("Americas"));
        assert_eq!(table.resolve("KR"), Ok("Asia"));
    }

    #[test]
    fn inconsistent_row_length_is_a_csv_error() {
        let data = "name,alpha-2,alpha-3,country-code,iso_3166-2,region\nSweden,SE\n";
        let err = read_region_table(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CountryDataError::Csv(_)), "got {err:?}");
    }

    #[test]
    fn too_few_columns_is_a_table_error() {
        let data = "name,alpha-2,alpha-3\nSweden,SE,SWE\n";
        let err = read_region_table(data.as_bytes()).unwrap_err();
        assert!(
            matches!(err, CountryDataError::Table(RegionTableError::MissingField { row: 1, .. })),
            "got {err:?}"
        );
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = load_region_table(file.path()).unwrap();
        assert_eq!(table.resolve("DE"), Ok("Europe"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_region_table("/definitely/not/here/countries.csv").unwrap_err();
        match err {
            CountryDataError::Open { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here/countries.csv"))
            }
            other => panic!("expected Open error, got {other:?}"),
        }
    }

    #[test]
    fn bundled_reference_data_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/countries.csv");
        let table = load_region_table(path).unwrap();

        assert!(table.len() > 100);
        assert_eq!(table.resolve("SE"), Ok("Europe"));
        assert_eq!(table.resolve("DE"), Ok("Europe"));
        assert_eq!(table.resolve("US"), Ok("Americas"));
    }
}
