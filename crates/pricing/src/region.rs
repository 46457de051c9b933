//! Country code -> region label lookup.

use std::collections::HashMap;

use thiserror::Error;

/// Region label that unlocks the intra-Europe rate.
pub const EUROPE: &str = "Europe";

/// Position of the alpha code in a reference row.
const ALPHA_CODE_FIELD: usize = 1;
/// Position of the region label in a reference row.
const REGION_FIELD: usize = 5;

/// Lookup failure: the code is not in the table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("country not found: {0}")]
pub struct CountryNotFound(pub String);

/// Failure while building a table from reference rows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionTableError {
    #[error("row {row} has no {field} field")]
    MissingField { row: usize, field: &'static str },
}

/// Immutable mapping from country code to region label.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionTable {
    regions: HashMap<String, String>,
}

impl RegionTable {
    /// Build a table from tabular reference rows.
    ///
    /// Row 0 is a header and is skipped. Of every other row only the alpha
    /// code (position 1) and the region (position 5) are read. A later row
    /// with the same code replaces an earlier one.
    pub fn from_rows<I, R, S>(rows: I) -> Result<Self, RegionTableError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut regions = HashMap::new();

        for (row, fields) in rows.into_iter().enumerate().skip(1) {
            let mut code = None;
            let mut region = None;
            for (position, field) in fields.into_iter().enumerate() {
                match position {
                    ALPHA_CODE_FIELD => code = Some(field.as_ref().to_string()),
                    REGION_FIELD => {
                        region = Some(field.as_ref().to_string());
                        break;
                    }
                    _ => {}
                }
            }

            let code = code.ok_or(RegionTableError::MissingField { row, field: "alpha-2" })?;
            let region = region.ok_or(RegionTableError::MissingField { row, field: "region" })?;
            regions.insert(code, region);
        }

        Ok(Self { regions })
    }

    /// Region label for `code`. Unknown codes are an error, never a default.
    pub fn resolve(&self, code: &str) -> Result<&str, CountryNotFound> {
        self.regions
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| CountryNotFound(code.to_string()))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RegionTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            regions: iter
                .into_iter()
                .map(|(code, region)| (code.into(), region.into()))
                .collect(),
        }
    }
}
