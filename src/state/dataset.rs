use std::path::Path;

use log::{debug, info};
use serde_json::Value;

use super::data::{ColumnKey, PropertyRecord, RESERVED_FIELD};
use crate::error::{Error, Result};

/// The property document compiled into the binary
const BUNDLED_DOCUMENT: &str = include_str!("../../assets/property_data.json");

/// Where the record list lives inside the document
const PROPERTIES_PATH: [&str; 3] = ["data", "propertiesPage", "properties"];

/// The immutable set of property records the table is built from.
///
/// Column keys are derived once from the first record; every record is
/// assumed to share that shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<PropertyRecord>,
    columns: Vec<ColumnKey>,
}

impl Dataset {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        let columns = derive_columns(&records);
        Self { records, columns }
    }

    /// Load the document bundled with the application
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_DOCUMENT)
    }

    /// Load a document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let dataset = Self::from_json_str(&contents)?;
        info!("Loaded {} properties from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Parse a document and pull out `data.propertiesPage.properties`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut node: Value = serde_json::from_str(json)?;

        for segment in PROPERTIES_PATH {
            node = match node {
                Value::Object(mut object) => object.remove(segment),
                _ => None,
            }
            .ok_or_else(|| Error::MissingPath(segment.to_string()))?;
        }

        let Value::Array(entries) = node else {
            return Err(Error::MissingPath(PROPERTIES_PATH[2].to_string()));
        };

        let records = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Object(object) => Ok(PropertyRecord::from_json(object)),
                _ => Err(Error::InvalidRecord { index }),
            })
            .collect::<Result<Vec<_>>>()?;

        let dataset = Self::new(records);
        debug!(
            "Parsed {} records with columns {:?}",
            dataset.len(),
            dataset.columns
        );
        Ok(dataset)
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Column keys from the first record, minus the reserved metadata field.
/// No records means no columns.
fn derive_columns(records: &[PropertyRecord]) -> Vec<ColumnKey> {
    records
        .first()
        .map(|first| {
            first
                .field_names()
                .filter(|name| *name != RESERVED_FIELD)
                .map(ColumnKey::new)
                .collect()
        })
        .unwrap_or_default()
}
