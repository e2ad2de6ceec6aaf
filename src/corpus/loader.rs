//! CSV dataset loading.
//!
//! The dataset has a header row naming at least a disease column and a symptom
//! column. The symptom column holds phrases separated by a delimiter (`;` by
//! default). Text is read as UTF-8.
//!
//! ```csv
//! benh,trieu_chung
//! Cảm cúm,sốt;ho;đau đầu;mệt mỏi
//! ```

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};

use crate::analysis::normalize_all;
use crate::config::DatasetConfig;
use crate::corpus::record::DiseaseRecord;
use crate::error::{Result, SympredError};

/// Reads [`DiseaseRecord`]s from a CSV file.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    disease_column: String,
    symptoms_column: String,
    delimiter: char,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::from_config(&DatasetConfig::default())
    }
}

impl DatasetLoader {
    /// Create a loader using the column names and delimiter of `config`.
    pub fn from_config(config: &DatasetConfig) -> Self {
        DatasetLoader {
            disease_column: config.disease_column.clone(),
            symptoms_column: config.symptoms_column.clone(),
            delimiter: config.symptom_delimiter,
        }
    }

    /// Load all records from the file at `path`.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<DiseaseRecord>> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(SympredError::dataset_not_found(path.display().to_string()));
        }
        let file = File::open(path)?;
        let records = self.read(file)?;
        info!(
            "Loaded {} disease records from {}",
            records.len(),
            path.display()
        );
        Ok(records)
    }

    /// Parse records from any CSV reader.
    pub fn read<R: std::io::Read>(&self, input: R) -> Result<Vec<DiseaseRecord>> {
        let mut reader = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input);

        let headers = reader
            .headers()
            .map_err(|e| SympredError::malformed(1, format!("failed to read CSV header: {e}")))?
            .clone();
        let disease_idx = column_index(&headers, &self.disease_column)?;
        let symptoms_idx = column_index(&headers, &self.symptoms_column)?;

        let mut records = Vec::new();
        let mut record = StringRecord::new();
        loop {
            let more = reader.read_record(&mut record).map_err(|e| {
                let line = e
                    .position()
                    .map_or_else(|| reader.position().line(), |p| p.line());
                SympredError::malformed(line, e.to_string())
            })?;
            if !more {
                break;
            }
            // Quoted fields may span lines, so ask the reader where the row started.
            let line = record
                .position()
                .map_or_else(|| reader.position().line(), |p| p.line());

            let disease = record.get(disease_idx).unwrap_or("").trim();
            if disease.is_empty() {
                return Err(SympredError::malformed(line, "missing disease name"));
            }
            let field = record.get(symptoms_idx).unwrap_or("");
            let parsed = DiseaseRecord::from_delimited(disease, field, self.delimiter);
            if normalize_all(&parsed.symptoms).is_empty() {
                return Err(SympredError::malformed(
                    line,
                    format!("no symptoms for disease '{disease}'"),
                ));
            }
            records.push(parsed);
        }

        debug!("Parsed {} rows", records.len());
        Ok(records)
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| SympredError::malformed(1, format!("missing column '{name}'")))
}
