//! ASEC survey extract register loader
//!
//! The survey extract is a directory of parquet files. Files are read in
//! parallel with column projection to the fields the report consumes and
//! deserialized into `MicroRecord`s; everything downstream is plain
//! domain models.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use arrow::array::{Array, ArrayRef, Float64Array, Int32Array, Int64Array};
use arrow::compute::cast;
use arrow::datatypes::{DataType, SchemaRef};
use arrow::record_batch::RecordBatch;
use indicatif::ParallelProgressIterator;
use parquet::arrow::ProjectionMask;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use rayon::prelude::*;

use crate::error::util::{safe_open_file, validate_directory};
use crate::error::{PipelineError, Result};
use crate::models::micro::{HHINCOME_MISSING, MicroRecord};
use crate::registry::schemas::asec_schema;
use crate::utils::logging::progress::create_main_progress_bar;

/// Default batch size for parquet reading
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// Survey extract register loader
#[derive(Debug, Clone)]
pub struct AsecRegister {
    schema: SchemaRef,
}

impl AsecRegister {
    /// Create a new survey extract register loader
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: asec_schema(),
        }
    }

    /// Get the name of the register
    #[must_use]
    pub fn get_register_name(&self) -> &'static str {
        "ASEC"
    }

    /// Get the schema for this register
    #[must_use]
    pub fn get_schema(&self) -> SchemaRef {
        self.schema.clone()
    }

    /// Load all parquet files under `base_path` into survey records
    ///
    /// Files are read in parallel; record order follows the sorted file
    /// order, and the aggregation stages are order-insensitive anyway.
    pub fn load(&self, base_path: &Path) -> Result<Vec<MicroRecord>> {
        validate_directory(base_path, "loading the survey extract")?;

        let files = find_parquet_files(base_path)?;
        if files.is_empty() {
            log::warn!("No parquet files found in {}", base_path.display());
            return Ok(Vec::new());
        }

        let progress = create_main_progress_bar(files.len() as u64, Some("survey extract"));
        let per_file: Vec<Result<Vec<MicroRecord>>> = files
            .par_iter()
            .progress_with(progress)
            .map(|path| self.load_file(path))
            .collect();

        let mut records = Vec::new();
        for result in per_file {
            records.extend(result?);
        }
        Ok(records)
    }

    /// Read one parquet file and deserialize its batches
    fn load_file(&self, path: &Path) -> Result<Vec<MicroRecord>> {
        let file = safe_open_file(path, "reading a survey extract file")?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)
            .with_context(|| format!("Failed to read parquet file: {}", path.display()))?;

        // Project to the extract columns the report consumes, skipping
        // any that are absent from this file.
        let file_schema = builder.schema().clone();
        let mut projection = Vec::new();
        for field in self.schema.fields() {
            match file_schema.index_of(field.name()) {
                Ok(index) => projection.push(index),
                Err(_) => {
                    log::warn!(
                        "Field {} not found in {}, skipping",
                        field.name(),
                        path.display()
                    );
                }
            }
        }

        let mask = ProjectionMask::roots(builder.parquet_schema(), projection);
        let reader = builder
            .with_projection(mask)
            .with_batch_size(DEFAULT_BATCH_SIZE)
            .build()?;

        let mut records = Vec::new();
        for batch in reader {
            let batch = batch?;
            records.extend(deserialize_batch(&batch)?);
        }
        Ok(records)
    }
}

impl Default for AsecRegister {
    fn default() -> Self {
        Self::new()
    }
}

/// Deserialize one record batch into survey records
///
/// Numeric columns are cast to their expected types first, so extracts
/// that store codes in wider integer types still deserialize. Rows
/// without a survey year or age are skipped; the income missing sentinel
/// maps to `None`.
pub fn deserialize_batch(batch: &RecordBatch) -> Result<Vec<MicroRecord>> {
    let years = int32_column(batch, "YEAR")?;
    let ages = int32_column(batch, "AGE")?;
    let relates = int32_column(batch, "RELATE")?;
    let ownerships = int32_column(batch, "OWNERSHP")?;
    let incomes = int64_column(batch, "HHINCOME")?;
    let hh_weights = float64_column(batch, "ASECWTH")?;
    let person_weights = float64_column(batch, "ASECWT").ok();

    let mut records = Vec::with_capacity(batch.num_rows());
    for row in 0..batch.num_rows() {
        if years.is_null(row) || ages.is_null(row) {
            continue;
        }

        let hh_income = (!incomes.is_null(row))
            .then(|| incomes.value(row))
            .and_then(|income| (income != HHINCOME_MISSING).then_some(income));

        records.push(MicroRecord {
            year: years.value(row),
            age: ages.value(row),
            relate: int_or(&relates, row, 0),
            ownershp: int_or(&ownerships, row, 0),
            hh_income,
            hh_weight: float_or(&hh_weights, row, 0.0),
            person_weight: person_weights
                .as_ref()
                .map_or(0.0, |weights| float_or(weights, row, 0.0)),
        });
    }
    Ok(records)
}

fn int_or(array: &Int32Array, row: usize, missing: i32) -> i32 {
    if array.is_null(row) { missing } else { array.value(row) }
}

fn float_or(array: &Float64Array, row: usize, missing: f64) -> f64 {
    if array.is_null(row) { missing } else { array.value(row) }
}

fn find_parquet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "parquet"))
        .collect();
    files.sort();
    Ok(files)
}

fn column_cast(batch: &RecordBatch, name: &str, data_type: &DataType) -> Result<ArrayRef> {
    let column = batch.column_by_name(name).ok_or_else(|| {
        PipelineError::Schema(format!("Column {name} not found in survey extract batch"))
    })?;
    Ok(cast(column, data_type)?)
}

fn int32_column(batch: &RecordBatch, name: &str) -> Result<Int32Array> {
    let array = column_cast(batch, name, &DataType::Int32)?;
    array
        .as_any()
        .downcast_ref::<Int32Array>()
        .cloned()
        .ok_or_else(|| PipelineError::Schema(format!("Column {name} could not be read as Int32")))
}

fn int64_column(batch: &RecordBatch, name: &str) -> Result<Int64Array> {
    let array = column_cast(batch, name, &DataType::Int64)?;
    array
        .as_any()
        .downcast_ref::<Int64Array>()
        .cloned()
        .ok_or_else(|| PipelineError::Schema(format!("Column {name} could not be read as Int64")))
}

fn float64_column(batch: &RecordBatch, name: &str) -> Result<Float64Array> {
    let array = column_cast(batch, name, &DataType::Float64)?;
    array
        .as_any()
        .downcast_ref::<Float64Array>()
        .cloned()
        .ok_or_else(|| {
            PipelineError::Schema(format!("Column {name} could not be read as Float64"))
        })
}
