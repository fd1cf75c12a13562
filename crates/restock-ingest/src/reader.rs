//! Store report reader.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::{AnyValue, CsvReadOptions, DataFrame, SerReader};
use restock_model::StoreVariantRecord;
use tracing::{debug, info};

use crate::columns::{ColumnMap, ReportField, resolve_columns};
use crate::error::{IngestError, Result};
use crate::polars_utils::{any_to_string, coerce_quantity};

/// Read a store report CSV into normalized records.
///
/// Every column is loaded as text; text cells are trimmed and quantity cells
/// are coerced with [`coerce_quantity`](crate::coerce_quantity).
///
/// # Errors
///
/// Fails when the file is missing, unreadable, or not UTF-8, when Polars
/// cannot parse it, or when required columns are absent.
pub fn read_store_report(path: &Path) -> Result<Vec<StoreVariantRecord>> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let contents = std::str::from_utf8(&bytes).map_err(|e| IngestError::Encoding {
        path: path.to_path_buf(),
        offset: e.valid_up_to(),
    })?;
    if contents.trim().is_empty() {
        return Err(IngestError::MissingColumns {
            missing: ReportField::ALL
                .iter()
                .map(|field| field.canonical().to_string())
                .collect(),
            found: Vec::new(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded report"
    );

    let records = records_from_frame(&df)?;
    info!(path = %path.display(), records = records.len(), "report ingested");
    Ok(records)
}

/// Convert a report DataFrame into records, resolving headers first.
pub fn records_from_frame(df: &DataFrame) -> Result<Vec<StoreVariantRecord>> {
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let columns = resolve_columns(&headers)?;

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        records.push(StoreVariantRecord {
            store: text_cell(df, &columns, ReportField::Store, idx)?,
            product_code: text_cell(df, &columns, ReportField::ProductCode, idx)?,
            product_name: text_cell(df, &columns, ReportField::ProductName, idx)?,
            color_code: text_cell(df, &columns, ReportField::ColorCode, idx)?,
            color_name: text_cell(df, &columns, ReportField::ColorName, idx)?,
            size: text_cell(df, &columns, ReportField::Size, idx)?,
            sales: quantity_cell(df, &columns, ReportField::NetSales, idx)?,
            stock: quantity_cell(df, &columns, ReportField::Stock, idx)?,
        });
    }
    Ok(records)
}

fn cell<'a>(
    df: &'a DataFrame,
    columns: &ColumnMap,
    field: ReportField,
    idx: usize,
) -> Result<AnyValue<'a>> {
    let column = df.column(columns.source(field))?;
    Ok(column.get(idx)?)
}

fn text_cell(
    df: &DataFrame,
    columns: &ColumnMap,
    field: ReportField,
    idx: usize,
) -> Result<String> {
    Ok(any_to_string(cell(df, columns, field, idx)?).trim().to_string())
}

fn quantity_cell(
    df: &DataFrame,
    columns: &ColumnMap,
    field: ReportField,
    idx: usize,
) -> Result<u32> {
    Ok(coerce_quantity(cell(df, columns, field, idx)?))
}
