//! Store report ingestion.
//!
//! Turns an uploaded report into [`StoreVariantRecord`]s the allocation
//! engine can consume: headers are matched regardless of whitespace, text is
//! trimmed, and quantities are coerced to non-negative integers.
//!
//! [`StoreVariantRecord`]: restock_model::StoreVariantRecord

pub mod columns;
pub mod error;
pub mod polars_utils;
pub mod reader;
pub mod template;

pub use columns::{ColumnMap, ReportField, normalize_header, resolve_columns};
pub use error::{IngestError, Result};
pub use polars_utils::{any_to_f64, any_to_string, coerce_quantity, format_numeric, parse_f64};
pub use reader::{read_store_report, records_from_frame};
pub use template::{template_csv, write_template};
