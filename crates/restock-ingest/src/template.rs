//! Example upload users can fill in.

use std::path::Path;

use csv::WriterBuilder;

use crate::columns::ReportField;
use crate::error::{IngestError, Result};

const TEMPLATE_ROW: [&str; 8] = [
    "İzmir Alsancak Mağaza",
    "SKU123",
    "Örnek Ürün",
    "001",
    "Siyah",
    "M",
    "5",
    "2",
];

/// Render the template as CSV text: the report headers plus one example row.
pub fn template_csv() -> Result<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    let headers: Vec<&str> = ReportField::ALL.iter().map(|f| f.canonical()).collect();
    writer.write_record(&headers).map_err(template_error)?;
    writer.write_record(TEMPLATE_ROW).map_err(template_error)?;
    let bytes = writer.into_inner().map_err(|e| IngestError::Template {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| IngestError::Template {
        message: e.to_string(),
    })
}

/// Write the template to `path`.
pub fn write_template(path: &Path) -> Result<()> {
    let contents = template_csv()?;
    std::fs::write(path, contents).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn template_error(err: csv::Error) -> IngestError {
    IngestError::Template {
        message: err.to_string(),
    }
}
