//! CSV export of the transfer plan.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use restock_model::{TRANSFER_COLUMNS, TransferLine};
use tracing::info;

use crate::error::{ReportError, Result};

/// Write transfer lines as CSV to any writer.
///
/// The header row is always written, so an empty plan still carries the
/// column set.
pub fn write_transfers<W: Write>(writer: W, lines: &[TransferLine]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(TRANSFER_COLUMNS)?;
    for line in lines {
        csv_writer.write_record(line.to_row())?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn transfers_to_csv_string(lines: &[TransferLine]) -> Result<String> {
    let mut buffer = Vec::new();
    write_transfers(&mut buffer, lines)?;
    String::from_utf8(buffer).map_err(|e| ReportError::Message(e.to_string()))
}

/// Write the transfer plan to `path`, replacing any existing file.
pub fn write_transfers_csv(path: &Path, lines: &[TransferLine]) -> Result<()> {
    let file = File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_transfers(BufWriter::new(file), lines)?;
    info!(path = %path.display(), lines = lines.len(), "transfer plan written");
    Ok(())
}
