use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use restock_model::{TRANSFER_COLUMNS, TransferLine};

use crate::error::Result;

/// Build a DataFrame with one row per transfer line, columns in export order.
///
/// The shipped quantity column is `UInt32`; every other column is text.
pub fn transfers_to_frame(lines: &[TransferLine]) -> Result<DataFrame> {
    let text = |pick: fn(&TransferLine) -> &str| -> Vec<String> {
        lines.iter().map(|line| pick(line).to_string()).collect()
    };
    let quantities: Vec<u32> = lines.iter().map(|line| line.quantity).collect();

    let columns: Vec<Column> = vec![
        Series::new(TRANSFER_COLUMNS[0].into(), text(|l| l.from_store.as_str())).into_column(),
        Series::new(TRANSFER_COLUMNS[1].into(), text(|l| l.product_code.as_str())).into_column(),
        Series::new(TRANSFER_COLUMNS[2].into(), text(|l| l.product_name.as_str())).into_column(),
        Series::new(TRANSFER_COLUMNS[3].into(), text(|l| l.color_code.as_str())).into_column(),
        Series::new(TRANSFER_COLUMNS[4].into(), text(|l| l.color_name.as_str())).into_column(),
        Series::new(TRANSFER_COLUMNS[5].into(), text(|l| l.size.as_str())).into_column(),
        Series::new(TRANSFER_COLUMNS[6].into(), quantities).into_column(),
        Series::new(TRANSFER_COLUMNS[7].into(), text(|l| l.to_store.as_str())).into_column(),
    ];
    Ok(DataFrame::new(columns)?)
}
