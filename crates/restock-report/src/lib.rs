//! Transfer plan export and summary reporting.
//!
//! Everything here is a read-only consumer of the allocation output.

pub mod error;
pub mod export;
pub mod frame;
pub mod summary;

pub use error::{ReportError, Result};
pub use export::{transfers_to_csv_string, write_transfers, write_transfers_csv};
pub use frame::transfers_to_frame;
pub use summary::{FlowMatrix, StoreTotal, TopProduct, TransferSummary};
