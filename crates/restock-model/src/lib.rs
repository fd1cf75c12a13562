//! Data model for inter-store stock transfer allocation.

pub mod config;
pub mod error;
pub mod record;
pub mod transfer;

pub use config::AllocationConfig;
pub use error::{RestockError, Result};
pub use record::{StoreVariantRecord, VariantKey};
pub use transfer::{TRANSFER_COLUMNS, TransferLine};
