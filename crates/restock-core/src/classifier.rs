//! Per-row receive need and send capacity.

use restock_model::{AllocationConfig, StoreVariantRecord};
use tracing::debug;

use crate::grouper::VariantGroup;

/// A row that can take part in matching, with its computed quantities.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub record: &'a StoreVariantRecord,
    pub need: u32,
    pub sendable: u32,
}

impl Candidate<'_> {
    pub fn store(&self) -> &str {
        &self.record.store
    }

    /// Out of stock while still selling.
    pub fn is_stocked_out(&self) -> bool {
        self.record.stock == 0 && self.record.sales > 0
    }

    pub fn has_no_sales(&self) -> bool {
        self.record.sales == 0
    }
}

/// Why a group produced no candidates worth matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The never-sender store holds enough stock of this variant.
    NeverSenderStocked { stock: u32 },
    NoReceivers,
    NoSuppliers,
}

/// Receivers and suppliers for one group, in input order.
#[derive(Debug, Clone)]
pub struct ClassifiedGroup<'a> {
    pub receivers: Vec<Candidate<'a>>,
    pub suppliers: Vec<Candidate<'a>>,
}

#[derive(Debug, Clone)]
pub enum Classification<'a> {
    Skip(SkipReason),
    Match(ClassifiedGroup<'a>),
}

/// Units a row should receive; zero when the row is not a receive candidate.
///
/// A row receives when it sells more than it holds and its stock is under
/// the configured ceiling. Stocked-out rows get their sales multiplied.
pub fn receive_need(record: &StoreVariantRecord, config: &AllocationConfig) -> u32 {
    let eligible = record.sales > record.stock && record.stock < config.receive_stock_ceiling;
    if !eligible {
        return 0;
    }
    if record.stock == 0 && record.sales > 0 {
        record.sales.saturating_mul(config.zero_stock_multiplier)
    } else {
        record.sales.saturating_sub(record.stock)
    }
}

/// Units a row can give up; zero when the row is not a send candidate.
pub fn send_capacity(record: &StoreVariantRecord) -> u32 {
    if record.sales == 0 {
        record.stock
    } else if record.stock > record.sales {
        record.stock - record.sales
    } else {
        0
    }
}

/// Split a group into receivers (`need > 0`) and suppliers (`sendable > 0`).
///
/// The never-sender store is never a supplier. When it holds at least
/// `never_sender_skip_stock` units (its first row in the group decides),
/// the whole group is skipped.
pub fn classify_group<'a>(
    group: &VariantGroup<'a>,
    config: &AllocationConfig,
) -> Classification<'a> {
    let never_sender_row = group
        .rows
        .iter()
        .find(|row| config.is_never_sender(&row.store));
    if let Some(row) = never_sender_row
        && row.stock >= config.never_sender_skip_stock
    {
        debug!(
            variant = %group.key,
            stock = row.stock,
            "never-sender store is stocked, skipping variant"
        );
        return Classification::Skip(SkipReason::NeverSenderStocked { stock: row.stock });
    }

    let mut receivers = Vec::new();
    let mut suppliers = Vec::new();
    for &record in &group.rows {
        let candidate = Candidate {
            record,
            need: receive_need(record, config),
            sendable: send_capacity(record),
        };
        if candidate.need > 0 {
            receivers.push(candidate);
        }
        if candidate.sendable > 0 && !config.is_never_sender(&record.store) {
            suppliers.push(candidate);
        }
    }

    if receivers.is_empty() {
        return Classification::Skip(SkipReason::NoReceivers);
    }
    if suppliers.is_empty() {
        return Classification::Skip(SkipReason::NoSuppliers);
    }
    Classification::Match(ClassifiedGroup {
        receivers,
        suppliers,
    })
}
