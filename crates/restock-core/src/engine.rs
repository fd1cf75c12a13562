use restock_model::{AllocationConfig, StoreVariantRecord, TransferLine};
use tracing::{debug, info, info_span};

use crate::classifier::{Classification, SkipReason, classify_group};
use crate::grouper::group_by_variant;
use crate::matcher::Matcher;

/// Counts describing how a run went, for logging and summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationStats {
    pub groups: usize,
    pub skipped_never_sender: usize,
    pub without_receivers: usize,
    pub without_suppliers: usize,
    /// Groups that produced at least one line.
    pub groups_with_transfers: usize,
    pub units: u64,
}

/// Result of an allocation run.
#[derive(Debug, Clone, Default)]
pub struct Allocation {
    /// Lines in group order, then receiver priority, then supplier priority.
    pub lines: Vec<TransferLine>,
    pub stats: AllocationStats,
}

impl Allocation {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Run the allocation over every variant group.
///
/// Deterministic: the same records and config always produce the same lines
/// in the same order.
pub fn allocate(records: &[StoreVariantRecord], config: &AllocationConfig) -> Allocation {
    let span = info_span!("allocate", rows = records.len());
    let _guard = span.enter();

    let mut matcher = Matcher::new(config);
    let mut allocation = Allocation::default();
    for group in group_by_variant(records) {
        allocation.stats.groups += 1;
        match classify_group(&group, config) {
            Classification::Skip(reason) => {
                match reason {
                    SkipReason::NeverSenderStocked { .. } => {
                        allocation.stats.skipped_never_sender += 1;
                    }
                    SkipReason::NoReceivers => allocation.stats.without_receivers += 1,
                    SkipReason::NoSuppliers => allocation.stats.without_suppliers += 1,
                }
            }
            Classification::Match(classified) => {
                let lines = matcher.match_group(&group.key, classified);
                if !lines.is_empty() {
                    allocation.stats.groups_with_transfers += 1;
                }
                debug!(variant = %group.key, lines = lines.len(), "group matched");
                allocation.lines.extend(lines);
            }
        }
    }
    allocation.stats.units = allocation
        .lines
        .iter()
        .map(|line| u64::from(line.quantity))
        .sum();

    info!(
        groups = allocation.stats.groups,
        skipped_never_sender = allocation.stats.skipped_never_sender,
        lines = allocation.lines.len(),
        units = allocation.stats.units,
        "allocation complete"
    );
    allocation
}
