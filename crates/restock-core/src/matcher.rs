//! Greedy pairing of receivers with suppliers.

use std::cmp::Ordering;
use std::collections::HashMap;

use restock_model::{AllocationConfig, TransferLine, VariantKey};
use tracing::trace;

use crate::classifier::{Candidate, ClassifiedGroup};

/// Matches classified groups while tracking what the capped receiver has
/// already taken per product code.
///
/// One matcher is used for a whole run: the capped-receiver totals span every
/// variant of a product, while supplier capacity is rebuilt for each group.
#[derive(Debug)]
pub struct Matcher<'c> {
    config: &'c AllocationConfig,
    capped_received: HashMap<String, u32>,
}

impl<'c> Matcher<'c> {
    pub fn new(config: &'c AllocationConfig) -> Self {
        Self {
            config,
            capped_received: HashMap::new(),
        }
    }

    /// Units the capped receiver has taken so far for `product_code`.
    pub fn capped_received(&self, product_code: &str) -> u32 {
        self.capped_received
            .get(product_code)
            .copied()
            .unwrap_or(0)
    }

    /// Produce transfer lines for one group.
    ///
    /// Each receiver walks the supplier list once, taking at most
    /// `max_per_line` units from each supplier it visits.
    pub fn match_group(
        &mut self,
        key: &VariantKey,
        group: ClassifiedGroup<'_>,
    ) -> Vec<TransferLine> {
        let ClassifiedGroup {
            mut receivers,
            mut suppliers,
        } = group;
        rank_receivers(&mut receivers);
        rank_suppliers(&mut suppliers);

        // Keyed by store name: duplicate supplier rows share one counter.
        let mut remaining: HashMap<&str, u32> = suppliers
            .iter()
            .map(|supplier| (supplier.store(), supplier.sendable))
            .collect();

        let mut lines = Vec::new();
        for receiver in &receivers {
            let mut remaining_need = receiver.need;
            if remaining_need == 0 {
                continue;
            }
            let capped = self.config.is_capped_receiver(receiver.store());

            for supplier in &suppliers {
                if supplier.store() == receiver.store() {
                    continue;
                }
                let available = remaining.get(supplier.store()).copied().unwrap_or(0);
                if available == 0 {
                    continue;
                }

                let mut quantity = remaining_need
                    .min(available)
                    .min(self.config.max_per_line);
                if capped {
                    let headroom = self
                        .config
                        .capped_receiver_limit
                        .saturating_sub(self.capped_received(&key.product_code));
                    quantity = quantity.min(headroom);
                }
                if quantity == 0 {
                    continue;
                }

                trace!(
                    variant = %key,
                    from = supplier.store(),
                    to = receiver.store(),
                    quantity,
                    "transfer line"
                );
                lines.push(TransferLine::new(
                    supplier.store(),
                    receiver.store(),
                    key,
                    quantity,
                ));
                remaining.insert(supplier.store(), available - quantity);
                remaining_need -= quantity;
                if capped {
                    *self
                        .capped_received
                        .entry(key.product_code.clone())
                        .or_insert(0) += quantity;
                }

                if remaining_need == 0 {
                    break;
                }
            }
        }
        lines
    }
}

/// Stocked-out rows first, then larger need, then higher sales.
///
/// Stable: equal candidates keep input order.
pub fn rank_receivers(receivers: &mut [Candidate<'_>]) {
    receivers.sort_by(|a, b| {
        b.is_stocked_out()
            .cmp(&a.is_stocked_out())
            .then_with(|| b.need.cmp(&a.need))
            .then_with(|| b.record.sales.cmp(&a.record.sales))
    });
}

/// Non-selling rows first, then slower sellers, then more sendable, then
/// more stock.
///
/// Stable: equal candidates keep input order.
pub fn rank_suppliers(suppliers: &mut [Candidate<'_>]) {
    suppliers.sort_by(|a, b| supplier_order(a, b));
}

fn supplier_order(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.has_no_sales()
        .cmp(&a.has_no_sales())
        .then_with(|| a.record.sales.cmp(&b.record.sales))
        .then_with(|| b.sendable.cmp(&a.sendable))
        .then_with(|| b.record.stock.cmp(&a.record.stock))
}
