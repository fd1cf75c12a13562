//! Aggregate views over a finished transfer plan.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use restock_model::{StoreVariantRecord, TransferLine};
use serde::Serialize;

use crate::error::{ReportError, Result};

/// Units shipped or received by one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreTotal {
    pub store: String,
    pub units: u64,
}

/// The product/color combination moved the most.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopProduct {
    pub product_code: String,
    pub product_name: String,
    pub color_name: String,
    pub units: u64,
}

/// Sender × receiver cross-tabulation, zero-filled.
///
/// `units[i][j]` is what `senders[i]` ships to `receivers[j]`. Both axes are
/// sorted by store name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowMatrix {
    pub senders: Vec<String>,
    pub receivers: Vec<String>,
    pub units: Vec<Vec<u64>>,
}

impl FlowMatrix {
    pub fn build(lines: &[TransferLine]) -> Self {
        let mut cells: BTreeMap<(&str, &str), u64> = BTreeMap::new();
        let mut senders = BTreeSet::new();
        let mut receivers = BTreeSet::new();
        for line in lines {
            senders.insert(line.from_store.as_str());
            receivers.insert(line.to_store.as_str());
            *cells
                .entry((line.from_store.as_str(), line.to_store.as_str()))
                .or_insert(0) += u64::from(line.quantity);
        }
        let units = senders
            .iter()
            .map(|sender| {
                receivers
                    .iter()
                    .map(|receiver| cells.get(&(*sender, *receiver)).copied().unwrap_or(0))
                    .collect()
            })
            .collect();
        Self {
            senders: senders.into_iter().map(str::to_string).collect(),
            receivers: receivers.into_iter().map(str::to_string).collect(),
            units,
        }
    }

    pub fn get(&self, sender: &str, receiver: &str) -> u64 {
        let row = self.senders.iter().position(|s| s == sender);
        let col = self.receivers.iter().position(|r| r == receiver);
        match (row, col) {
            (Some(row), Some(col)) => self.units[row][col],
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}

/// Totals and breakdowns shown after an allocation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferSummary {
    pub total_sales: u64,
    pub total_stock: u64,
    pub total_shipped: u64,
    /// Descending by units, ties by store name.
    pub received_by_store: Vec<StoreTotal>,
    /// Descending by units, ties by store name.
    pub sent_by_store: Vec<StoreTotal>,
    pub flows: FlowMatrix,
    pub top_product: Option<TopProduct>,
}

impl TransferSummary {
    pub fn build(records: &[StoreVariantRecord], lines: &[TransferLine]) -> Self {
        Self {
            total_sales: records.iter().map(|r| u64::from(r.sales)).sum(),
            total_stock: records.iter().map(|r| u64::from(r.stock)).sum(),
            total_shipped: lines.iter().map(|l| u64::from(l.quantity)).sum(),
            received_by_store: store_totals(lines, |line| &line.to_store),
            sent_by_store: store_totals(lines, |line| &line.from_store),
            flows: FlowMatrix::build(lines),
            top_product: top_product(lines),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn store_totals<F>(lines: &[TransferLine], store: F) -> Vec<StoreTotal>
where
    F: Fn(&TransferLine) -> &String,
{
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for line in lines {
        *totals.entry(store(line).as_str()).or_insert(0) += u64::from(line.quantity);
    }
    let mut ordered: Vec<StoreTotal> = totals
        .into_iter()
        .map(|(store, units)| StoreTotal {
            store: store.to_string(),
            units,
        })
        .collect();
    ordered.sort_by(|a, b| b.units.cmp(&a.units));
    ordered
}

fn top_product(lines: &[TransferLine]) -> Option<TopProduct> {
    let mut totals: BTreeMap<(&str, &str, &str), u64> = BTreeMap::new();
    for line in lines {
        let key = (
            line.product_code.as_str(),
            line.product_name.as_str(),
            line.color_name.as_str(),
        );
        *totals.entry(key).or_insert(0) += u64::from(line.quantity);
    }
    let mut best: Option<((&str, &str, &str), u64)> = None;
    for (key, units) in totals {
        if best.is_none_or(|(_, top)| units > top) {
            best = Some((key, units));
        }
    }
    best.map(|((code, name, color), units)| TopProduct {
        product_code: code.to_string(),
        product_name: name.to_string(),
        color_name: color.to_string(),
        units,
    })
}
