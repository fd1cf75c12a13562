//! Ingest → allocate → report, without any terminal output.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use restock_core::{Allocation, allocate};
use restock_ingest::read_store_report;
use restock_model::{AllocationConfig, StoreVariantRecord};
use restock_report::{TransferSummary, write_transfers_csv};
use tracing::{info, info_span};

/// Command-line values that replace config file settings.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub never_sender: Option<String>,
    pub capped_receiver: Option<String>,
    pub capped_receiver_limit: Option<u32>,
    pub max_per_line: Option<u32>,
}

/// Load the config file when given, apply overrides, and validate.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<AllocationConfig> {
    let mut config = match path {
        Some(path) => AllocationConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => AllocationConfig::default(),
    };
    if let Some(store) = &overrides.never_sender {
        config.never_sender_store = store.clone();
    }
    if let Some(store) = &overrides.capped_receiver {
        config.capped_receiver_store = store.clone();
    }
    if let Some(limit) = overrides.capped_receiver_limit {
        config.capped_receiver_limit = limit;
    }
    if let Some(max) = overrides.max_per_line {
        config.max_per_line = max;
    }
    config.validate().context("validate config")?;
    Ok(config)
}

/// `<stem>_transfers.csv` next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    input.with_file_name(format!("{stem}_transfers.csv"))
}

/// Everything produced by one planning run.
#[derive(Debug)]
pub struct PlanResult {
    pub records: Vec<StoreVariantRecord>,
    pub allocation: Allocation,
    pub summary: TransferSummary,
    /// Where the plan was written, if it was.
    pub output: Option<PathBuf>,
}

/// Read the report, allocate transfers, and write the plan when `output` is set.
pub fn plan_transfers(
    input: &Path,
    config: &AllocationConfig,
    output: Option<&Path>,
) -> Result<PlanResult> {
    let span = info_span!("plan", input = %input.display());
    let _guard = span.enter();

    let ingest_start = Instant::now();
    let records =
        read_store_report(input).with_context(|| format!("read report {}", input.display()))?;
    info!(
        records = records.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let allocation = allocate(&records, config);
    let summary = TransferSummary::build(&records, &allocation.lines);

    if let Some(path) = output {
        write_transfers_csv(path, &allocation.lines)
            .with_context(|| format!("write transfer plan {}", path.display()))?;
    }

    Ok(PlanResult {
        records,
        allocation,
        summary,
        output: output.map(Path::to_path_buf),
    })
}
