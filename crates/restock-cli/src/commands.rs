use anyhow::{Context, Result};
use restock_cli::pipeline::{
    ConfigOverrides, PlanResult, default_output_path, plan_transfers, resolve_config,
};
use restock_ingest::write_template;
use restock_model::AllocationConfig;
use tracing::info;

use crate::cli::{AllocateArgs, ConfigArgs, SettingsArgs, TemplateArgs};

pub fn run_allocate(args: &AllocateArgs) -> Result<PlanResult> {
    let config = config_from_settings(&args.settings)?;
    let output = if args.dry_run {
        None
    } else {
        Some(
            args.output
                .clone()
                .unwrap_or_else(|| default_output_path(&args.input)),
        )
    };
    let result = plan_transfers(&args.input, &config, output.as_deref())?;
    if let Some(path) = &args.summary_json {
        result
            .summary
            .write_json(path)
            .with_context(|| format!("write summary {}", path.display()))?;
    }
    Ok(result)
}

pub fn run_template(args: &TemplateArgs) -> Result<()> {
    write_template(&args.output)
        .with_context(|| format!("write template {}", args.output.display()))?;
    info!(path = %args.output.display(), "template written");
    println!("Template: {}", args.output.display());
    Ok(())
}

pub fn run_config(args: &ConfigArgs) -> Result<()> {
    let config = config_from_settings(&args.settings)?;
    print!("{}", config.to_toml_string().context("render config")?);
    Ok(())
}

fn config_from_settings(settings: &SettingsArgs) -> Result<AllocationConfig> {
    let overrides = ConfigOverrides {
        never_sender: settings.never_sender.clone(),
        capped_receiver: settings.capped_receiver.clone(),
        capped_receiver_limit: settings.capped_receiver_limit,
        max_per_line: settings.max_per_line,
    };
    resolve_config(settings.config.as_deref(), &overrides)
}
