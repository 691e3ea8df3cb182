pub mod cli;
pub mod data_dir;
pub mod error;
pub mod models;
pub mod segmentation;
pub mod settings;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Args;
use data_dir::{read_sub_utterances, write_tables, DataDir};
use segmentation::{merge_sub_utterances, MergeConfig, MergeResult, MergeSummary};
use settings::PrepSettings;

const ENABLE_LOGS: bool = true;

/// Read `text`, merge it, and write `utt2spk` and `segments`.
///
/// Merging finishes before either table is opened, so any input error leaves
/// the directory untouched.
pub fn prepare_data_dir(dir: &DataDir, config: &MergeConfig) -> Result<MergeResult> {
    let text_path = dir.text_path();
    let records = read_sub_utterances(&text_path)?;

    let result = merge_sub_utterances(records, config)
        .with_context(|| format!("Failed to merge sub-utterances from {}", text_path.display()))?;

    write_tables(
        &result.recordings,
        config.id_digits,
        &dir.utt2spk_path(),
        &dir.segments_path(),
    )
    .with_context(|| format!("Failed to write tables in {}", dir.root().display()))?;

    Ok(result)
}

/// Everything `run` does after logging is set up.
pub fn run_with_args(args: &Args) -> Result<MergeSummary> {
    let mut settings = PrepSettings::load_or_default(args.config.as_deref())?;
    args.apply_overrides(&mut settings);

    let dir = DataDir::new(args.data_dir.clone(), settings.files.clone());
    crate::log_info!(
        "Preparing {} (sort input: {}, id digits: {})",
        dir.root().display(),
        settings.merge.sort_input,
        settings.merge.id_digits
    );

    let result = prepare_data_dir(&dir, &settings.merge)?;
    let summary = MergeSummary::from(&result);

    if let Some(path) = &args.summary {
        summary
            .write_json(path)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        crate::log_info!("Summary saved to {}", path.display());
    }

    Ok(summary)
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (reads RUST_LOG env var)
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();

    if let Err(err) = run_with_args(&args) {
        crate::log_error!("segprep failed: {err:#}");
        return Err(err);
    }

    Ok(())
}
