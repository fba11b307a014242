use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use chrono::NaiveDateTime;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::generator::generate_transaction;

pub const MANIFEST_FILE: &str = "manifest.json";

/// Summary of one generation run, written after the last batch. Downstream
/// consumers check for this file to tell a complete run from an aborted
/// one.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Manifest {
    pub total_transactions: usize,
    pub total_batches: usize,
    pub batch_size: usize,
    #[serde(with = "crate::transaction::micros")]
    pub generated_at: NaiveDateTime,
    pub files: Vec<String>,
}

/// Batch files are 1-indexed with no zero padding.
#[must_use]
pub fn batch_file_name(batch_num: usize) -> String {
    format!("transactions_batch_{batch_num}.json")
}

/// Generates `count` transactions into `output_dir`, batching them into
/// pretty-printed JSON files of at most `batch_size` records, then writes
/// the manifest. Re-running against the same directory restarts numbering
/// at 1 and overwrites same-named files; stale files from a longer prior
/// run are left alone.
///
/// Each batch is fully materialized before being written, so memory stays
/// bounded by `batch_size` records, and each file lands in a single write.
///
/// # Errors
/// Errors when the output directory cannot be created or a batch or
/// manifest file cannot be serialized and written. Batches already on disk
/// are kept; the manifest is only written after the final batch.
pub fn generate_batch<R: Rng>(
    rng: &mut R,
    now: NaiveDateTime,
    count: usize,
    output_dir: &Path,
    batch_size: NonZeroUsize,
) -> Result<(), GenError> {
    fs::create_dir_all(output_dir)?;

    let batch_size = batch_size.get();
    let total_batches = count.div_ceil(batch_size);
    info!("Generating {count} transactions in {total_batches} batches...");

    let mut files = Vec::with_capacity(total_batches);
    let mut emitted = 0;
    for batch_num in 1..=total_batches {
        let actual_size = batch_size.min(count - emitted);
        let mut batch = Vec::with_capacity(actual_size);
        for _ in 0..actual_size {
            batch.push(generate_transaction(rng, now));
        }
        emitted += actual_size;

        let file_name = batch_file_name(batch_num);
        fs::write(output_dir.join(&file_name), serde_json::to_vec_pretty(&batch)?)?;
        files.push(file_name);

        let progress = percentage(emitted, count);
        info!("Progress: {progress:.1}% - Generated batch {batch_num}/{total_batches}");
    }

    let manifest = Manifest {
        total_transactions: count,
        total_batches,
        batch_size,
        generated_at: now,
        files,
    };
    fs::write(
        output_dir.join(MANIFEST_FILE),
        serde_json::to_vec_pretty(&manifest)?,
    )?;

    info!("Generation complete!");
    info!("Total transactions: {count}");
    info!("Total batches: {total_batches}");
    info!("Output directory: {}", fs::canonicalize(output_dir)?.display());

    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn percentage(emitted: usize, count: usize) -> f64 {
    emitted as f64 / count as f64 * 100.0
}
