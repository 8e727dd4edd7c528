//! Load → classify → minimize → emit for a single export file

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::models::{AgeBucket, MinimizedConversation};
use crate::parsers::load_conversations;
use crate::splitter::{minimize, partition};
use crate::utils::format_megabytes;

/// A bucket file that was written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Outcome for one bucket; `file` is `None` when the bucket was empty and skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketReport {
    pub bucket: AgeBucket,
    pub count: usize,
    pub file: Option<WrittenFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    pub total_conversations: usize,
    pub buckets: Vec<BucketReport>,
}

impl SplitReport {
    /// Combined size of all written bucket files
    pub fn total_bytes(&self) -> u64 {
        self.buckets.iter().filter_map(|b| b.file.as_ref()).map(|f| f.bytes).sum()
    }

    pub fn bucket(&self, bucket: AgeBucket) -> Option<&BucketReport> {
        self.buckets.iter().find(|b| b.bucket == bucket)
    }
}

/// Split one export file into per-bucket JSON files under `output_dir`
///
/// `now` is the reference instant for bucketing and should be captured once per run.
/// Progress and a per-bucket summary are printed to stdout.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded (see
/// [`LoadError`](crate::parsers::LoadError)), in which case nothing is written, or if
/// the output directory or a bucket file cannot be written.
pub fn split_export(input: &Path, output_dir: &Path, now: DateTime<Utc>) -> Result<SplitReport> {
    println!("Loading {}...", input.display());
    let records = load_conversations(input)?;
    println!("Total conversations: {}", records.len());

    let non_objects = records.iter().filter(|r| !r.is_object()).count();
    if non_objects > 0 {
        eprintln!(
            "Warning: {} records in {} are not JSON objects (bucketed as older, no messages)",
            non_objects,
            input.display()
        );
    }

    let partition = partition(records, now);

    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let mut buckets = Vec::with_capacity(AgeBucket::ALL.len());
    for (bucket, records) in partition.iter() {
        if records.is_empty() {
            println!("  {}: 0 conversations (skipped)", bucket);
            buckets.push(BucketReport { bucket, count: 0, file: None });
            continue;
        }

        let minimized: Vec<MinimizedConversation> = records.iter().map(minimize).collect();
        let file = write_bucket(output_dir, bucket, &minimized)?;
        println!(
            "  {}: {} conversations → {} MB",
            bucket,
            records.len(),
            format_megabytes(file.bytes)
        );
        buckets.push(BucketReport { bucket, count: records.len(), file: Some(file) });
    }

    let report = SplitReport { total_conversations: partition.len(), buckets };

    println!();
    println!("✅ Done! Files saved to: {}", output_dir.display());
    println!("   Total size: {} MB", format_megabytes(report.total_bytes()));

    Ok(report)
}

/// Write minimized conversations as pretty-printed JSON to `<output_dir>/<bucket>.json`
pub fn write_bucket(
    output_dir: &Path,
    bucket: AgeBucket,
    conversations: &[MinimizedConversation],
) -> Result<WrittenFile> {
    let path = output_dir.join(bucket.file_name());

    let json = serde_json::to_string_pretty(conversations)
        .with_context(|| format!("Failed to serialize bucket {}", bucket))?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    let bytes = fs::metadata(&path)
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?
        .len();

    Ok(WrittenFile { path, bytes })
}
