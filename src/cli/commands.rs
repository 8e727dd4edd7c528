use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use crate::splitter::{SplitReport, split_export};
use crate::utils::{ExportJob, export_jobs};

#[derive(Parser)]
#[command(name = "export-splitter")]
#[command(version = "0.1.0")]
#[command(about = "Split ChatGPT and Claude conversation exports into age buckets", long_about = None)]
pub struct Cli {}

pub fn run() -> Result<()> {
    let _cli = Cli::parse();

    for (i, job) in export_jobs().iter().enumerate() {
        if i > 0 {
            println!();
        }
        run_job(job);
    }

    Ok(())
}

/// Run one export job, reporting a failure on stdout instead of propagating it
pub fn run_job(job: &ExportJob) -> Option<SplitReport> {
    println!("=== {} Export ===", job.label);

    let now = Utc::now();
    match split_export(&job.input, &job.output_dir, now) {
        Ok(report) => Some(report),
        Err(e) => {
            println!("❌ Error: {:#}", e);
            None
        }
    }
}
