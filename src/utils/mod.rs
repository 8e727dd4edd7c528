pub mod environment;
pub mod format;

pub use environment::{ExportJob, export_jobs, export_jobs_in};
pub use format::format_megabytes;
