//! Export Splitter - Split chat assistant conversation exports by age
//!
//! This library turns a bulk conversation export (ChatGPT, Claude, or a similar
//! JSON document) into four smaller files of minimized conversations:
//!
//! - Loading the export and normalizing its top-level shape into a list of records
//! - Resolving a best-effort creation time from several possible fields and formats
//! - Bucketing each conversation as `last-3-months`, `3-6-months`, `6-12-months` or `older`
//! - Reducing conversations to role/content messages, a raw timestamp and a short title
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use chrono::Utc;
//! use export_splitter::split_export;
//!
//! let report = split_export(
//!     Path::new("data-export/chatgpt-export/conversations.json"),
//!     Path::new("data-export/chatgpt-export/split"),
//!     Utc::now(),
//! )?;
//! println!("Split {} conversations", report.total_conversations);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod models;
pub mod parsers;
pub mod splitter;
pub mod utils;

// Re-export commonly used types
pub use models::{AgeBucket, MinimalMessage, MinimizedConversation};
pub use parsers::{LoadError, load_conversations};
pub use splitter::{SplitReport, split_export};
