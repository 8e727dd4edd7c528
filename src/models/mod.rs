//! Data models for split conversation exports.
//!
//! - [`AgeBucket`] - The four fixed age ranges a conversation can fall into
//! - [`MinimalMessage`] - A role/content pair extracted from any supported message shape
//! - [`MinimizedConversation`] - The reduced form written to each bucket file
//!
//! Raw conversation records stay as [`serde_json::Value`] because their shape varies
//! by export source; the parsers module probes them field by field.

pub mod bucket;
pub mod conversation;

pub use bucket::AgeBucket;
pub use conversation::{MinimalMessage, MinimizedConversation};
