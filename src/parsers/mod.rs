//! Parsers for conversation export documents
//!
//! # Error Handling Strategy
//!
//! Only document-level problems are errors, and they are typed ([`LoadError`]) so
//! the caller can report them and move on to the next export:
//!
//! - **Missing file**: [`LoadError::NotFound`]
//! - **Unparseable content**: [`LoadError::Malformed`]
//! - **Unrecognized top-level shape**: [`LoadError::UnsupportedShape`]
//!
//! Everything below the document level degrades to defaults instead of failing:
//! a record with no usable timestamp is simply unresolved, a message without a role
//! gets `"unknown"`, and a record matching no message schema has no messages.

pub mod loader;
pub mod messages;
pub mod timestamps;
pub mod values;

pub use loader::{LoadError, conversations_from_document, load_conversations};
pub use messages::extract_messages;
pub use timestamps::{parse_timestamp_value, raw_timestamp, resolve_timestamp};
