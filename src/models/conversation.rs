use serde::Serialize;
use serde_json::Value;

/// A single role-tagged message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinimalMessage {
    pub role: String,
    pub content: String,
}

/// Stripped-down conversation as written to a bucket file
///
/// `timestamp` is the raw value from the source record (seconds, milliseconds or
/// a date string, unconverted), or `null` when none was present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinimizedConversation {
    pub messages: Vec<MinimalMessage>,
    pub timestamp: Value,
    pub title: String,
}
