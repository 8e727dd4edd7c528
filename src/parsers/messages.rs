//! Message extraction across export schemas
//!
//! Each supported shape is a strategy: a pure function that returns `None` when the
//! record does not carry its field (with the right JSON type), or the extracted
//! messages otherwise. Strategies are tried in [`EXTRACTION_STRATEGIES`] order and
//! the first applicable one wins, even if it yields no messages. Results from
//! different strategies are never merged.

use serde_json::Value;

use crate::models::MinimalMessage;
use crate::parsers::values::{is_truthy, truncate_chars, truthy_field, value_to_text};

/// Maximum characters kept per message
pub const MAX_CONTENT_CHARS: usize = 5000;

/// Role used when a message carries none
pub const DEFAULT_ROLE: &str = "unknown";

pub type ExtractionStrategy = fn(&Value) -> Option<Vec<MinimalMessage>>;

/// Strategies in priority order
pub const EXTRACTION_STRATEGIES: [ExtractionStrategy; 3] =
    [from_mapping_tree, from_message_list, from_item_list];

/// Extract the role-tagged messages of a conversation record
///
/// Records that match no strategy yield an empty list.
pub fn extract_messages(record: &Value) -> Vec<MinimalMessage> {
    EXTRACTION_STRATEGIES.iter().find_map(|strategy| strategy(record)).unwrap_or_default()
}

/// Tree of nodes keyed by id under `mapping`, each node optionally holding a
/// `message` with `content.parts` (ChatGPT exports)
///
/// Nodes are visited in document order. Non-empty parts are joined with a single space.
pub fn from_mapping_tree(record: &Value) -> Option<Vec<MinimalMessage>> {
    let nodes = record.get("mapping")?.as_object()?;

    let messages = nodes
        .values()
        .filter_map(|node| {
            let message = truthy_field(node, "message")?;
            let parts = truthy_field(message, "content")?.get("parts")?.as_array()?;

            let joined = parts
                .iter()
                .filter(|part| is_truthy(part))
                .filter_map(value_to_text)
                .collect::<Vec<_>>()
                .join(" ");
            if joined.trim().is_empty() {
                return None;
            }

            let role = message.get("author").and_then(|author| author.get("role"));
            Some(MinimalMessage {
                role: role_or_default(role),
                content: truncate_chars(&joined, MAX_CONTENT_CHARS),
            })
        })
        .collect();

    Some(messages)
}

/// Flat `messages` list whose entries carry `content` (or `text`) and `role` (or `author`)
pub fn from_message_list(record: &Value) -> Option<Vec<MinimalMessage>> {
    let list = record.get("messages")?.as_array()?;

    let messages = list
        .iter()
        .filter_map(|msg| {
            let content = truthy_field(msg, "content").or_else(|| truthy_field(msg, "text"))?;
            let content = value_to_text(content)?;

            let role = msg.get("role").filter(|r| !r.is_null()).or_else(|| msg.get("author"));
            Some(MinimalMessage {
                role: role_or_default(role),
                content: truncate_chars(&content, MAX_CONTENT_CHARS),
            })
        })
        .collect();

    Some(messages)
}

/// Flat `items` list; every object entry with a `content` key becomes a message
pub fn from_item_list(record: &Value) -> Option<Vec<MinimalMessage>> {
    let items = record.get("items")?.as_array()?;

    let messages = items
        .iter()
        .filter_map(|item| {
            let content = item.as_object()?.get("content")?;
            // A null content is kept as an empty message, not the text "None"
            let content = value_to_text(content).unwrap_or_default();

            Some(MinimalMessage {
                role: role_or_default(item.get("role")),
                content: truncate_chars(&content, MAX_CONTENT_CHARS),
            })
        })
        .collect();

    Some(messages)
}

fn role_or_default(role: Option<&Value>) -> String {
    role.and_then(value_to_text).unwrap_or_else(|| DEFAULT_ROLE.to_string())
}
