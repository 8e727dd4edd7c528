use serde_json::Value;

use crate::models::MinimizedConversation;
use crate::parsers::extract_messages;
use crate::parsers::values::{truncate_chars, truthy_field, value_to_text};

/// Maximum characters kept from a conversation title
pub const MAX_TITLE_CHARS: usize = 100;

/// Fields whose first truthy value is carried over as the output timestamp
pub const OUTPUT_TIMESTAMP_FIELDS: [&str; 3] = ["create_time", "created_at", "timestamp"];

/// Reduce a raw conversation record to messages, raw timestamp and a short title
///
/// The timestamp is copied unconverted and is independent of the one used for
/// bucketing, which also looks at `metadata` and other field names.
pub fn minimize(record: &Value) -> MinimizedConversation {
    let timestamp = OUTPUT_TIMESTAMP_FIELDS
        .iter()
        .find_map(|field| truthy_field(record, field))
        .cloned()
        .unwrap_or(Value::Null);

    // A null title is treated as missing, giving "" rather than the text "None"
    let title = record
        .get("title")
        .and_then(value_to_text)
        .map(|title| truncate_chars(&title, MAX_TITLE_CHARS))
        .unwrap_or_default();

    MinimizedConversation { messages: extract_messages(record), timestamp, title }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::MinimalMessage;

    #[test]
    fn test_minimize_message_list_record() {
        let record = json!({
            "uuid": "abc",
            "create_time": 1700000000,
            "title": "Hello",
            "messages": [{"role": "user", "content": "hi", "attachments": []}],
            "metadata": {"model": "x"}
        });

        let minimized = minimize(&record);
        assert_eq!(
            minimized.messages,
            vec![MinimalMessage { role: "user".into(), content: "hi".into() }]
        );
        assert_eq!(minimized.timestamp, json!(1700000000));
        assert_eq!(minimized.title, "Hello");
    }

    #[test]
    fn test_timestamp_takes_first_truthy_field() {
        let record = json!({"create_time": 0, "created_at": "", "timestamp": "2024-01-15"});
        assert_eq!(minimize(&record).timestamp, json!("2024-01-15"));

        let record = json!({"created_at": "2024-01-15T10:30:00Z", "timestamp": 5});
        assert_eq!(minimize(&record).timestamp, json!("2024-01-15T10:30:00Z"));
    }

    #[test]
    fn test_timestamp_ignores_metadata_and_update_fields() {
        let record = json!({"updated_at": 1700000000, "metadata": {"create_time": 1700000000}});
        assert_eq!(minimize(&record).timestamp, Value::Null);
    }

    #[test]
    fn test_title_truncated_to_100_chars() {
        let record = json!({"title": "t".repeat(250)});
        assert_eq!(minimize(&record).title, "t".repeat(MAX_TITLE_CHARS));
    }

    #[test]
    fn test_title_defaults_and_coercion() {
        assert_eq!(minimize(&json!({})).title, "");
        assert_eq!(minimize(&json!({"title": null})).title, "");
        assert_eq!(minimize(&json!({"title": 42})).title, "42");
    }

    #[test]
    fn test_non_object_record_minimizes_to_empty() {
        let minimized = minimize(&json!([1, 2, 3]));
        assert!(minimized.messages.is_empty());
        assert_eq!(minimized.timestamp, Value::Null);
        assert_eq!(minimized.title, "");
    }
}
