//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use serde_json::{Map, Value, json};
use tempfile::TempDir;

pub const CHATGPT_EXPORT_DIR: &str = "data-export/chatgpt-export";
pub const CLAUDE_EXPORT_DIR: &str = "data-export/claude-export";

/// Builder for a working directory holding the fixed `data-export/` layout
pub struct ExportDirBuilder {
    temp_dir: TempDir,
}

impl ExportDirBuilder {
    /// Create a new builder with an empty working directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the working directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the ChatGPT export document
    pub fn with_chatgpt_export(self, document: &Value) -> Self {
        self.with_raw(CHATGPT_EXPORT_DIR, &document.to_string())
    }

    /// Write the Claude export document
    pub fn with_claude_export(self, document: &Value) -> Self {
        self.with_raw(CLAUDE_EXPORT_DIR, &document.to_string())
    }

    /// Write raw (possibly invalid) content as the conversations.json of `export_dir`
    pub fn with_raw(self, export_dir: &str, content: &str) -> Self {
        let dir = self.temp_dir.path().join(export_dir);
        fs::create_dir_all(&dir).expect("Failed to create export dir");
        fs::write(dir.join("conversations.json"), content)
            .expect("Failed to write conversations.json");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ExportDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the conversations.json of an export under `root`
pub fn input_path(root: &Path, export_dir: &str) -> PathBuf {
    root.join(export_dir).join("conversations.json")
}

/// Path of the split/ output directory of an export under `root`
pub fn split_dir(root: &Path, export_dir: &str) -> PathBuf {
    root.join(export_dir).join("split")
}

/// Read a bucket file back as JSON
pub fn read_bucket(split_dir: &Path, bucket: &str) -> Value {
    let text = fs::read_to_string(split_dir.join(format!("{}.json", bucket)))
        .expect("Failed to read bucket file");
    serde_json::from_str(&text).expect("Bucket file is not valid JSON")
}

/// Unix seconds for `days` days before now
pub fn days_ago_secs(days: i64) -> i64 {
    (Utc::now() - Duration::days(days)).timestamp()
}

/// Builder for a single conversation record
pub struct ConversationBuilder {
    fields: Map<String, Value>,
    messages: Vec<Value>,
    mapping: Map<String, Value>,
}

impl ConversationBuilder {
    /// Create an empty conversation record
    pub fn new() -> Self {
        Self { fields: Map::new(), messages: Vec::new(), mapping: Map::new() }
    }

    /// Set an arbitrary top-level field
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn title(self, title: &str) -> Self {
        self.field("title", json!(title))
    }

    pub fn create_time(self, value: Value) -> Self {
        self.field("create_time", value)
    }

    /// Add a message to the flat `messages` list
    pub fn message(mut self, role: &str, content: &str) -> Self {
        self.messages.push(json!({"role": role, "content": content}));
        self
    }

    /// Add a node to the `mapping` tree
    pub fn mapping_node(mut self, id: &str, role: &str, parts: &[&str]) -> Self {
        self.mapping.insert(
            id.to_string(),
            json!({
                "id": id,
                "message": {"author": {"role": role}, "content": {"content_type": "text", "parts": parts}},
                "children": []
            }),
        );
        self
    }

    /// Convert to a JSON record
    pub fn to_json(&self) -> Value {
        let mut record = self.fields.clone();
        if !self.mapping.is_empty() {
            record.insert("mapping".to_string(), Value::Object(self.mapping.clone()));
        }
        if !self.messages.is_empty() {
            record.insert("messages".to_string(), Value::Array(self.messages.clone()));
        }
        Value::Object(record)
    }
}

impl Default for ConversationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
