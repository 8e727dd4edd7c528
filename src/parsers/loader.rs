use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Why an export document could not be turned into conversation records
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected data structure in {}", .path.display())]
    UnsupportedShape { path: PathBuf },
}

/// Load an export file and return its conversation records in document order
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if `path` does not exist, [`LoadError::Malformed`]
/// if the content is not valid JSON, and [`LoadError::UnsupportedShape`] if the
/// top-level value is neither an object nor an array.
pub fn load_conversations(path: &Path) -> Result<Vec<Value>, LoadError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound { path: path.to_path_buf() },
        _ => LoadError::Read { path: path.to_path_buf(), source },
    })?;

    let document: Value = serde_json::from_slice(&bytes)
        .map_err(|source| LoadError::Malformed { path: path.to_path_buf(), source })?;

    conversations_from_document(document)
        .ok_or_else(|| LoadError::UnsupportedShape { path: path.to_path_buf() })
}

/// Normalize the top-level document into a flat list of conversation records
///
/// Shapes are tried in order:
///
/// 1. An object with a `conversations` key
/// 2. An object with an `items` key
/// 3. Any other object: its first array-valued entry, or an empty list if none
/// 4. An array, used as-is
///
/// Returns `None` for scalars, and for objects whose `conversations` or `items`
/// value is not an array.
pub fn conversations_from_document(document: Value) -> Option<Vec<Value>> {
    match document {
        Value::Object(mut map) => {
            if let Some(conversations) = map.remove("conversations") {
                return into_array(conversations);
            }
            if let Some(items) = map.remove("items") {
                return into_array(items);
            }
            let first_list = map.into_iter().find_map(|(_, value)| into_array(value));
            Some(first_list.unwrap_or_default())
        }
        Value::Array(records) => Some(records),
        _ => None,
    }
}

fn into_array(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(records) => Some(records),
        _ => None,
    }
}
