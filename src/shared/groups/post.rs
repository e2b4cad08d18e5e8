//! Post Data Structure
//!
//! Posts live in their own collection and are looked up by member id.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::error::SharedError;

/// A post associated with a member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Post {
    pub fn new(id: impl Into<String>, categories: &[&str]) -> Self {
        Self {
            id: id.into(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Parse one untyped post object
    ///
    /// `categories` may be a single label or a list of labels.
    pub fn from_value(value: &Value) -> Result<Self, SharedError> {
        let object = value
            .as_object()
            .ok_or_else(|| SharedError::validation("post", "expected a JSON object"))?;
        let id = object
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| SharedError::validation("id", "missing or not a string"))?;

        let categories = match object.get("categories") {
            Some(Value::String(label)) => vec![label.clone()],
            Some(Value::Array(labels)) => labels
                .iter()
                .filter_map(|l| l.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };

        Ok(Self {
            id: id.to_string(),
            categories,
        })
    }

    pub fn category_label(&self) -> String {
        if self.categories.is_empty() {
            "Uncategorized".to_string()
        } else {
            self.categories.join(", ")
        }
    }
}

/// Parse the member posts payload
pub fn parse_posts(value: &Value) -> Result<Vec<Post>, SharedError> {
    let items = value
        .as_array()
        .ok_or_else(|| SharedError::validation("posts", "expected a JSON array"))?;
    items.iter().map(Post::from_value).collect()
}
