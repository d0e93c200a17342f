use serde::{Deserialize, Serialize};

/// Lifecycle metadata stamped on every aggregate instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl EntityMetadata {
    /// Metadata for a freshly created aggregate
    pub fn new() -> Self {
        Self {
            created_at: chrono::Utc::now(),
        }
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
