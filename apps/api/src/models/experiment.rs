use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Ordered mapping from category name to its candidate values.
/// Key order is semantic: it fixes the order in which "<key>: <value>"
/// labels are prefixed onto a prompt, so the map must preserve insertion
/// order across serde round-trips (hence IndexMap, not HashMap).
pub type VariableSet = IndexMap<String, Vec<String>>;

/// Lexical metrics derived from a single response. All fields are always
/// present; an empty response yields the all-zero record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub word_count: u32,
    /// In [0, 1]; saturates at 1 after 3 distinct certainty-term hits.
    pub certainty: f64,
    /// Net positive minus negative term hits; may be negative.
    pub sentiment_score: i32,
}

impl MetricsRecord {
    pub fn zero() -> Self {
        Self {
            word_count: 0,
            certainty: 0.0,
            sentiment_score: 0,
        }
    }
}

/// One fully-resolved prompt variant with its response and metrics.
/// Immutable once assembled by the pipeline; ids are "v1", "v2", ... in
/// expander emission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptVariant {
    pub id: String,
    pub prompt: String,
    pub response: String,
    pub metrics: MetricsRecord,
}

/// A persisted experiment run. Append-only: written once after the pipeline
/// completes, never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExperimentRow {
    pub id: Uuid,
    pub base_prompt: String,
    pub variables: Value,
    pub variants: Value,
    pub created_at: DateTime<Utc>,
}
