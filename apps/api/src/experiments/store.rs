//! Persistence for experiment runs. Append-only: experiments are inserted
//! once after the pipeline completes and never updated.

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::experiment::{ExperimentRow, PromptVariant, VariableSet};

/// Inserts a completed run and returns its id. Callers treat failure as
/// non-fatal: the in-memory variants are returned to the client either way.
pub async fn insert_experiment(
    db: &PgPool,
    base_prompt: &str,
    variables: &VariableSet,
    variants: &[PromptVariant],
) -> Result<Uuid> {
    let (id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO experiments (base_prompt, variables, variants)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(base_prompt)
    .bind(serde_json::to_value(variables)?)
    .bind(serde_json::to_value(variants)?)
    .fetch_one(db)
    .await?;

    Ok(id)
}

/// Fetches the `limit` most recent experiments, newest first.
pub async fn recent_experiments(db: &PgPool, limit: i64) -> Result<Vec<ExperimentRow>, sqlx::Error> {
    sqlx::query_as::<_, ExperimentRow>(
        "SELECT * FROM experiments ORDER BY created_at DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(db)
    .await
}

/// Fetches a single experiment by id.
pub async fn get_experiment(db: &PgPool, id: Uuid) -> Result<Option<ExperimentRow>, sqlx::Error> {
    sqlx::query_as::<_, ExperimentRow>("SELECT * FROM experiments WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
}
