use crate::models::DbUserData;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_value(
    pool: &Pool<Postgres>,
    user_id: &str,
    key: &str,
) -> Result<Option<DbUserData>> {
    tracing::debug!("Getting user data: user_id={}, key={}", user_id, key);

    let row = sqlx::query_as::<_, DbUserData>(
        r#"
        SELECT user_id, key, value, updated_at
        FROM user_data
        WHERE user_id = $1 AND key = $2
        "#,
    )
    .bind(user_id)
    .bind(key)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Inserts or overwrites the whole document.
pub async fn set_value(
    pool: &Pool<Postgres>,
    user_id: &str,
    key: &str,
    value: &serde_json::Value,
) -> Result<DbUserData> {
    let now = Utc::now();

    tracing::debug!("Setting user data: user_id={}, key={}", user_id, key);

    let row = sqlx::query_as::<_, DbUserData>(
        r#"
        INSERT INTO user_data (user_id, key, value, updated_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, key)
        DO UPDATE SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at
        RETURNING user_id, key, value, updated_at
        "#,
    )
    .bind(user_id)
    .bind(key)
    .bind(value)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}
