use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One per-user JSON document, addressed by `(user_id, key)`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUserData {
    pub user_id: String,
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}
