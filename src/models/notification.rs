use serde::Serialize;
use uuid::Uuid;

/// Ephemeral toast shown when an alert fires. Expires on its own after a
/// fixed TTL, or earlier if the user dismisses it.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,

    #[serde(skip)]
    pub expires_at: i64,
}
