/// User event (timeline) model
///
/// User events form an append-only activity timeline. This crate records
/// one event per recruitment; the timeline itself is rendered elsewhere.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE user_events (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL REFERENCES users(id),
///     controller VARCHAR(100) NOT NULL,
///     route VARCHAR(100) NOT NULL,
///     target_id UUID NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry in a user's activity timeline
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserEvent {
    /// Unique event ID (UUID v4)
    pub id: Uuid,

    /// User the event belongs to
    pub user_id: Uuid,

    /// Controller label consumed by the timeline renderer
    pub controller: String,

    /// Route of the event within the timeline
    pub route: String,

    /// Referenced entity, here always a recruitment ID
    pub target_id: Uuid,

    /// When the event was recorded
    pub created_at: DateTime<Utc>,
}

/// Input for recording a new user event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserEvent {
    /// User the event belongs to
    pub user_id: Uuid,

    /// Controller label
    pub controller: String,

    /// Route of the event
    pub route: String,

    /// Referenced entity ID
    pub target_id: Uuid,
}
