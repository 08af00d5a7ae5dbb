/// Notification request model
///
/// A notification request is queued as a side effect of a new recruitment;
/// delivery itself is handled by the notification subsystem and is not part
/// of this crate.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE notification_channel AS ENUM ('sms');
///
/// CREATE TABLE notification_requests (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     target_id UUID NOT NULL,
///     route VARCHAR(100) NOT NULL,
///     channel notification_channel NOT NULL,
///     to_user_id UUID NOT NULL REFERENCES users(id),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delivery channel for a notification request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_channel", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    /// Short message to the recipient's phone
    Sms,
}

impl NotificationChannel {
    /// Converts channel to string for display
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationChannel::Sms => "sms",
        }
    }
}

/// Notification request queued for delivery
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct NotificationRequest {
    /// Unique request ID (UUID v4)
    pub id: Uuid,

    /// Referenced entity, here always a recruitment ID
    pub target_id: Uuid,

    /// Routing label consumed by the notification subsystem
    pub route: String,

    /// Delivery channel
    pub channel: NotificationChannel,

    /// Recipient user
    pub to_user_id: Uuid,

    /// When the request was queued
    pub created_at: DateTime<Utc>,
}

/// Input for queueing a new notification request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotificationRequest {
    /// Referenced entity ID
    pub target_id: Uuid,

    /// Routing label
    pub route: String,

    /// Delivery channel
    pub channel: NotificationChannel,

    /// Recipient user ID
    pub to_user_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_as_str() {
        assert_eq!(NotificationChannel::Sms.as_str(), "sms");
    }
}
