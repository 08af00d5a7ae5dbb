/// User model and role definitions
///
/// Users are owned by the account subsystem; this crate only reads the
/// fields the recruitment feature depends on and writes a single column,
/// `recruitment_key`.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(255) NOT NULL,
///     email CITEXT NOT NULL UNIQUE,
///     role user_role NOT NULL DEFAULT 'member',
///     recruitment_key VARCHAR(300) UNIQUE,
///     user_hash VARCHAR(64) NOT NULL UNIQUE,
///     active BOOLEAN NOT NULL DEFAULT TRUE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use recruitlink_shared::models::user::UserRole;
///
/// let role = UserRole::Stockist;
/// assert!(role.can_edit_recruitment_key());
/// assert!(!role.is_admin());
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access, including per-user recruitment lists and the leaderboard
    Admin,

    /// Can own a recruitment key and edit their own recruitment settings
    Stockist,

    /// Regular account with no recruitment capabilities
    Member,
}

impl UserRole {
    /// Converts role to string for display
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Stockist => "stockist",
            UserRole::Member => "member",
        }
    }

    /// Admin capability: aggregate views over any user's recruitments
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Stockist capability: view and edit the own recruitment key
    ///
    /// Admins pass this check as well.
    pub fn can_edit_recruitment_key(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Stockist)
    }
}

/// User model as seen by the recruitment feature
///
/// `recruitment_key` is unique across all users once set. `user_hash` is the
/// opaque token that identifies the user during the public join flow; it is
/// embedded in the join page form and round-trips through the phone
/// submission request.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4)
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address (case-insensitive via CITEXT)
    pub email: String,

    /// Account role
    pub role: UserRole,

    /// Personal referral code, unique among all users when set
    pub recruitment_key: Option<String>,

    /// Opaque join-session token, unique per user
    pub user_hash: String,

    /// Whether the account may receive recruitments
    pub active: bool,

    /// When the user account was created
    pub created_at: DateTime<Utc>,

    /// When the user account was last updated
    pub updated_at: DateTime<Utc>,
}
