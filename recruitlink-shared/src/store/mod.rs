/// Persistence interfaces for the recruitment feature
///
/// Each entity is accessed through a narrow repository trait so the
/// controller layer can be exercised against an in-memory implementation.
/// Two implementations exist:
///
/// - [`postgres::PgStore`]: production store backed by sqlx/PostgreSQL
/// - [`memory::MemoryStore`]: in-process store for handler tests
///
/// # Example
///
/// ```
/// use recruitlink_shared::store::{memory::MemoryStore, UserDirectory};
///
/// # async fn example() -> Result<(), recruitlink_shared::store::StoreError> {
/// let store = MemoryStore::new();
/// let missing = store.find_by_hash("no-such-hash").await?;
/// assert!(missing.is_none());
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::notification::{CreateNotificationRequest, NotificationRequest};
use crate::models::recruitment::{CreateRecruitment, Recruitment, RecruiterCount};
use crate::models::user::User;
use crate::models::user_event::{CreateUserEvent, UserEvent};

pub mod memory;
pub mod postgres;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A row the operation requires does not exist
    #[error("row not found")]
    NotFound,
}

/// Read/write access to user rows, limited to what recruitment needs
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds a user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Finds all users holding the given recruitment key
    ///
    /// Returns every match so the caller can enforce the exactly-one rule
    /// of the join page; the unique constraint makes more than one match
    /// pathological but the contract does not assume it.
    async fn find_by_recruitment_key(&self, key: &str) -> Result<Vec<User>, StoreError>;

    /// Finds a user by their join-session hash
    async fn find_by_hash(&self, user_hash: &str) -> Result<Option<User>, StoreError>;

    /// Checks whether a recruitment key is owned by any user other than
    /// `exclude_user`
    async fn recruitment_key_taken(
        &self,
        key: &str,
        exclude_user: Uuid,
    ) -> Result<bool, StoreError>;

    /// Persists a new recruitment key on the given user
    async fn set_recruitment_key(&self, user_id: Uuid, key: &str) -> Result<(), StoreError>;
}

/// Persistence of recruitment rows and their aggregates
#[async_trait]
pub trait RecruitmentStore: Send + Sync {
    /// Creates a new recruitment row
    async fn create(&self, data: CreateRecruitment) -> Result<Recruitment, StoreError>;

    /// Lists all recruitments owned by a user, newest first
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Recruitment>, StoreError>;

    /// Counts all recruitments owned by a user
    async fn count_for_user(&self, user_id: Uuid) -> Result<i64, StoreError>;

    /// Counts recruitments owned by a user created within `[start, end]`
    /// (both bounds inclusive)
    async fn count_for_user_between(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, StoreError>;

    /// Per-user recruitment counts, sorted by count descending
    ///
    /// Computed as an outer join from users to recruitments, so users with
    /// zero recruitments appear in the result with `total = 0`. When a
    /// window is given, only recruitments inside `[start, end]` are
    /// counted; the join itself is not restricted.
    async fn leaderboard(
        &self,
        window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<RecruiterCount>, StoreError>;
}

/// Queueing of notification requests (delivery is out of scope)
#[async_trait]
pub trait NotificationOutbox: Send + Sync {
    /// Queues a notification request
    async fn create(
        &self,
        data: CreateNotificationRequest,
    ) -> Result<NotificationRequest, StoreError>;
}

/// Appending of user activity-timeline events
#[async_trait]
pub trait TimelineStore: Send + Sync {
    /// Records a timeline event
    async fn record(&self, data: CreateUserEvent) -> Result<UserEvent, StoreError>;
}
