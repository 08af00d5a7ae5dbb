/// PostgreSQL store implementation
///
/// Implements every repository trait on a single pool-holding struct.
/// All queries go through sqlx with bind parameters; no query text is
/// built from user input.
///
/// # Example
///
/// ```no_run
/// use recruitlink_shared::db::pool::{create_pool, DatabaseConfig};
/// use recruitlink_shared::store::postgres::PgStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DatabaseConfig {
///     url: "postgres://localhost/recruitlink".to_string(),
///     max_connections: 10,
/// };
/// let pool = create_pool(&config).await?;
/// let store = PgStore::new(pool);
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{
    NotificationOutbox, RecruitmentStore, StoreError, TimelineStore, UserDirectory,
};
use crate::models::notification::{CreateNotificationRequest, NotificationRequest};
use crate::models::recruitment::{CreateRecruitment, Recruitment, RecruiterCount};
use crate::models::user::{User, UserRole};
use crate::models::user_event::{CreateUserEvent, UserEvent};

const USER_COLUMNS: &str =
    "id, name, email, role, recruitment_key, user_hash, active, created_at, updated_at";

/// Production store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Creates a store on top of an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Flat row for the leaderboard join: user columns plus the count
#[derive(Debug, sqlx::FromRow)]
struct LeaderboardRow {
    id: Uuid,
    name: String,
    email: String,
    role: UserRole,
    recruitment_key: Option<String>,
    user_hash: String,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    total: i64,
}

impl From<LeaderboardRow> for RecruiterCount {
    fn from(row: LeaderboardRow) -> Self {
        RecruiterCount {
            user: User {
                id: row.id,
                name: row.name,
                email: row.email,
                role: row.role,
                recruitment_key: row.recruitment_key,
                user_hash: row.user_hash,
                active: row.active,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            total: row.total,
        }
    }
}

#[async_trait]
impl UserDirectory for PgStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_recruitment_key(&self, key: &str) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE recruitment_key = $1"
        ))
        .bind(key)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find_by_hash(&self, user_hash: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_hash = $1"
        ))
        .bind(user_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn recruitment_key_taken(
        &self,
        key: &str,
        exclude_user: Uuid,
    ) -> Result<bool, StoreError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM users WHERE recruitment_key = $1 AND id <> $2",
        )
        .bind(key)
        .bind(exclude_user)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn set_recruitment_key(&self, user_id: Uuid, key: &str) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE users SET recruitment_key = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(user_id)
        .bind(key)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl RecruitmentStore for PgStore {
    async fn create(&self, data: CreateRecruitment) -> Result<Recruitment, StoreError> {
        let recruitment = sqlx::query_as::<_, Recruitment>(
            r#"
            INSERT INTO recruitments (user_id, name, phone_number)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, phone_number, created_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.name)
        .bind(data.phone_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(recruitment)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Recruitment>, StoreError> {
        let recruitments = sqlx::query_as::<_, Recruitment>(
            r#"
            SELECT id, user_id, name, phone_number, created_at
            FROM recruitments
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(recruitments)
    }

    async fn count_for_user(&self, user_id: Uuid) -> Result<i64, StoreError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM recruitments WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn count_for_user_between(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM recruitments
            WHERE user_id = $1 AND created_at >= $2 AND created_at <= $3
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn leaderboard(
        &self,
        window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<RecruiterCount>, StoreError> {
        // The window restricts the join condition, not the row set, so
        // users without recruitments survive the outer join with total = 0.
        let rows = if let Some((start, end)) = window {
            sqlx::query_as::<_, LeaderboardRow>(
                r#"
                SELECT u.id, u.name, u.email, u.role, u.recruitment_key,
                       u.user_hash, u.active, u.created_at, u.updated_at,
                       COUNT(r.id) AS total
                FROM users u
                LEFT JOIN recruitments r
                    ON r.user_id = u.id AND r.created_at >= $1 AND r.created_at <= $2
                GROUP BY u.id
                ORDER BY total DESC
                "#,
            )
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, LeaderboardRow>(
                r#"
                SELECT u.id, u.name, u.email, u.role, u.recruitment_key,
                       u.user_hash, u.active, u.created_at, u.updated_at,
                       COUNT(r.id) AS total
                FROM users u
                LEFT JOIN recruitments r ON r.user_id = u.id
                GROUP BY u.id
                ORDER BY total DESC
                "#,
            )
            .fetch_all(&self.pool)
            .await?
        };

        Ok(rows.into_iter().map(RecruiterCount::from).collect())
    }
}

#[async_trait]
impl NotificationOutbox for PgStore {
    async fn create(
        &self,
        data: CreateNotificationRequest,
    ) -> Result<NotificationRequest, StoreError> {
        let request = sqlx::query_as::<_, NotificationRequest>(
            r#"
            INSERT INTO notification_requests (target_id, route, channel, to_user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, target_id, route, channel, to_user_id, created_at
            "#,
        )
        .bind(data.target_id)
        .bind(data.route)
        .bind(data.channel)
        .bind(data.to_user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }
}

#[async_trait]
impl TimelineStore for PgStore {
    async fn record(&self, data: CreateUserEvent) -> Result<UserEvent, StoreError> {
        let event = sqlx::query_as::<_, UserEvent>(
            r#"
            INSERT INTO user_events (user_id, controller, route, target_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, controller, route, target_id, created_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.controller)
        .bind(data.route)
        .bind(data.target_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }
}
