/// In-memory store implementation
///
/// Backs the repository traits with plain vectors behind async mutexes.
/// Used by handler and integration tests so controller logic can be
/// exercised without a database; behavior mirrors the PostgreSQL store,
/// including the outer-join semantics of the leaderboard.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{
    NotificationOutbox, RecruitmentStore, StoreError, TimelineStore, UserDirectory,
};
use crate::models::notification::{CreateNotificationRequest, NotificationRequest};
use crate::models::recruitment::{CreateRecruitment, Recruitment, RecruiterCount};
use crate::models::user::User;
use crate::models::user_event::{CreateUserEvent, UserEvent};

/// In-process store for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    recruitments: Mutex<Vec<Recruitment>>,
    notifications: Mutex<Vec<NotificationRequest>>,
    events: Mutex<Vec<UserEvent>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a user row
    pub async fn add_user(&self, user: User) {
        self.users.lock().await.push(user);
    }

    /// Snapshot of all recruitment rows, in insertion order
    pub async fn recruitments(&self) -> Vec<Recruitment> {
        self.recruitments.lock().await.clone()
    }

    /// Snapshot of all queued notification requests
    pub async fn notifications(&self) -> Vec<NotificationRequest> {
        self.notifications.lock().await.clone()
    }

    /// Snapshot of all recorded timeline events
    pub async fn events(&self) -> Vec<UserEvent> {
        self.events.lock().await.clone()
    }

    /// Backdates an existing recruitment, for month-window tests
    pub async fn set_recruitment_created_at(&self, id: Uuid, created_at: DateTime<Utc>) {
        let mut rows = self.recruitments.lock().await;
        if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
            row.created_at = created_at;
        }
    }
}

#[async_trait]
impl UserDirectory for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.lock().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_recruitment_key(&self, key: &str) -> Result<Vec<User>, StoreError> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .filter(|u| u.recruitment_key.as_deref() == Some(key))
            .cloned()
            .collect())
    }

    async fn find_by_hash(&self, user_hash: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|u| u.user_hash == user_hash)
            .cloned())
    }

    async fn recruitment_key_taken(
        &self,
        key: &str,
        exclude_user: Uuid,
    ) -> Result<bool, StoreError> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .any(|u| u.id != exclude_user && u.recruitment_key.as_deref() == Some(key)))
    }

    async fn set_recruitment_key(&self, user_id: Uuid, key: &str) -> Result<(), StoreError> {
        let mut users = self.users.lock().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(StoreError::NotFound)?;

        user.recruitment_key = Some(key.to_string());
        user.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl RecruitmentStore for MemoryStore {
    async fn create(&self, data: CreateRecruitment) -> Result<Recruitment, StoreError> {
        let recruitment = Recruitment {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            name: data.name,
            phone_number: data.phone_number,
            created_at: Utc::now(),
        };

        self.recruitments.lock().await.push(recruitment.clone());
        Ok(recruitment)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Recruitment>, StoreError> {
        let mut rows: Vec<Recruitment> = self
            .recruitments
            .lock()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();

        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn count_for_user(&self, user_id: Uuid) -> Result<i64, StoreError> {
        Ok(self
            .recruitments
            .lock()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .count() as i64)
    }

    async fn count_for_user_between(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, StoreError> {
        Ok(self
            .recruitments
            .lock()
            .await
            .iter()
            .filter(|r| r.user_id == user_id && r.created_at >= start && r.created_at <= end)
            .count() as i64)
    }

    async fn leaderboard(
        &self,
        window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<RecruiterCount>, StoreError> {
        let users = self.users.lock().await;
        let recruitments = self.recruitments.lock().await;

        let mut rows: Vec<RecruiterCount> = users
            .iter()
            .map(|user| {
                let total = recruitments
                    .iter()
                    .filter(|r| r.user_id == user.id)
                    .filter(|r| match window {
                        Some((start, end)) => r.created_at >= start && r.created_at <= end,
                        None => true,
                    })
                    .count() as i64;

                RecruiterCount {
                    user: user.clone(),
                    total,
                }
            })
            .collect();

        rows.sort_by(|a, b| b.total.cmp(&a.total));
        Ok(rows)
    }
}

#[async_trait]
impl NotificationOutbox for MemoryStore {
    async fn create(
        &self,
        data: CreateNotificationRequest,
    ) -> Result<NotificationRequest, StoreError> {
        let request = NotificationRequest {
            id: Uuid::new_v4(),
            target_id: data.target_id,
            route: data.route,
            channel: data.channel,
            to_user_id: data.to_user_id,
            created_at: Utc::now(),
        };

        self.notifications.lock().await.push(request.clone());
        Ok(request)
    }
}

#[async_trait]
impl TimelineStore for MemoryStore {
    async fn record(&self, data: CreateUserEvent) -> Result<UserEvent, StoreError> {
        let event = UserEvent {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            controller: data.controller,
            route: data.route,
            target_id: data.target_id,
            created_at: Utc::now(),
        };

        self.events.lock().await.push(event.clone());
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;
    use chrono::Duration;

    fn test_user(key: Option<&str>, hash: &str) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: format!("{}@example.com", Uuid::new_v4()),
            role: UserRole::Stockist,
            recruitment_key: key.map(String::from),
            user_hash: hash.to_string(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_key_uniqueness_excludes_self() {
        let store = MemoryStore::new();
        let owner = test_user(Some("my-key-123"), "hash-a");
        let other = test_user(None, "hash-b");
        let owner_id = owner.id;
        let other_id = other.id;
        store.add_user(owner).await;
        store.add_user(other).await;

        // Someone else holds the key
        assert!(store.recruitment_key_taken("my-key-123", other_id).await.unwrap());

        // The owner resubmitting their own key is not a conflict
        assert!(!store.recruitment_key_taken("my-key-123", owner_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_for_user_is_newest_first() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();

        let first = RecruitmentStore::create(
            &store,
            CreateRecruitment {
                user_id,
                name: "hash".to_string(),
                phone_number: "555-0001".to_string(),
            })
            .await
            .unwrap();
        let second = RecruitmentStore::create(
            &store,
            CreateRecruitment {
                user_id,
                name: "hash".to_string(),
                phone_number: "555-0002".to_string(),
            })
            .await
            .unwrap();
        store
            .set_recruitment_created_at(first.id, Utc::now() - Duration::hours(1))
            .await;

        let rows = store.list_for_user(user_id).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, second.id);
        assert_eq!(rows[1].id, first.id);
    }

    #[tokio::test]
    async fn test_leaderboard_includes_zero_count_users() {
        let store = MemoryStore::new();
        let recruiter = test_user(Some("key-one-1"), "hash-1");
        let idle = test_user(Some("key-two-2"), "hash-2");
        let recruiter_id = recruiter.id;
        store.add_user(recruiter).await;
        store.add_user(idle).await;

        RecruitmentStore::create(
            &store,
            CreateRecruitment {
                user_id: recruiter_id,
                name: "hash-1".to_string(),
                phone_number: "555-0001".to_string(),
            })
            .await
            .unwrap();

        // The raw query keeps zero-count users; filtering them out is the
        // handler's job.
        let rows = store.leaderboard(None).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].user.id, recruiter_id);
        assert_eq!(rows[0].total, 1);
        assert_eq!(rows[1].total, 0);
    }

    #[tokio::test]
    async fn test_leaderboard_window_restricts_counts() {
        let store = MemoryStore::new();
        let user = test_user(Some("key-win-1"), "hash-w");
        let user_id = user.id;
        store.add_user(user).await;

        let old = RecruitmentStore::create(
            &store,
            CreateRecruitment {
                user_id,
                name: "hash-w".to_string(),
                phone_number: "555-0001".to_string(),
            })
            .await
            .unwrap();
        store
            .set_recruitment_created_at(old.id, Utc::now() - Duration::days(90))
            .await;
        RecruitmentStore::create(
            &store,
            CreateRecruitment {
                user_id,
                name: "hash-w".to_string(),
                phone_number: "555-0002".to_string(),
            })
            .await
            .unwrap();

        let window = Some((Utc::now() - Duration::days(1), Utc::now() + Duration::days(1)));
        let rows = store.leaderboard(window).await.unwrap();
        assert_eq!(rows[0].total, 1);

        let rows = store.leaderboard(None).await.unwrap();
        assert_eq!(rows[0].total, 2);
    }
}
