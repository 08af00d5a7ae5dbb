/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - In-memory store seeded with an admin, a stockist, and a member
/// - JWT token generation
/// - Request helpers

use std::sync::Arc;

use chrono::Utc;
use recruitlink_api::app::{build_router, AppState};
use recruitlink_api::config::{ApiConfig, Config, DatabaseConfig, JwtConfig};
use recruitlink_api::views::ViewEngine;
use recruitlink_shared::auth::jwt::{create_token, Claims};
use recruitlink_shared::models::user::{User, UserRole};
use recruitlink_shared::store::memory::MemoryStore;
use uuid::Uuid;

pub const JWT_SECRET: &str = "integration-test-secret-key-32-bytes!";

/// Test context containing the app and seeded users
pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub app: axum::Router,
    pub admin: User,
    pub stockist: User,
    pub member: User,
}

impl TestContext {
    /// Creates a new test context over a fresh in-memory store
    pub async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());

        let admin = test_user(UserRole::Admin, Some("admin-key-1"), "hash-admin");
        let stockist = test_user(UserRole::Stockist, Some("stockist-key"), "hash-stockist");
        let member = test_user(UserRole::Member, None, "hash-member");

        store.add_user(admin.clone()).await;
        store.add_user(stockist.clone()).await;
        store.add_user(member.clone()).await;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec![],
            },
            database: DatabaseConfig {
                url: "postgresql://unused-in-tests/recruitlink".to_string(),
                max_connections: 1,
            },
            jwt: JwtConfig {
                secret: JWT_SECRET.to_string(),
            },
        };

        let views = ViewEngine::new().expect("Templates should parse");
        let state = AppState::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            views,
            config,
        );
        let app = build_router(state);

        TestContext {
            store,
            app,
            admin,
            stockist,
            member,
        }
    }

    /// Returns an authorization header value for the given user
    pub fn auth_header(&self, user: &User) -> String {
        let claims = Claims::new(user.id);
        let token = create_token(&claims, JWT_SECRET).expect("Should create token");
        format!("Bearer {}", token)
    }
}

/// Builds a user row with the given role, key, and hash
pub fn test_user(role: UserRole, key: Option<&str>, hash: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        name: format!("{:?} User", role),
        email: format!("{}@example.com", Uuid::new_v4()),
        role,
        recruitment_key: key.map(String::from),
        user_hash: hash.to_string(),
        active: true,
        created_at: now,
        updated_at: now,
    }
}

/// Reads a response body to a string
pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8_lossy(&bytes).to_string()
}
