/// Site protection gate for the public join flow
///
/// Applied to the referring user after the hash lookup and before any row
/// is written. The gate rejects submissions against deactivated accounts;
/// further site-wide checks belong to the hosting application and can be
/// layered on top of this one.

use crate::models::user::User;

/// Error type for the site protection gate
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The referring account may not receive recruitments
    #[error("Account is not accepting recruitments")]
    Rejected,
}

/// Rejects the request if the referring user may not receive recruitments
pub fn protect(user: &User) -> Result<(), SiteError> {
    if !user.active {
        tracing::warn!(user_id = %user.id, "Rejected join submission for inactive account");
        return Err(SiteError::Rejected);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(active: bool) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            role: UserRole::Stockist,
            recruitment_key: None,
            user_hash: "hash".to_string(),
            active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_active_user_passes() {
        assert!(protect(&user(true)).is_ok());
    }

    #[test]
    fn test_inactive_user_is_rejected() {
        assert!(protect(&user(false)).is_err());
    }
}
