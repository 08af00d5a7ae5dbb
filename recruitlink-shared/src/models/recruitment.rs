/// Recruitment model and calendar-month window helper
///
/// A recruitment row records one recruited contact (a phone number) against
/// the referring user. Rows are created exactly once at phone-submission
/// time and are never updated or deleted by this system.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE recruitments (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL REFERENCES users(id),
///     name VARCHAR(255) NOT NULL,
///     phone_number VARCHAR(30) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// Note on `name`: it carries the join-session hash of the submission, not
/// a display name. The recruited contact may not be a registered user, so
/// there is no foreign key for them.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Recruitment model representing one recruited contact
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Recruitment {
    /// Unique recruitment ID (UUID v4)
    pub id: Uuid,

    /// Referring user (the owner of the recruitment key)
    pub user_id: Uuid,

    /// Join-session hash carried over from the submission request
    pub name: String,

    /// Recruited contact's phone number
    pub phone_number: String,

    /// When the contact was recorded
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new recruitment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecruitment {
    /// Referring user's ID
    pub user_id: Uuid,

    /// Join-session hash (stored in the `name` column)
    pub name: String,

    /// Submitted phone number
    pub phone_number: String,
}

/// One leaderboard entry: a user together with their recruitment count
#[derive(Debug, Clone, Serialize)]
pub struct RecruiterCount {
    /// The referring user
    pub user: User,

    /// Number of owned recruitment rows in the queried window
    pub total: i64,
}

/// Returns the inclusive bounds of the calendar month containing `now`.
///
/// The window starts at the first instant of the month and ends one
/// microsecond before the first instant of the next month, so comparisons
/// of the form `start <= created_at <= end` cover the whole month.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use recruitlink_shared::models::recruitment::month_window_at;
///
/// let now = Utc.with_ymd_and_hms(2024, 2, 14, 12, 0, 0).unwrap();
/// let (start, end) = month_window_at(now);
/// assert_eq!(start, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
/// assert!(end < Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
/// ```
pub fn month_window_at(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let first = now
        .date_naive()
        .with_day(1)
        .expect("day 1 exists in every month");

    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
    .expect("first day of the following month is always valid");

    let start = first.and_time(NaiveTime::MIN).and_utc();
    let end = next_first.and_time(NaiveTime::MIN).and_utc() - Duration::microseconds(1);

    (start, end)
}

/// Inclusive bounds of the current calendar month
pub fn current_month_window() -> (DateTime<Utc>, DateTime<Utc>) {
    month_window_at(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_window_mid_month() {
        let now = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
        let (start, end) = month_window_at(now);

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());
        assert!(end > Utc.with_ymd_and_hms(2024, 5, 31, 23, 59, 59).unwrap());
        assert!(end < Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_month_window_december_rolls_over_year() {
        let now = Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap();
        let (start, end) = month_window_at(now);

        assert_eq!(start, Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap());
        assert!(end < Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_month_window_contains_now() {
        let (start, end) = current_month_window();
        let now = Utc::now();
        assert!(start <= now);
        assert!(now <= end);
    }

    #[test]
    fn test_month_window_first_instant_included() {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let (start, end) = month_window_at(now);
        assert_eq!(start, now);
        // Leap February: window must cover the 29th
        assert!(end > Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap());
    }
}
