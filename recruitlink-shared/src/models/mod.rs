/// Database models for the recruitment feature
///
/// # Models
///
/// - `user`: user rows and roles (owned by the account subsystem, read here)
/// - `recruitment`: recruited contacts recorded against a referring user
/// - `notification`: notification requests queued per recruitment
/// - `user_event`: activity-timeline entries recorded per recruitment

pub mod notification;
pub mod recruitment;
pub mod user;
pub mod user_event;
