/// API route handlers
///
/// This module contains all route handlers organized by page:
///
/// - `health`: Health check endpoint
/// - `settings`: Recruitment key settings page
/// - `recruitments`: Admin recruitment list and leaderboard
/// - `join`: Public join flow

pub mod health;
pub mod join;
pub mod recruitments;
pub mod settings;
