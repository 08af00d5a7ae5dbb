/// Authentication and authorization utilities
///
/// - `jwt`: access-token creation and validation
/// - `guard`: capability checks on an already-resolved user

pub mod guard;
pub mod jwt;
