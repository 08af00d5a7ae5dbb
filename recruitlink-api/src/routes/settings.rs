/// Recruitment key settings page
///
/// Stockists and admins manage the referral key that builds their public
/// join link. Key changes are validated for shape and uniqueness; a failed
/// submission re-renders the form with the errors and the submitted value.
///
/// # Endpoints
///
/// ```text
/// GET  /recruitment/settings
/// POST /recruitment/settings
/// ```

use axum::{extract::State, response::Html, Extension, Form};
use serde::Deserialize;
use tera::Context;
use validator::{Validate, ValidationError};

use crate::{
    app::{AppState, CurrentUser},
    error::{validation_details, ApiResult},
};
use recruitlink_shared::auth::guard;
use recruitlink_shared::models::user::User;

/// Form body for key updates
///
/// A request that omits the field entirely still reaches validation: the
/// serde default supplies an empty string, which the length rule rejects
/// with the same inline error a too-short key gets.
#[derive(Debug, Deserialize, Validate)]
pub struct SettingsForm {
    /// The new referral key
    #[serde(default)]
    #[validate(
        length(
            min = 5,
            max = 300,
            message = "The recruitment key must be between 5 and 300 characters."
        ),
        custom(
            function = alpha_dash,
            message = "The recruitment key may only contain letters, numbers, dashes and underscores."
        )
    )]
    pub recruitment_key: String,
}

/// Letters, numbers, dashes and underscores only
fn alpha_dash(value: &str) -> Result<(), ValidationError> {
    if value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err(ValidationError::new("alpha_dash"))
    }
}

fn settings_context(
    user: &User,
    key: &str,
    errors: &[String],
    success_message: Option<&str>,
) -> Context {
    let mut ctx = Context::new();
    ctx.insert("recruitment_key", key);
    ctx.insert("role", user.role.as_str());
    ctx.insert("errors", errors);
    ctx.insert("success_message", &success_message);
    ctx
}

/// Renders the settings form with the caller's current key
pub async fn get_settings(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Html<String>> {
    guard::require_stockist(&user)?;

    let key = user.recruitment_key.clone().unwrap_or_default();
    let ctx = settings_context(&user, &key, &[], None);
    Ok(state.views.render("settings.html", &ctx)?)
}

/// Validates and saves a new recruitment key
///
/// Validation failures re-render the form with the submitted value flashed
/// back. A successful save re-renders the form with a success message.
pub async fn post_settings(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(form): Form<SettingsForm>,
) -> ApiResult<Html<String>> {
    guard::require_stockist(&user)?;

    let mut errors: Vec<String> = match form.validate() {
        Ok(()) => Vec::new(),
        Err(e) => validation_details(&e).into_iter().map(|d| d.message).collect(),
    };

    // Uniqueness check ignores the caller's own row so resubmitting the
    // current key is not a conflict.
    if errors.is_empty()
        && state
            .users
            .recruitment_key_taken(&form.recruitment_key, user.id)
            .await?
    {
        errors.push("The recruitment key has already been taken.".to_string());
    }

    if !errors.is_empty() {
        let ctx = settings_context(&user, &form.recruitment_key, &errors, None);
        return Ok(state.views.render("settings.html", &ctx)?);
    }

    state
        .users
        .set_recruitment_key(user.id, &form.recruitment_key)
        .await?;

    tracing::info!(user_id = %user.id, "Recruitment key updated");

    let ctx = settings_context(
        &user,
        &form.recruitment_key,
        &[],
        Some("Recruitment key has been updated."),
    );
    Ok(state.views.render("settings.html", &ctx)?)
}
