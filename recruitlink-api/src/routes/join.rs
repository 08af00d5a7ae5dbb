/// Public join flow
///
/// Visitors reach these pages through a shared referral link; no session
/// or token is involved. The join page resolves a referral key to its
/// owner, and the phone submission records the number against the owner
/// identified by a hash carried in the form.
///
/// # Endpoints
///
/// ```text
/// GET  /recruitment/join/:recruitment_key
/// POST /recruitment/join/phone
/// ```

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tera::Context;
use validator::Validate;

use crate::{
    app::AppState,
    error::{validation_details, ApiError, ApiResult},
};
use recruitlink_shared::models::notification::{CreateNotificationRequest, NotificationChannel};
use recruitlink_shared::models::recruitment::CreateRecruitment;
use recruitlink_shared::models::user_event::CreateUserEvent;
use recruitlink_shared::site;

/// Form body for phone submissions
#[derive(Debug, Deserialize, Validate)]
pub struct JoinPhoneForm {
    /// Hash identifying the referring user
    #[validate(length(min = 1, message = "The user hash field is required."))]
    pub user_hash: String,

    /// Visitor's phone number
    #[validate(length(min = 1, message = "The phone field is required."))]
    pub phone: String,
}

/// Renders the join page for a referral key
///
/// The key must resolve to exactly one user. Zero matches is the obvious
/// dead link; more than one means the uniqueness rule was bypassed at some
/// point, and serving either owner would misattribute signups.
pub async fn join_page(
    State(state): State<AppState>,
    Path(recruitment_key): Path<String>,
) -> ApiResult<Html<String>> {
    let users = state
        .users
        .find_by_recruitment_key(&recruitment_key)
        .await?;

    if users.len() != 1 {
        return Err(ApiError::NotFound("Recruitment Key not found".to_string()));
    }
    let user = &users[0];

    let mut ctx = Context::new();
    ctx.insert("user_name", &user.name);
    ctx.insert("user_hash", &user.user_hash);
    ctx.insert("role", user.role.as_str());
    ctx.insert("recruitment_key", &recruitment_key);

    Ok(state.views.render("join.html", &ctx)?)
}

/// Records a phone submission against the referring user
///
/// Writes the recruitment row, queues an SMS notification to the referrer,
/// and records a timeline event, then redirects back to the referring
/// page. The three writes are not transactional; a notification or
/// timeline failure after the recruitment row exists surfaces as an error
/// but does not roll the row back.
pub async fn submit_phone(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<JoinPhoneForm>,
) -> ApiResult<Redirect> {
    form.validate()
        .map_err(|e| ApiError::ValidationError(validation_details(&e)))?;

    let user = state
        .users
        .find_by_hash(&form.user_hash)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    site::protect(&user)?;

    let recruitment = state
        .recruitments
        .create(CreateRecruitment {
            user_id: user.id,
            name: form.user_hash.clone(),
            phone_number: form.phone.clone(),
        })
        .await?;

    state
        .notifications
        .create(CreateNotificationRequest {
            target_id: recruitment.id,
            route: "recruitment-added".to_string(),
            channel: NotificationChannel::Sms,
            to_user_id: user.id,
        })
        .await?;

    state
        .timeline
        .record(CreateUserEvent {
            user_id: user.id,
            controller: "timeline".to_string(),
            route: "/new-recruitment".to_string(),
            target_id: recruitment.id,
        })
        .await?;

    tracing::info!(
        user_id = %user.id,
        recruitment_id = %recruitment.id,
        "Recorded phone submission"
    );

    // Send the visitor back to the page they came from
    let back = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/");

    Ok(Redirect::to(back))
}
