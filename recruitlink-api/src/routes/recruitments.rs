/// Admin recruitment pages
///
/// Both pages are admin-only and fail with the fixed capability error when
/// a non-admin reaches them.
///
/// # Endpoints
///
/// ```text
/// GET /recruitment/list/:user_id
/// GET /recruitment/leaderboard/:filter
/// ```

use axum::{
    extract::{Path, State},
    response::Html,
    Extension,
};
use tera::Context;
use uuid::Uuid;

use crate::{
    app::{AppState, CurrentUser},
    error::ApiResult,
};
use recruitlink_shared::auth::guard;
use recruitlink_shared::models::recruitment::current_month_window;

/// Lists one user's recruitments with all-time and current-month totals
pub async fn list_recruitments(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Html<String>> {
    guard::require_admin(&user)?;

    let rows = state.recruitments.list_for_user(user_id).await?;
    let total = state.recruitments.count_for_user(user_id).await?;

    let (start, end) = current_month_window();
    let total_month = state
        .recruitments
        .count_for_user_between(user_id, start, end)
        .await?;

    let mut ctx = Context::new();
    ctx.insert("total", &total);
    ctx.insert("total_month", &total_month);
    ctx.insert("recruitments", &rows);

    Ok(state.views.render("list-recruitments.html", &ctx)?)
}

/// Shows top recruiters, all-time or for the current month
///
/// Any filter other than "monthly" means all-time. Users with no
/// recruitments in scope are dropped after the aggregate query, so the
/// page only lists recruiters with at least one row.
pub async fn leaderboard(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(filter): Path<String>,
) -> ApiResult<Html<String>> {
    guard::require_admin(&user)?;

    let window = if filter == "monthly" {
        Some(current_month_window())
    } else {
        None
    };

    let mut rows = state.recruitments.leaderboard(window).await?;
    rows.retain(|row| row.total > 0);

    let mut ctx = Context::new();
    ctx.insert("rows", &rows);

    Ok(state.views.render("leaderboard.html", &ctx)?)
}
