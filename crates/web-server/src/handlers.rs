use crate::render::render_dashboard;
use crate::session::{self, SESSION_COOKIE};
use crate::view::DashboardView;
use crate::{error::AppError, AppState};
use analytics::select_top_assets;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use core_types::{Asset, MarketTrend, Quote, UserProfile};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct TopAssetsQuery {
    /// How many assets to return; defaults to the configured grid size.
    pub limit: Option<usize>,
}

/// # GET /
/// Renders the dashboard page. The view state is resolved once from the
/// session cookie and passed explicitly into the view assembly.
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    let view_state = state.sessions.resolve(&headers);
    let quote = state.market.random_quote().await?;
    let trends = state.market.market_trends().await?;
    let assets = state.market.all_assets().await?;

    let view = DashboardView::assemble(view_state, quote, trends, assets, &state.config)?;
    Ok(Html(render_dashboard(&view, &state.config.theme)))
}

/// # GET /api/top-assets
/// Returns the ranked top-N assets as JSON. `?limit=0` is rejected with 400.
pub async fn get_top_assets(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TopAssetsQuery>,
) -> Result<Json<Vec<Asset>>, AppError> {
    let limit = query.limit.unwrap_or(state.config.display.top_assets);
    let assets = state.market.all_assets().await?;
    let top = select_top_assets(assets, limit)?;
    Ok(Json(top))
}

/// # GET /api/market-trends
/// Returns the trend cards' data, truncated to the configured count.
pub async fn get_market_trends(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MarketTrend>>, AppError> {
    let mut trends = state.market.market_trends().await?;
    trends.truncate(state.config.display.market_trends);
    Ok(Json(trends))
}

/// # GET /api/quote
pub async fn get_quote(State(state): State<Arc<AppState>>) -> Result<Json<Quote>, AppError> {
    let quote = state.market.random_quote().await?;
    Ok(Json(quote))
}

/// # POST /api/session
/// Demo sign-in: issues a session for the built-in profile and sets the
/// session cookie.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, HeaderMap, Json<UserProfile>), AppError> {
    let profile = session::demo_profile();
    let token = state.sessions.create(profile.clone());
    tracing::info!(user = %profile.full_name, "Session created.");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly")
            .parse()
            .map_err(|_| AppError::Internal("could not encode session cookie".to_string()))?,
    );
    Ok((StatusCode::CREATED, headers, Json(profile)))
}

/// # DELETE /api/session
/// Signs the current session out and clears the cookie.
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let token = session::session_token(&headers)
        .ok_or_else(|| AppError::NotFound("no active session".to_string()))?;
    if !state.sessions.remove(&token) {
        return Err(AppError::NotFound("unknown session token".to_string()));
    }
    tracing::info!("Session removed.");

    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        header::SET_COOKIE,
        format!("{SESSION_COOKIE}=; Path=/; Max-Age=0")
            .parse()
            .map_err(|_| AppError::Internal("could not encode session cookie".to_string()))?,
    );
    Ok((StatusCode::NO_CONTENT, response_headers))
}
