// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::{Capabilities, Listing, LoginForm, SearchProxy, SearchResult, SessionId};
use crate::common::Error;
use axum::extract::{Query, State};
use axum::routing::{delete, get};
use axum::{Json, Router};
use hyper::StatusCode;
use serde::Deserialize;
use std::sync::Arc;

/// Query string of `GET /search`. `session` is required.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Keyword, named after the login form field.
    #[serde(default)]
    pub s: String,
    /// Requested page.
    #[serde(default)]
    pub page: i64,
    /// Host session.
    pub session: SessionId,
}

/// Query string of `DELETE /session`.
#[derive(Debug, Default, Deserialize)]
pub struct SessionQuery {
    /// Host session to end.
    pub session: SessionId,
}

/// Create an `axum::Router` exposing `proxy` to the host as JSON.
pub fn router(proxy: Arc<SearchProxy>) -> Router {
    Router::new()
        .route("/search", get(search))
        .route("/session", delete(end_session))
        .route("/listing", get(listing))
        .route("/login", get(login))
        .route("/capabilities", get(capabilities))
        .with_state(proxy)
}

fn require_session(session: &SessionId) -> Result<(), Error> {
    if session.as_str().trim().is_empty() {
        Err(Error::Http(
            StatusCode::BAD_REQUEST,
            "session: must not be empty".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// `GET /search?s=<keyword>&page=<n>&session=<id>`
pub(crate) async fn search(
    State(proxy): State<Arc<SearchProxy>>,
    Query(SearchQuery { s, page, session }): Query<SearchQuery>,
) -> Result<Json<SearchResult>, Error> {
    require_session(&session)?;
    proxy.search(&session, &s, page).await.map(Json)
}

/// `DELETE /session?session=<id>`
pub(crate) async fn end_session(
    State(proxy): State<Arc<SearchProxy>>,
    Query(SessionQuery { session }): Query<SessionQuery>,
) -> Result<StatusCode, Error> {
    require_session(&session)?;
    proxy.forget_session(&session);
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /listing`
pub(crate) async fn listing(State(proxy): State<Arc<SearchProxy>>) -> Json<Listing> {
    Json(proxy.get_listing("", ""))
}

/// `GET /login`
pub(crate) async fn login(State(proxy): State<Arc<SearchProxy>>) -> Json<LoginForm> {
    Json(proxy.print_login())
}

/// `GET /capabilities`
pub(crate) async fn capabilities(State(proxy): State<Arc<SearchProxy>>) -> Json<Capabilities> {
    Json(proxy.capabilities())
}
