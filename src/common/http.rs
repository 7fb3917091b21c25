// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::Error;
use axum::body::Body;
use axum::response::{IntoResponse, Response};
use hyper::StatusCode;

/// Create a plain text `Response` suitable for `axum::Router`.
pub fn create_error_response(status: StatusCode, message: String) -> Response {
    match Response::builder()
        .status(status)
        .header("content-type", "text/plain")
        .body(Body::from(message.clone()))
    {
        Ok(response) => response,
        Err(_) => (status, message).into_response(),
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Http(code, mesg) => create_error_response(code, mesg),
            Error::String(s) => create_error_response(StatusCode::INTERNAL_SERVER_ERROR, s),
        }
    }
}
