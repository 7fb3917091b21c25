// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use std::fmt::{Display, Formatter};

#[derive(Debug)]
/// An enum that encapsulates the errors a search can report.
///
/// # Example
///
/// Error::Http(StatusCode::FAILED_DEPENDENCY, format!("{url}: unreachable"))
pub enum Error {
    /// HTTP (or provider) error
    #[cfg(feature = "hyper")]
    Http(hyper::StatusCode, String),
    /// String error.
    String(String),
}

impl Error {
    /// Whether the error came from the video provider rather than from local
    /// configuration.
    pub fn is_provider_failure(&self) -> bool {
        match self {
            #[cfg(feature = "hyper")]
            Error::Http(status_code, _) => {
                *status_code == hyper::StatusCode::FAILED_DEPENDENCY
                    || *status_code == hyper::StatusCode::BAD_GATEWAY
            }
            Error::String(_) => false,
        }
    }

    /// The provider could not be reached or returned garbage.
    #[cfg(feature = "hyper")]
    pub fn provider_unavailable(message: String) -> Self {
        Error::Http(hyper::StatusCode::FAILED_DEPENDENCY, message)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            #[cfg(feature = "hyper")]
            Error::Http(status_code, mesg) => Display::fmt(&format!("{status_code}: {mesg}"), f),
            Error::String(s) => Display::fmt(&s, f),
        }
    }
}

impl std::error::Error for Error {}
