// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#![warn(missing_docs)]
//! This crate lets a course host search a Videofront video cloud by title
//! and insert the results as external links.

/// Types common to multiple wrappers.
pub mod common;
pub use common::*;

#[cfg(feature = "log")]
/// Thread-safe logging.
pub mod log;
#[cfg(feature = "log")]
pub use log::*;

/// Macros used with `serde` wrapper types.
pub mod serde_utils;

#[cfg(feature = "videos")]
/// Keyword-paginated search over a video cloud.
pub mod videos;
#[cfg(feature = "videos")]
pub use videos::*;
