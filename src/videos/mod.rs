// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Video cloud trait
mod cloud_videos;
/// File picker rows.
mod display_item;
/// Remembered keywords.
mod keyword_store;
/// Capability and form descriptors.
mod repository;
/// JSON routes for the host.
mod routes;
mod search_proxy;
/// Support for Videofront.
mod videofront;

/// Unit tests
mod tests;

pub use self::cloud_videos::{CloudVideos, VideoKind, VideoRecord, VideoResourceId};
pub use self::display_item::DisplayItem;
pub use self::keyword_store::{KeywordStore, MemoryKeywordStore, SearchStateKey, SessionId};
pub use self::repository::{Capabilities, Listing, LoginField, LoginForm, ReturnType};
pub use self::routes::{router, SearchQuery, SessionQuery};
pub use self::search_proxy::{normalize_page, page_offset, SearchProxy, SearchResult, PAGE_SIZE};
pub use self::videofront::VideofrontVideos;
