// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::videofront::VideofrontConfig;
use super::{
    Capabilities, CloudVideos, DisplayItem, KeywordStore, Listing, LoginForm, MemoryKeywordStore,
    SearchStateKey, SessionId, VideofrontVideos,
};
use crate::common::{Error, RepoConfig};
use crate::log::StringLogger;
use serde::Serialize;
use std::sync::Arc;

/// Records requested per page, and the threshold below which a page is the last.
pub const PAGE_SIZE: usize = 20;

/// One page of search results.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SearchResult {
    /// Matching videos in provider order.
    pub items: Vec<DisplayItem>,
    /// Normalized (1-based) page number.
    pub page: usize,
    /// `page` on the last page, `-1` while more pages may follow.
    pub pages: i64,
    /// Whether a next page may exist.
    pub has_more: bool,
    /// Searching never needs a login step.
    pub requires_login: bool,
    /// The host must not offer a refresh button.
    pub no_refresh: bool,
    /// The host must not offer its own search box.
    pub no_search: bool,
}

impl SearchResult {
    fn new(items: Vec<DisplayItem>, page: usize) -> Self {
        let has_more = items.len() >= PAGE_SIZE;
        Self {
            items,
            page,
            pages: if has_more {
                -1
            } else {
                i64::try_from(page).unwrap_or(i64::MAX)
            },
            has_more,
            requires_login: false,
            no_refresh: true,
            no_search: true,
        }
    }
}

/// Page numbers below 1 are treated as 1.
pub fn normalize_page(page: i64) -> usize {
    usize::try_from(page)
        .unwrap_or(if page > 0 { usize::MAX } else { 0 })
        .max(1)
}

/// 1-based offset of the first record of `page`, saturating at `usize::MAX`.
pub fn page_offset(page: usize) -> usize {
    (page.max(1) - 1)
        .saturating_mul(PAGE_SIZE)
        .saturating_add(1)
}

/// Searches a video cloud by title prefix, one page at a time.
pub struct SearchProxy {
    debug: bool,
    keywords: Arc<dyn KeywordStore>,
    repository_id: u64,
    videos: Arc<dyn CloudVideos>,
}

impl SearchProxy {
    /// Create a proxy over `videos`, remembering keywords in `keywords`.
    pub fn new(
        videos: Arc<dyn CloudVideos>,
        keywords: Arc<dyn KeywordStore>,
        repository_id: u64,
    ) -> Self {
        Self {
            debug: false,
            keywords,
            repository_id,
            videos,
        }
    }

    /// Create a proxy over Videofront with an in-memory keyword store.
    pub fn from_config(config: &RepoConfig) -> Result<Self, Error> {
        let VideofrontConfig { repository_id, .. } = VideofrontConfig::load(config)?;
        let videos = VideofrontVideos::new(config)?;
        Ok(Self::new(
            Arc::new(videos),
            Arc::new(MemoryKeywordStore::new()),
            repository_id,
        )
        .debug(config.debug()))
    }

    /// Print search traces as they happen.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Search for videos whose title starts with `keyword`.
    ///
    /// An empty `keyword` with a positive `page` continues the session's last
    /// search. Provider failures are returned as is, without retry.
    pub async fn search(
        &self,
        session: &SessionId,
        keyword: &str,
        page: i64,
    ) -> Result<SearchResult, Error> {
        let logger = StringLogger::new(self.debug);
        self.search_with_logger(session, keyword, page, &logger)
            .await
    }

    /// Same as `search`, tracing into `logger`.
    pub async fn search_with_logger(
        &self,
        session: &SessionId,
        keyword: &str,
        page: i64,
        logger: &StringLogger,
    ) -> Result<SearchResult, Error> {
        let key = SearchStateKey::new(session, self.repository_id);
        let keyword = match self.keywords.remembered(&key) {
            Some(remembered) if keyword.is_empty() && page > 0 => {
                logger.trace(format!("continuing search for {remembered:?}"));
                remembered
            }
            _ => keyword.to_string(),
        };
        self.keywords.remember(key, keyword.clone());

        let page = normalize_page(page);
        let offset = page_offset(page);
        let pattern = format!("{keyword}%");
        logger.trace(format!("page {page} offset {offset} pattern {pattern:?}"));

        let records = logger.call(
            format!("list_videos({offset}, {PAGE_SIZE})"),
            self.videos
                .list_videos(offset, PAGE_SIZE, &pattern, logger)
                .await,
        )?;
        let base_url = self.videos.base_url();
        let items: Vec<_> = records
            .iter()
            .filter(|record| record.is_video())
            .map(|record| DisplayItem::from_record(record, base_url))
            .collect();
        logger.trace(format!("{} of {} records are videos", items.len(), records.len()));
        Ok(SearchResult::new(items, page))
    }

    /// End `session`: its remembered keyword is dropped.
    pub fn forget_session(&self, session: &SessionId) {
        self.keywords
            .forget(&SearchStateKey::new(session, self.repository_id));
    }

    /// Never part of the host's global search.
    pub fn global_search(&self) -> bool {
        false
    }

    /// Static capabilities: videos only, as external links, no private data.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    /// The search form is always shown in place of a login.
    pub fn check_login(&self) -> bool {
        false
    }

    /// The single-field search form.
    pub fn print_login(&self) -> LoginForm {
        LoginForm::search_form()
    }

    /// Browsing without a keyword lists nothing.
    pub fn get_listing(&self, _path: &str, _page: &str) -> Listing {
        Listing::default()
    }
}
