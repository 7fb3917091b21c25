// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::common::Error;
use crate::log::StringLogger;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Video resource ID, as assigned by the provider.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct VideoResourceId(pub String);
crate::impl_wrapper_str!(VideoResourceId);

/// Video cloud which lists its videos in pages.
#[async_trait]
pub trait CloudVideos: Send + Sync {
    /// Base URL of the provider, always ending in `/`.
    fn base_url(&self) -> &str;

    /// List up to `count` records starting at the 1-based `offset`, restricted
    /// to titles matching `pattern` (a trailing `%` is a wildcard).
    async fn list_videos(
        &self,
        offset: usize,
        count: usize,
        pattern: &str,
        logger: &StringLogger,
    ) -> Result<Vec<VideoRecord>, Error>;
}

/// Type tag of a provider record. Only `Video` is ever shown.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VideoKind {
    /// A playable video.
    Video,
    /// Anything else (images, audio, unknown tags).
    Other(String),
}

impl From<&str> for VideoKind {
    fn from(tag: &str) -> Self {
        match tag {
            "video" => VideoKind::Video,
            other => VideoKind::Other(other.to_string()),
        }
    }
}

/// Video record, validated at the provider boundary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VideoRecord {
    /// Provider identifier.
    pub id: VideoResourceId,
    /// Type tag.
    pub kind: VideoKind,
    /// Display title (may be empty).
    pub title: String,
    /// Uploaded file name (may be empty).
    pub filename: String,
}

impl VideoRecord {
    /// Create a record of type `video` with empty title and filename.
    pub fn new(id: impl Into<VideoResourceId>) -> Self {
        Self {
            id: id.into(),
            kind: VideoKind::Video,
            title: String::new(),
            filename: String::new(),
        }
    }

    /// Build type tag.
    pub fn kind(mut self, value: VideoKind) -> Self {
        self.kind = value;
        self
    }

    /// Build display title.
    pub fn title(mut self, value: &str) -> Self {
        self.title = value.to_string();
        self
    }

    /// Build file name.
    pub fn filename(mut self, value: &str) -> Self {
        self.filename = value.to_string();
        self
    }

    /// Whether this record is a video.
    pub fn is_video(&self) -> bool {
        self.kind == VideoKind::Video
    }
}
