// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::{CloudVideos, VideoKind, VideoRecord, VideoResourceId};
use crate::common::{Error, RepoConfig};
use crate::log::StringLogger;
use async_trait::async_trait;
use hyper::StatusCode;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// `[videofront]` section of the repository configuration.
#[derive(Debug, Deserialize)]
pub(crate) struct VideofrontConfig {
    pub(crate) url: String,
    #[serde(default)]
    pub(crate) token: Option<String>,
    #[serde(default)]
    pub(crate) repository_id: u64,
}

impl VideofrontConfig {
    pub(crate) fn load(config: &RepoConfig) -> Result<Self, Error> {
        #[derive(Deserialize)]
        struct ConfigToml {
            videofront: VideofrontConfig,
        }
        let ConfigToml { videofront } = config.get()?;
        if videofront.url.is_empty() {
            return Err(Error::String("videofront.url: must not be empty".to_string()));
        }
        Ok(videofront)
    }
}

/// Videofront cloud.
pub struct VideofrontVideos {
    base_url: String,
    client: Client,
    token: Option<String>,
}

impl VideofrontVideos {
    const TIMEOUT_SECS: u64 = 5;

    /// Create a `CloudVideos` for Videofront from the `[videofront]` section.
    pub fn new(config: &RepoConfig) -> Result<Self, Error> {
        let VideofrontConfig { url, token, .. } = VideofrontConfig::load(config)?;
        Self::with_url(&url, token)
    }

    /// Create a `CloudVideos` for the Videofront instance at `url`.
    pub fn with_url(url: &str, token: Option<String>) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECS))
            .http1_only()
            .build()
            .map_err(|e| Error::String(format!("videofront client: {e}")))?;
        Ok(Self {
            base_url: normalize_base_url(url),
            client,
            token,
        })
    }

    fn map_error(e: reqwest::Error) -> Error {
        Error::provider_unavailable(format!("videofront: {e}"))
    }

    pub(crate) fn listing_url(&self, offset: usize, count: usize, pattern: &str) -> String {
        format!(
            "{}api/videos?start={offset}&limit={count}&pattern={}",
            self.base_url,
            urlencoding::encode(pattern)
        )
    }

    /// Parse a listing response, dropping records that fail validation.
    pub(crate) fn parse_listing(
        text: &str,
        logger: &StringLogger,
    ) -> Result<Vec<VideoRecord>, Error> {
        let listing: VideofrontListing = serde_json::from_str(text).map_err(|e| {
            Error::provider_unavailable(format!("cannot parse videofront listing ({e}): {text}"))
        })?;
        Ok(listing
            .videos
            .into_iter()
            .filter_map(|video| match VideoRecord::try_from(video) {
                Ok(record) => Some(record),
                Err(e) => {
                    logger.warn(format!("skipped videofront record: {e}"));
                    None
                }
            })
            .collect())
    }
}

/// Append the `/` that thumbnail and API paths are joined onto.
pub(crate) fn normalize_base_url(url: &str) -> String {
    let url = url.trim();
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

#[async_trait]
impl CloudVideos for VideofrontVideos {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_videos(
        &self,
        offset: usize,
        count: usize,
        pattern: &str,
        logger: &StringLogger,
    ) -> Result<Vec<VideoRecord>, Error> {
        let url = self.listing_url(offset, count, pattern);
        logger.trace(format!("url={url}"));
        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, token);
        }
        let request = request.build().map_err(Self::map_error)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(Self::map_error)?;
        let status = response.status();
        let text = response.text().await.map_err(Self::map_error)?;
        if !status.is_success() {
            return Err(Error::Http(
                StatusCode::FAILED_DEPENDENCY,
                format!("videofront returned {status}: {text}"),
            ));
        }
        Self::parse_listing(&text, logger)
    }
}

#[derive(Debug, Deserialize)]
struct VideofrontListing {
    #[serde(default)]
    videos: Vec<VideofrontVideo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct VideofrontVideo {
    #[serde(default)]
    video_identifier: Option<String>,
    #[serde(default)]
    video_tipo: Option<String>,
    #[serde(default)]
    video_titulo: Option<String>,
    #[serde(default)]
    video_filename: Option<String>,
}

impl TryFrom<VideofrontVideo> for VideoRecord {
    type Error = Error;

    fn try_from(video: VideofrontVideo) -> Result<Self, Self::Error> {
        let id = video
            .video_identifier
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                Error::String(format!(
                    "missing identifier (title {:?})",
                    video.video_titulo.as_deref().unwrap_or_default()
                ))
            })?;
        Ok(VideoRecord {
            id: VideoResourceId(id),
            kind: video
                .video_tipo
                .as_deref()
                .map(VideoKind::from)
                .unwrap_or_else(|| VideoKind::Other(String::new())),
            title: video.video_titulo.unwrap_or_default(),
            filename: video.video_filename.unwrap_or_default(),
        })
    }
}
