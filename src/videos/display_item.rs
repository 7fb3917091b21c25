// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::VideoRecord;
use serde::Serialize;

const SOURCE_PREFIX: &str = "videofront://";
const VIDEO_SUFFIX: &str = ".mp4";

/// One row of the file picker, derived from a `VideoRecord`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DisplayItem {
    /// Title without the `.mp4` suffix.
    pub short_title: String,
    /// `short_title` followed by `.mp4`.
    pub title: String,
    /// Provider display title, possibly empty.
    pub thumbnail_title: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// Thumbnail height in pixels.
    pub thumbnail_height: u32,
    /// Thumbnail width in pixels.
    pub thumbnail_width: u32,
    /// Icon URL.
    pub icon: String,
    /// Always empty; the provider does not report sizes.
    pub size: String,
    /// Always empty; the provider does not report dates.
    pub date: String,
    /// External link, `videofront://<identifier>`.
    pub source: String,
}

impl DisplayItem {
    /// Requested thumbnail width (`?w=`).
    pub const THUMBNAIL_WIDTH_PARAM: u32 = 128;
    /// Requested icon width (`?w=`).
    pub const ICON_WIDTH_PARAM: u32 = 29;
    /// Displayed thumbnail height and width.
    pub const THUMBNAIL_SIZE: u32 = 120;

    /// Format `record`, whose thumbnails live under `base_url` (ending in `/`).
    pub fn from_record(record: &VideoRecord, base_url: &str) -> Self {
        let short_title = if record.title.trim().is_empty() {
            record.filename.clone()
        } else {
            record.title.clone()
        };
        let thumb = format!("{base_url}thumb/get/{}/", record.id);
        Self {
            title: format!("{short_title}{VIDEO_SUFFIX}"),
            short_title,
            thumbnail_title: record.title.clone(),
            thumbnail: format!("{thumb}?w={}", Self::THUMBNAIL_WIDTH_PARAM),
            thumbnail_height: Self::THUMBNAIL_SIZE,
            thumbnail_width: Self::THUMBNAIL_SIZE,
            icon: format!("{thumb}?w={}", Self::ICON_WIDTH_PARAM),
            size: String::new(),
            date: String::new(),
            source: format!("{SOURCE_PREFIX}{}", record.id),
        }
    }
}
