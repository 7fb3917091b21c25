// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::DisplayItem;
use serde::Serialize;

/// How a picked file reaches the host. Videofront only hands out links.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnType {
    /// A reference to a file that stays on the provider.
    ExternalLink,
}

/// Static answers to the host's capability queries.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Capabilities {
    /// Takes part in cross-repository search.
    pub global_search: bool,
    /// Content types offered.
    pub supported_filetypes: Vec<String>,
    /// Reference modes offered.
    pub supported_returntypes: ReturnType,
    /// Reads user-specific data.
    pub contains_private_data: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            global_search: false,
            supported_filetypes: vec!["video".to_string()],
            supported_returntypes: ReturnType::ExternalLink,
            contains_private_data: false,
        }
    }
}

/// A field of the login form.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LoginField {
    /// Input type.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Element ID.
    pub id: String,
    /// Request parameter name.
    pub name: String,
    /// Label shown before the input.
    pub label: String,
}

/// The form the host shows instead of a login: a single search box.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LoginForm {
    /// Form fields.
    pub login: Vec<LoginField>,
    /// Submit button label.
    pub login_btn_label: String,
    /// Submit button action.
    pub login_btn_action: String,
    /// The host may cache the form.
    pub allowcaching: bool,
}

impl LoginForm {
    /// Search form with a single text field named `s`.
    pub fn search_form() -> Self {
        Self {
            login: vec![LoginField {
                field_type: "text".to_string(),
                id: "videofront_search".to_string(),
                name: "s".to_string(),
                label: "Search: ".to_string(),
            }],
            login_btn_label: "Search".to_string(),
            login_btn_action: "search".to_string(),
            allowcaching: true,
        }
    }
}

/// Directory listing. Browsing is not supported so it is always empty.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Listing {
    /// Listed items.
    pub list: Vec<DisplayItem>,
}
