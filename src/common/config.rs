// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::Error;
use serde::de::DeserializeOwned;
#[allow(deprecated)]
use std::env::home_dir;
use std::fs::read_to_string;

/// Configuration parameters for the repository, kept as TOML text so each
/// feature can deserialize its own section.
#[derive(Debug)]
pub struct RepoConfig {
    debug_enabled: bool,
    toml: String,
}

impl RepoConfig {
    /// Creates a configuration builder.
    pub fn builder() -> RepoConfigBuilder {
        RepoConfigBuilder {
            debug_enabled: false,
            toml: None,
        }
    }

    /// Returns `true` if debug is enabled.
    pub fn debug(&self) -> bool {
        self.debug_enabled
    }

    /// Returns configuration parameters.
    pub fn get<T: DeserializeOwned>(&self) -> Result<T, Error> {
        toml::from_str(&self.toml).map_err(|e: toml::de::Error| Error::String(format!("toml: {e}")))
    }
}

/// Builds a `RepoConfig` from a string or a file.
pub struct RepoConfigBuilder {
    debug_enabled: bool,
    toml: Option<Result<String, Error>>,
}

impl RepoConfigBuilder {
    /// Complete building. Fails if no TOML was supplied or the file could not be read.
    pub fn build(self) -> Result<RepoConfig, Error> {
        match self.toml {
            Some(Ok(toml)) => Ok(RepoConfig {
                debug_enabled: self.debug_enabled,
                toml,
            }),
            Some(Err(e)) => Err(e),
            None => Err(Error::String("config not set".to_string())),
        }
    }

    /// Print log lines as they are traced.
    pub fn debug(mut self, debug_enabled: bool) -> Self {
        self.debug_enabled = debug_enabled;
        self
    }

    /// Read `file_name` from the home directory, falling back to the working directory.
    pub fn toml_file(mut self, file_name: &str) -> Self {
        #[allow(deprecated)]
        let home_path = home_dir()
            .and_then(|pathbuf| pathbuf.to_str().map(|path| format!("{path}/{file_name}")));
        let local_path = format!("./{file_name}");
        let toml = home_path
            .and_then(|path| read_to_string(path).ok())
            .map(Ok)
            .unwrap_or_else(|| {
                read_to_string(&local_path)
                    .map_err(|_| Error::String(format!("{local_path}: cannot read")))
            });
        self.toml = Some(toml);
        self
    }

    /// Use TOML text directly.
    pub fn toml_str(mut self, toml: &str) -> Self {
        self.toml = Some(Ok(toml.to_string()));
        self
    }

    /// Use TOML text directly.
    pub fn toml_string(mut self, toml: String) -> Self {
        self.toml = Some(Ok(toml));
        self
    }
}
