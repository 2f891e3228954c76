// Copyright (c) 2025 gdns2tf contributors
// SPDX-License-Identifier: MIT

//! Run configuration for gdns2tf.
//!
//! All knobs come in through the CLI (with environment-variable fallbacks)
//! and are validated here before the `gcloud` subprocess is spawned or any
//! file is written.

use crate::errors::ConfigError;
use std::path::PathBuf;

/// Everything one gdns2tf run needs to know.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID, used in the `terraform import` resource address
    pub project: String,
    /// Cloud DNS managed-zone name to list record-sets from
    pub zone: String,
    /// Directory the `.tf` files and `import.sh` are written to
    pub output_dir: PathBuf,
    /// Program name or path of the Google Cloud CLI
    pub gcloud_bin: String,
}

impl Config {
    /// Creates a new configuration.
    pub fn new(
        project: impl Into<String>,
        zone: impl Into<String>,
        output_dir: impl Into<PathBuf>,
        gcloud_bin: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            zone: zone.into(),
            output_dir: output_dir.into(),
            gcloud_bin: gcloud_bin.into(),
        }
    }

    /// Validates the configuration.
    ///
    /// Project and zone must be non-empty after trimming; both end up inside
    /// the import resource address, where an empty segment would produce
    /// commands that can never succeed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project.trim().is_empty() {
            return Err(ConfigError::EmptyProject);
        }
        if self.zone.trim().is_empty() {
            return Err(ConfigError::EmptyZone);
        }
        Ok(())
    }
}
