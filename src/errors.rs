// Copyright (c) 2025 gdns2tf contributors
// SPDX-License-Identifier: MIT

//! Error types for gdns2tf.
//!
//! This module provides specialized error types for:
//! - Configuration validation before anything is spawned or written
//! - The `gcloud` record-set listing subprocess
//!
//! Listing failures are kept structured (spawn failure, non-zero exit,
//! bad output encoding) so a failing `gcloud` run surfaces as a real error
//! instead of silently-empty output.

use std::process::ExitStatus;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors raised while validating the run configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The GCP project ID is empty after trimming
    #[error("project ID must not be empty")]
    EmptyProject,

    /// The managed-zone name is empty after trimming
    #[error("managed-zone name must not be empty")]
    EmptyZone,
}

/// Errors raised while listing record-sets via the `gcloud` CLI.
#[derive(Error, Debug)]
pub enum ListError {
    /// The listing program could not be started at all.
    ///
    /// Typically the binary is not installed or not on `PATH`.
    #[error("failed to run '{program}': {source}")]
    Spawn {
        /// The program that could not be spawned
        program: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The listing program ran but exited with a non-zero status.
    #[error("'{program}' exited with {status}: {stderr}")]
    CommandFailed {
        /// The program that failed
        program: String,
        /// The exit status reported by the OS
        status: ExitStatus,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The listing program produced output that is not valid UTF-8.
    #[error("'{program}' produced non-UTF-8 output")]
    InvalidUtf8 {
        /// The program whose output could not be decoded
        program: String,
        /// The underlying decoding error
        #[source]
        source: FromUtf8Error,
    },
}
