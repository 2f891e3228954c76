// Copyright (c) 2025 gdns2tf contributors
// SPDX-License-Identifier: MIT

//! Record-set listing via the `gcloud` CLI.
//!
//! One synchronous subprocess invocation per run:
//!
//! ```text
//! gcloud dns record-sets list --zone=<zone> --project=<project> \
//!     --format="csv(name,type,ttl,data)"
//! ```
//!
//! The argument vector is passed explicitly (no shell interpolation) and
//! stdout, stderr, and the exit status are captured separately, so a failing
//! invocation becomes a [`ListError`] rather than empty output. No timeout is
//! applied; a hanging `gcloud` hangs the run.

use crate::constants::GCLOUD_CSV_FORMAT;
use crate::errors::ListError;
use std::process::Command;
use tracing::debug;

/// Lists DNS record-sets for a managed zone by shelling out to `gcloud`.
#[derive(Debug, Clone)]
pub struct RecordSource {
    program: String,
    project: String,
}

impl RecordSource {
    /// Creates a source that invokes `program` against `project`.
    pub fn new(program: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            project: project.into(),
        }
    }

    /// Runs the listing command for `zone` and returns its raw CSV stdout.
    pub fn list_record_sets(&self, zone: &str) -> Result<String, ListError> {
        let args = [
            "dns".to_string(),
            "record-sets".to_string(),
            "list".to_string(),
            format!("--zone={zone}"),
            format!("--project={}", self.project),
            format!("--format={GCLOUD_CSV_FORMAT}"),
        ];

        debug!("running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| ListError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ListError::CommandFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!(
            "listing produced {} bytes of output for zone {zone}",
            output.stdout.len()
        );

        String::from_utf8(output.stdout).map_err(|source| ListError::InvalidUtf8 {
            program: self.program.clone(),
            source,
        })
    }
}
