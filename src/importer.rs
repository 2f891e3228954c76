// Copyright (c) 2025 gdns2tf contributors
// SPDX-License-Identifier: MIT

//! The sequential run pipeline: fetch, parse, render, emit.
//!
//! One pass, single-threaded, no state carried between records beyond the
//! queued import lines. A record is parsed, rendered, written, and dropped;
//! `import.sh` is written once after the last record. Runs that yield zero
//! valid records produce no files at all.

use crate::config::Config;
use crate::emitter::Emitter;
use crate::gcloud::RecordSource;
use crate::records::parse_record_sets;
use crate::terraform::{import_command, render_resource, resource_filename};
use anyhow::{Context, Result};
use tracing::warn;

/// Counters reported after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Resource files written (equals import lines in `import.sh`)
    pub written: usize,
    /// Input rows skipped for missing fields or parse errors
    pub skipped: usize,
}

/// Drives one full listing-to-Terraform conversion.
#[derive(Debug)]
pub struct Importer {
    config: Config,
}

impl Importer {
    /// Creates an importer for the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Validates the configuration, lists the zone, and converts the result.
    pub fn run(&self) -> Result<RunSummary> {
        self.config.validate()?;

        let source = RecordSource::new(&self.config.gcloud_bin, &self.config.project);
        let raw = source
            .list_record_sets(&self.config.zone)
            .context("listing DNS record-sets failed")?;

        self.convert(&raw)
    }

    /// Converts an already-fetched CSV listing into output files.
    ///
    /// Split out from [`run`](Self::run) so the transformation can be
    /// exercised without a `gcloud` binary.
    pub fn convert(&self, raw: &str) -> Result<RunSummary> {
        let outcome = parse_record_sets(raw);
        if outcome.records.is_empty() {
            warn!(
                "no valid record-sets in listing for zone {}; nothing to generate",
                self.config.zone
            );
            return Ok(RunSummary {
                written: 0,
                skipped: outcome.skipped,
            });
        }

        let mut emitter = Emitter::new(&self.config.output_dir);
        emitter
            .ensure_output_dir()
            .with_context(|| format!("creating {}", self.config.output_dir.display()))?;

        for record in &outcome.records {
            let filename = resource_filename(&record.name, &record.record_type);
            let content = render_resource(record, &self.config.zone);
            emitter
                .write_resource(&filename, &content)
                .with_context(|| format!("writing {filename}"))?;
            emitter.record_import(import_command(record, &self.config.project, &self.config.zone));
        }

        emitter
            .write_import_script()
            .context("writing import script")?;

        Ok(RunSummary {
            written: emitter.import_count(),
            skipped: outcome.skipped,
        })
    }
}
