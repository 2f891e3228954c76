// Copyright (c) 2025 gdns2tf contributors
// SPDX-License-Identifier: MIT

//! Parsing of the `gcloud` CSV listing into record-sets.
//!
//! The listing carries a header row (`name,type,ttl,data`) followed by one
//! row per record-set. Rows that fail to deserialize, or that deserialize
//! with any required field empty, are logged and skipped; processing always
//! continues with the remaining rows. Empty or malformed input therefore
//! yields zero records, never an error.

use serde::Deserialize;
use tracing::{info, warn};

/// One DNS record-set as listed by the provider.
///
/// `ttl` is carried as an opaque string and passed through unvalidated; the
/// `data` field holds the raw provider-formatted value(s), comma-separated
/// when the record-set has more than one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecordSet {
    /// Fully qualified record name, usually with a trailing dot
    pub name: String,
    /// Record type (A, TXT, SRV, CNAME, ...)
    #[serde(rename = "type")]
    pub record_type: String,
    /// Time-to-live in seconds, passed through as-is
    pub ttl: String,
    /// Raw record data
    pub data: String,
}

impl RecordSet {
    /// True when all four required fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.record_type.is_empty()
            && !self.ttl.is_empty()
            && !self.data.is_empty()
    }
}

/// Outcome of parsing one listing.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    /// Records that passed validation, in input order
    pub records: Vec<RecordSet>,
    /// Number of rows skipped for missing fields or parse errors
    pub skipped: usize,
}

/// Parses the raw CSV listing into validated record-sets.
///
/// Surrounding whitespace is trimmed from every field. Incomplete rows are
/// skipped with a diagnostic, mirroring what `gcloud` sometimes emits for
/// record-sets mid-change.
pub fn parse_record_sets(raw: &str) -> ParseOutcome {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());

    let mut outcome = ParseOutcome::default();
    for result in reader.deserialize::<RecordSet>() {
        match result {
            Ok(record) if record.is_complete() => {
                info!("processing record {}", record.name);
                outcome.records.push(record);
            }
            Ok(record) => {
                warn!(
                    "skipping record {} && {} && {} && {}",
                    record.name, record.record_type, record.ttl, record.data
                );
                outcome.skipped += 1;
            }
            Err(error) => {
                warn!("skipping unparseable record-set row: {error}");
                outcome.skipped += 1;
            }
        }
    }

    outcome
}
