// Copyright (c) 2025 gdns2tf contributors
// SPDX-License-Identifier: MIT

//! # gdns2tf - Terraform importer for Google Cloud DNS
//!
//! gdns2tf lists the record-sets of one Cloud DNS managed zone via the
//! `gcloud` CLI and converts each of them into a Terraform
//! `google_dns_record_set` resource file plus a matching `terraform import`
//! command, so pre-existing records can be brought under Terraform
//! management without being re-created.
//!
//! ## Overview
//!
//! One run is a single sequential pass:
//!
//! 1. invoke `gcloud dns record-sets list` with CSV output,
//! 2. parse the CSV into record-sets, skipping incomplete rows,
//! 3. render one resource block per record and write it to its own `.tf`
//!    file,
//! 4. write `import.sh` with one import command per record.
//!
//! ## Modules
//!
//! - [`config`] - Run configuration and validation
//! - [`gcloud`] - The record-set listing subprocess
//! - [`records`] - CSV parsing into record-sets
//! - [`terraform`] - Identifier derivation and resource/import rendering
//! - [`emitter`] - Filesystem output
//! - [`importer`] - The run pipeline tying the above together
//!
//! ## Example
//!
//! ```rust,no_run
//! use gdns2tf::config::Config;
//! use gdns2tf::importer::Importer;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = Config::new("my-project", "my-zone", "./out", "gcloud");
//! let summary = Importer::new(config).run()?;
//! println!("wrote {} resource files", summary.written);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod emitter;
pub mod errors;
pub mod gcloud;
pub mod importer;
pub mod records;
pub mod terraform;

#[cfg(test)]
mod terraform_tests;
