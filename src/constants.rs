// Copyright (c) 2025 gdns2tf contributors
// SPDX-License-Identifier: MIT

//! Global constants for gdns2tf.
//!
//! This module contains the string constants used throughout the codebase,
//! organized by category.

// ============================================================================
// Terraform Constants
// ============================================================================

/// Terraform resource type generated for every record-set
pub const TF_RESOURCE_TYPE: &str = "google_dns_record_set";

/// Filename of the generated import script
pub const IMPORT_SCRIPT_FILENAME: &str = "import.sh";

/// Suffix appended to every generated resource file
pub const TF_FILE_SUFFIX: &str = "_.tf";

// ============================================================================
// gcloud Invocation Constants
// ============================================================================

/// Default program name for the Google Cloud CLI
pub const DEFAULT_GCLOUD_BIN: &str = "gcloud";

/// Output format requested from `gcloud dns record-sets list`
pub const GCLOUD_CSV_FORMAT: &str = "csv(name,type,ttl,data)";

// ============================================================================
// Record Type Constants
// ============================================================================

/// Record type whose data holds multiple comma-separated values
pub const RECORD_TYPE_SRV: &str = "SRV";
