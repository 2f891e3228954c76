// Copyright (c) 2025 gdns2tf contributors
// SPDX-License-Identifier: MIT

//! Terraform rendering for DNS record-sets.
//!
//! This module turns one [`RecordSet`] into:
//! - a deterministic resource identifier derived from (name, type),
//! - a `google_dns_record_set` resource block rendered from a compile-time
//!   template,
//! - a matching `terraform import` command line,
//! - the filename the resource block is written under.
//!
//! All functions are pure and easily testable.
//!
//! `rrdatas` formatting depends on the record type: SRV data is comma-split
//! into a multi-line list of quoted values; everything else becomes a single
//! quoted scalar with embedded quotes backslash-escaped by the rendering
//! layer (TXT data from the provider arrives already wrapped in quotes, and
//! that outer pair is treated as the delimiter rather than escaped).

use crate::constants::{RECORD_TYPE_SRV, TF_FILE_SUFFIX, TF_RESOURCE_TYPE};
use crate::records::RecordSet;

// Embed the resource block template at compile time
const RECORD_TEMPLATE: &str = include_str!("../templates/record.tf.tmpl");

/// Derives the Terraform resource identifier for a (name, type) pair.
///
/// Every non-alphanumeric character of the record name maps to `_`, the
/// result is lowercased, and the lowercased type is appended. Deterministic
/// and idempotent; distinct records can collide (`a-b.example.com` and
/// `a.b.example.com` share an identifier) and collisions are not detected.
pub fn resource_identifier(name: &str, record_type: &str) -> String {
    format!("{}_{}", sanitize(name), record_type.to_lowercase())
}

/// Derives the output filename for a (name, type) pair.
///
/// Keeps the reference layout: sanitized lowercased name, the type verbatim
/// (uppercase), then `_.tf` — e.g. `www_example_com_A_.tf`.
pub fn resource_filename(name: &str, record_type: &str) -> String {
    format!("{}{}{}", sanitize(name), record_type, TF_FILE_SUFFIX)
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .to_lowercase()
}

/// Formats the raw data field into one-or-more quoted rrdata values.
///
/// SRV record-sets list several targets in one data field; all quotes are
/// stripped and the field is split on commas. Every other type renders as a
/// single quoted scalar.
pub fn format_rrdatas(record_type: &str, data: &str) -> Vec<String> {
    if record_type == RECORD_TYPE_SRV {
        data.replace('"', "")
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| format!("\"{value}\""))
            .collect()
    } else {
        vec![quote_scalar(data)]
    }
}

/// Wraps `data` in double quotes, escaping embedded quotes.
///
/// If the provider already delivered the value wrapped in one pair of quotes
/// (TXT data), that pair becomes the delimiter; any quotes left inside the
/// payload are backslash-escaped.
fn quote_scalar(data: &str) -> String {
    let inner = data
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(data);
    format!("\"{}\"", inner.replace('"', "\\\""))
}

/// Renders the full resource block for one record-set.
pub fn render_resource(record: &RecordSet, zone: &str) -> String {
    let rrdatas = format_rrdatas(&record.record_type, &record.data);

    RECORD_TEMPLATE
        .replace(
            "{{RESOURCE_NAME}}",
            &resource_identifier(&record.name, &record.record_type),
        )
        .replace("{{NAME}}", &record.name)
        .replace("{{TYPE}}", &record.record_type)
        .replace("{{TTL}}", &record.ttl)
        .replace("{{MANAGED_ZONE}}", zone)
        .replace("{{RRDATAS}}", &render_rrdatas(&rrdatas))
}

/// Renders the rrdatas list: single values stay on one line, multi-value
/// lists (SRV) get one entry per line.
fn render_rrdatas(values: &[String]) -> String {
    match values {
        [single] => format!("[{single}]"),
        _ => {
            let mut list = String::from("[\n");
            for value in values {
                list.push_str("    ");
                list.push_str(value);
                list.push_str(",\n");
            }
            list.push_str("  ]");
            list
        }
    }
}

/// Builds the `terraform import` command line for one record-set.
///
/// The resource address encodes project, zone, record name, and type:
/// `projects/<project>/managedZones/<zone>/rrsets/<name>/<type>`.
pub fn import_command(record: &RecordSet, project: &str, zone: &str) -> String {
    format!(
        "terraform import {TF_RESOURCE_TYPE}.{} \"projects/{project}/managedZones/{zone}/rrsets/{}/{}\"",
        resource_identifier(&record.name, &record.record_type),
        record.name,
        record.record_type
    )
}
