// Copyright (c) 2025 gdns2tf contributors
// SPDX-License-Identifier: MIT

//! Filesystem output for generated artifacts.
//!
//! One `.tf` file per record-set plus one `import.sh` for the whole run.
//! Import lines accumulate in memory and the script is written exactly once,
//! after the last record. Existing files are overwritten silently; writes are
//! plain `fs::write` with no temp-file-then-rename step, and write failures
//! propagate as hard errors.

use crate::constants::IMPORT_SCRIPT_FILENAME;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes resource files and the import script into one output directory.
#[derive(Debug)]
pub struct Emitter {
    output_dir: PathBuf,
    import_lines: Vec<String>,
}

impl Emitter {
    /// Creates an emitter targeting `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            import_lines: Vec::new(),
        }
    }

    /// Ensures the output directory exists.
    pub fn ensure_output_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.output_dir)
    }

    /// Writes one resource block under `filename`, overwriting if present.
    pub fn write_resource(&self, filename: &str, content: &str) -> io::Result<PathBuf> {
        let path = self.output_dir.join(filename);
        fs::write(&path, content)?;
        info!("generated {filename}");
        Ok(path)
    }

    /// Queues one import command line for the end-of-run script.
    pub fn record_import(&mut self, line: String) {
        self.import_lines.push(line);
    }

    /// Number of import lines queued so far.
    pub fn import_count(&self) -> usize {
        self.import_lines.len()
    }

    /// Writes the accumulated import script, one command per line.
    pub fn write_import_script(&self) -> io::Result<PathBuf> {
        let path = self.output_dir.join(IMPORT_SCRIPT_FILENAME);
        let mut script = self.import_lines.join("\n");
        script.push('\n');
        fs::write(&path, script)?;
        info!(
            "generated {IMPORT_SCRIPT_FILENAME} with {} import command(s)",
            self.import_lines.len()
        );
        Ok(path)
    }

    /// The directory this emitter writes into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
