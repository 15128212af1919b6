//! Reset script assembly and output.

use crate::checksum::compute_checksum;
use crate::error::{CoreError, CoreResult};
use crate::header::{render_header, HeaderContext};
use crate::migration::{discover_migrations, MigrationFile};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const BANNER_RULE: &str =
    "-- ============================================================================";

/// Everything needed to produce one reset script
#[derive(Debug, Clone)]
pub struct ResetRequest {
    /// Directory holding the `*.sql` migrations
    pub migrations_dir: PathBuf,

    /// Destination file; overwritten if present
    pub output: PathBuf,

    /// Header template values
    pub header: HeaderContext,
}

/// Outcome of a successful generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetReport {
    /// Number of migrations concatenated
    pub migration_count: usize,

    /// Path that was written
    pub output: PathBuf,

    /// Size of the written script in bytes
    pub bytes: usize,

    /// SHA-256 of the written script
    pub checksum: String,
}

/// Banner written above each migration's content
pub fn migration_banner(filename: &str) -> String {
    format!("\n{BANNER_RULE}\n-- Migration: {filename}\n{BANNER_RULE}\n\n")
}

/// Concatenate the header and every migration into one buffer.
///
/// Each migration contributes its banner, its bytes unchanged, and one
/// trailing newline.
pub fn assemble(header: &str, migrations: &[MigrationFile]) -> CoreResult<Vec<u8>> {
    let mut buf = header.as_bytes().to_vec();
    for migration in migrations {
        let content = migration.read_content()?;
        log::debug!(
            "Appending {} ({} bytes)",
            migration.filename,
            content.len()
        );
        buf.extend_from_slice(migration_banner(&migration.filename).as_bytes());
        buf.extend_from_slice(&content);
        buf.push(b'\n');
    }
    Ok(buf)
}

fn write_output(path: &Path, bytes: &[u8]) -> CoreResult<()> {
    let write_err = |e: std::io::Error| CoreError::OutputWrite {
        path: path.display().to_string(),
        source: e,
    };

    let mut out = BufWriter::new(File::create(path).map_err(write_err)?);
    if let Err(e) = out.write_all(bytes).and_then(|()| out.flush()) {
        drop(out);
        // The destination was already truncated; don't leave a partial script.
        if let Err(rm) = std::fs::remove_file(path) {
            log::warn!("Could not remove partial {}: {}", path.display(), rm);
        }
        return Err(write_err(e));
    }
    Ok(())
}

/// Generate the reset script described by `request`.
///
/// Every migration is read before the destination is opened, so a missing
/// directory or unreadable migration leaves any existing output untouched.
pub fn generate(request: &ResetRequest) -> CoreResult<ResetReport> {
    let migrations = discover_migrations(&request.migrations_dir)?;
    let header = render_header(&request.header)?;
    let bytes = assemble(&header, &migrations)?;

    write_output(&request.output, &bytes)?;

    let report = ResetReport {
        migration_count: migrations.len(),
        output: request.output.clone(),
        bytes: bytes.len(),
        checksum: compute_checksum(&bytes),
    };
    log::debug!(
        "Wrote {} bytes to {} (sha256 {})",
        report.bytes,
        report.output.display(),
        report.checksum
    );
    Ok(report)
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
