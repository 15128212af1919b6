//! Migration discovery
//!
//! A migration is a regular file directly inside the migrations directory
//! whose name ends in `.sql` and does not start with a dot. Migrations are
//! applied in ascending file-name order, so the directory's naming
//! convention (numeric or timestamp prefixes) must make that order match the
//! intended application order. Nothing here can verify that.

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// A single migration script on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    /// Full path to the file
    pub path: PathBuf,

    /// Base name, used in the banner above the migration's content
    pub filename: String,
}

impl MigrationFile {
    fn from_path(path: PathBuf) -> Option<Self> {
        let filename = path.file_name()?.to_string_lossy().into_owned();
        Some(Self { path, filename })
    }

    /// Read the raw bytes of the migration, unmodified
    pub fn read_content(&self) -> CoreResult<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| CoreError::MigrationUnreadable {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}

/// Returns true when `path` names a migration: a `.sql` extension and no
/// leading dot, the same set a shell `*.sql` glob would match.
fn is_migration_name(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .is_some_and(|n| n.to_string_lossy().starts_with('.'));
    !hidden && path.extension().is_some_and(|e| e == "sql")
}

/// Discover migrations directly inside `dir` (no recursion), sorted by file
/// name ascending.
pub fn discover_migrations(dir: &Path) -> CoreResult<Vec<MigrationFile>> {
    let dir_err = |e: std::io::Error| CoreError::MigrationsDirUnreadable {
        path: dir.display().to_string(),
        source: e,
    };

    let mut migrations = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(dir_err)? {
        let path = entry.map_err(dir_err)?.path();
        if !is_migration_name(&path) {
            continue;
        }
        // Follows symlinks; a dangling link is an unreadable migration.
        let metadata = std::fs::metadata(&path).map_err(|e| CoreError::MigrationUnreadable {
            path: path.display().to_string(),
            source: e,
        })?;
        if metadata.is_dir() {
            log::debug!("Skipping directory {}", path.display());
            continue;
        }
        if let Some(migration) = MigrationFile::from_path(path) {
            migrations.push(migration);
        }
    }

    migrations.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    log::debug!(
        "Discovered {} migrations in {}",
        migrations.len(),
        dir.display()
    );
    Ok(migrations)
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
