//! Application service — materialize environment artifacts on disk.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through the injected `LocalFs` port.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::ports::LocalFs;
use crate::application::services::io_source;
use crate::domain::artifacts::{self, ArtifactFile, SETUP_SH_MODE};
use crate::domain::env::EnvironmentSpec;
use crate::domain::error::ArtifactError;

/// Writes `requirements.txt` and `setup.sh` for an `EnvironmentSpec`.
///
/// Holds no state besides the filesystem handle. Files are written one at
/// a time with no rollback: if `setup.sh` fails, a `requirements.txt`
/// written just before it stays on disk.
pub struct ArtifactWriter<'a, F: LocalFs> {
    fs: &'a F,
}

impl<'a, F: LocalFs> ArtifactWriter<'a, F> {
    #[must_use]
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Write every artifact `spec` declares into `dest` and return `dest`.
    ///
    /// `dest` is created if missing. The caller must keep `dest` unique
    /// across concurrent saves.
    ///
    /// # Errors
    ///
    /// Returns an `EnvError` for a malformed dependency list (before any
    /// I/O), or an [`ArtifactError`] naming the path that failed.
    pub fn write(&self, spec: &EnvironmentSpec, dest: &Path) -> Result<PathBuf> {
        let files = artifacts::plan(spec)?;
        self.write_files(&files, dest)?;
        Ok(dest.to_path_buf())
    }

    /// Write an already planned file set into `dest`.
    ///
    /// # Errors
    ///
    /// Returns an [`ArtifactError`] naming the path that failed.
    pub fn write_files(&self, files: &[ArtifactFile], dest: &Path) -> Result<()> {
        self.fs
            .create_dir_all(dest)
            .map_err(|e| ArtifactError::DirectoryNotWritable {
                path: dest.display().to_string(),
                source: io_source(e),
            })?;

        for file in files {
            let path = dest.join(file.name);
            self.fs
                .write(&path, file.content.as_bytes())
                .map_err(|e| ArtifactError::WriteFailed {
                    path: path.display().to_string(),
                    source: io_source(e),
                })?;
            if file.executable {
                self.fs
                    .set_permissions(&path, SETUP_SH_MODE)
                    .map_err(|e| ArtifactError::PermissionsFailed {
                        path: path.display().to_string(),
                        source: io_source(e),
                    })?;
            }
            tracing::debug!(
                path = %path.display(),
                bytes = file.content.len(),
                executable = file.executable,
                "artifact written"
            );
        }
        Ok(())
    }
}
