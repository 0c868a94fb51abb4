//! Shared test doubles for the application ports.

#![allow(clippy::expect_used, dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use modelpack_cli::application::ports::{ConfigStore, LocalFs, ProgressReporter};
use modelpack_cli::domain::PackConfig;

// ── Reporters ─────────────────────────────────────────────────────────────────

/// No-op reporter for tests that don't inspect progress output.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn step(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}

/// Reporter that records every message, prefixed by its kind.
#[derive(Default)]
pub struct RecordingReporter {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock").clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.messages.lock().expect("lock").push(format!("step: {message}"));
    }
    fn success(&self, message: &str) {
        self.messages.lock().expect("lock").push(format!("success: {message}"));
    }
    fn warn(&self, message: &str) {
        self.messages.lock().expect("lock").push(format!("warn: {message}"));
    }
}

// ── In-memory filesystem ──────────────────────────────────────────────────────

#[derive(Clone)]
struct MemFile {
    content: Vec<u8>,
    mode: u32,
}

/// In-memory `LocalFs` with unix-like modes and failure injection.
///
/// Writing requires the parent directory to exist, like the real thing.
#[derive(Default)]
pub struct MemoryFs {
    files: Mutex<BTreeMap<PathBuf, MemFile>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
    unreadable: Mutex<BTreeSet<PathBuf>>,
    read_only_dirs: Mutex<BTreeSet<PathBuf>>,
    fail_chmod: Mutex<bool>,
}

fn io_err(kind: ErrorKind) -> anyhow::Error {
    std::io::Error::from(kind).into()
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (mode 0o644), creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dirs(parent);
        }
        self.files.lock().expect("lock").insert(
            path.to_path_buf(),
            MemFile {
                content: content.as_bytes().to_vec(),
                mode: 0o644,
            },
        );
        self
    }

    /// Seed an empty directory.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.add_dirs(path.as_ref());
        self
    }

    /// Reads of `path` fail with `PermissionDenied`.
    pub fn deny_read(&self, path: impl AsRef<Path>) {
        self.unreadable
            .lock()
            .expect("lock")
            .insert(path.as_ref().to_path_buf());
    }

    /// Creating or writing anything inside `dir` fails with `PermissionDenied`.
    pub fn deny_write(&self, dir: impl AsRef<Path>) {
        self.read_only_dirs
            .lock()
            .expect("lock")
            .insert(dir.as_ref().to_path_buf());
    }

    /// Every `set_permissions` call fails.
    pub fn fail_chmod(&self) {
        *self.fail_chmod.lock().expect("lock") = true;
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .lock()
            .expect("lock")
            .get(path.as_ref())
            .map(|f| String::from_utf8_lossy(&f.content).into_owned())
    }

    pub fn mode(&self, path: impl AsRef<Path>) -> Option<u32> {
        self.files
            .lock()
            .expect("lock")
            .get(path.as_ref())
            .map(|f| f.mode)
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.lock().expect("lock").contains(path.as_ref())
    }

    /// Names of the files directly inside `dir`, sorted.
    pub fn list(&self, dir: impl AsRef<Path>) -> Vec<String> {
        let dir = dir.as_ref();
        self.files
            .lock()
            .expect("lock")
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect()
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        self.files.lock().expect("lock").remove(path.as_ref());
    }

    pub fn overwrite(&self, path: impl AsRef<Path>, content: &str) {
        if let Some(f) = self.files.lock().expect("lock").get_mut(path.as_ref()) {
            f.content = content.as_bytes().to_vec();
        }
    }

    pub fn chmod(&self, path: impl AsRef<Path>, mode: u32) {
        if let Some(f) = self.files.lock().expect("lock").get_mut(path.as_ref()) {
            f.mode = mode;
        }
    }

    fn add_dirs(&self, path: &Path) {
        let mut dirs = self.dirs.lock().expect("lock");
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    fn is_read_only(&self, path: &Path) -> bool {
        let read_only = self.read_only_dirs.lock().expect("lock");
        path.ancestors().any(|a| read_only.contains(a))
    }
}

impl LocalFs for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().expect("lock").contains_key(path) || self.has_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().expect("lock").contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        if self.has_dir(path) {
            return Ok(());
        }
        if self.is_read_only(path) {
            return Err(io_err(ErrorKind::PermissionDenied));
        }
        self.add_dirs(path);
        Ok(())
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        if self.unreadable.lock().expect("lock").contains(path) {
            return Err(io_err(ErrorKind::PermissionDenied));
        }
        self.files
            .lock()
            .expect("lock")
            .get(path)
            .map(|f| f.content.clone())
            .ok_or_else(|| io_err(ErrorKind::NotFound))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|_| io_err(ErrorKind::InvalidData))
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        let parent = path.parent().unwrap_or(Path::new(""));
        if !parent.as_os_str().is_empty() && !self.has_dir(parent) {
            return Err(io_err(ErrorKind::NotFound));
        }
        if self.is_read_only(path) {
            return Err(io_err(ErrorKind::PermissionDenied));
        }
        let mut files = self.files.lock().expect("lock");
        let mode = files.get(path).map_or(0o644, |f| f.mode);
        files.insert(
            path.to_path_buf(),
            MemFile {
                content: content.to_vec(),
                mode,
            },
        );
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        if self.is_read_only(path) {
            return Err(io_err(ErrorKind::PermissionDenied));
        }
        self.files
            .lock()
            .expect("lock")
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| io_err(ErrorKind::NotFound))
    }

    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()> {
        if *self.fail_chmod.lock().expect("lock") {
            return Err(io_err(ErrorKind::PermissionDenied));
        }
        match self.files.lock().expect("lock").get_mut(path) {
            Some(f) => {
                f.mode = mode;
                Ok(())
            }
            None => Err(io_err(ErrorKind::NotFound)),
        }
    }

    fn is_executable(&self, path: &Path) -> Result<bool> {
        self.files
            .lock()
            .expect("lock")
            .get(path)
            .map(|f| f.mode & 0o100 != 0)
            .ok_or_else(|| io_err(ErrorKind::NotFound))
    }
}

// ── In-memory config store ────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryConfigStore {
    pub config: Mutex<Option<PackConfig>>,
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<PackConfig> {
        Ok(self.config.lock().expect("lock").clone().unwrap_or_default())
    }

    fn save(&self, config: &PackConfig) -> Result<()> {
        *self.config.lock().expect("lock") = Some(config.clone());
        Ok(())
    }

    fn path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/mem/config.yaml"))
    }
}
