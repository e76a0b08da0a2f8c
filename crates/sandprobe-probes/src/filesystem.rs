//! Filesystem probes.

use crate::error::ProbeError;
use crate::probe::{Probe, ProbeKind};
use crate::Result;
use sandprobe_core::{Access, DirectoryListing, ListingEntry, Outcome};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// File name of the write probe artifact.
pub const WRITE_TEST_FILE: &str = "test-write.txt";

/// Content written and read back by the write probe.
pub const WRITE_TEST_CONTENT: &str = "Sandbox test successful!";

/// Writes, reads back, and removes a file in the sandbox home.
pub struct WriteProbe {
    path: PathBuf,
}

impl WriteProbe {
    /// Create a write probe targeting `{sandbox_home}/test-write.txt`.
    pub fn new(sandbox_home: impl AsRef<Path>) -> Self {
        Self {
            path: sandbox_home.as_ref().join(WRITE_TEST_FILE),
        }
    }

    /// Path of the test artifact.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn round_trip(&self) -> Result<String> {
        fs::write(&self.path, WRITE_TEST_CONTENT)
            .map_err(|e| ProbeError::io("write", &self.path, e))?;
        let content = fs::read_to_string(&self.path)
            .map_err(|e| ProbeError::io("read", &self.path, e))?;
        fs::remove_file(&self.path).map_err(|e| ProbeError::io("remove", &self.path, e))?;

        if content != WRITE_TEST_CONTENT {
            return Err(ProbeError::RoundTripMismatch {
                expected: WRITE_TEST_CONTENT.to_string(),
                actual: content,
            });
        }
        Ok(content)
    }
}

impl Probe for WriteProbe {
    fn name(&self) -> &str {
        "Write test"
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::Write
    }

    fn run(&self) -> Outcome {
        match self.round_trip() {
            Ok(content) => Outcome::Success(content),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "write probe failed");
                Outcome::error(e.to_string())
            }
        }
    }
}

/// Attempts to read a file that the sandbox should hide.
pub struct SensitiveFileProbe {
    path: PathBuf,
    label: String,
}

impl SensitiveFileProbe {
    /// Create a probe for `path`, labelled by its file name.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, label }
    }
}

impl Probe for SensitiveFileProbe {
    fn name(&self) -> &str {
        &self.label
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::SensitiveFile
    }

    fn run(&self) -> Outcome {
        match readable_size(&self.path) {
            Ok(bytes) => {
                warn!(path = %self.path.display(), bytes, "sensitive file is readable");
                Outcome::UnexpectedAccess(Access::Readable { bytes })
            }
            Err(e) => {
                debug!(path = %self.path.display(), kind = ?e.kind(), "sensitive file blocked");
                Outcome::blocked(&e)
            }
        }
    }
}

/// Size of a regular file, after proving one byte of it can be read.
///
/// Anything other than a regular file (a FIFO, a device node) is refused
/// before it is opened.
fn readable_size(path: &Path) -> io::Result<u64> {
    if !fs::metadata(path)?.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }

    let mut file = File::open(path)?;
    let bytes = file.metadata()?.len();
    io::copy(&mut file.by_ref().take(1), &mut io::sink())?;
    Ok(bytes)
}

/// Attempts to list a directory outside the sandbox.
pub struct DirectoryProbe {
    path: PathBuf,
    label: String,
    kind: ProbeKind,
    sample_limit: usize,
}

impl DirectoryProbe {
    /// Probe the real home directory.
    pub fn real_home(path: impl Into<PathBuf>, sample_limit: usize) -> Self {
        Self::new(path, ProbeKind::RealHome, sample_limit)
    }

    /// Probe a system directory.
    pub fn system_dir(path: impl Into<PathBuf>, sample_limit: usize) -> Self {
        Self::new(path, ProbeKind::SystemDir, sample_limit)
    }

    fn new(path: impl Into<PathBuf>, kind: ProbeKind, sample_limit: usize) -> Self {
        let path = path.into();
        Self {
            label: path.display().to_string(),
            path,
            kind,
            sample_limit,
        }
    }
}

impl Probe for DirectoryProbe {
    fn name(&self) -> &str {
        &self.label
    }

    fn kind(&self) -> ProbeKind {
        self.kind
    }

    fn run(&self) -> Outcome {
        match read_listing(&self.path, self.sample_limit) {
            Ok(listing) => {
                warn!(
                    path = %self.path.display(),
                    entries = listing.total_count,
                    "directory is listable"
                );
                Outcome::UnexpectedAccess(Access::Listed(listing))
            }
            Err(e) => {
                debug!(path = %self.path.display(), kind = ?e.kind(), "directory listing blocked");
                Outcome::blocked(&e)
            }
        }
    }
}

/// List a directory, keeping at most `limit` entries in name order.
///
/// Only opening the directory can fail. Each sampled entry is stat'ed
/// (following symlinks); an entry that cannot be stat'ed is kept as
/// [`EntryKind::Unknown`](sandprobe_core::EntryKind::Unknown). Entries the
/// iterator fails to yield still count towards `total_count`.
pub fn read_listing(path: &Path, limit: usize) -> io::Result<DirectoryListing> {
    let entries = fs::read_dir(path)?.map(|entry| entry.map(|e| e.file_name()));
    let (names, unreadable) = collect_names(path, entries);

    let total_count = names.len() + unreadable;
    let entries = names
        .into_iter()
        .take(limit)
        .map(|name| stat_entry(path, name))
        .collect();

    Ok(DirectoryListing {
        path: path.to_path_buf(),
        total_count,
        entries,
    })
}

/// Sorted entry names, plus the number of entries that failed to read.
fn collect_names(
    dir: &Path,
    entries: impl Iterator<Item = io::Result<OsString>>,
) -> (Vec<String>, usize) {
    let mut names = Vec::new();
    let mut unreadable = 0;
    for entry in entries {
        match entry {
            Ok(name) => names.push(name.to_string_lossy().into_owned()),
            Err(e) => {
                trace!(path = %dir.display(), error = %e, "could not read directory entry");
                unreadable += 1;
            }
        }
    }
    names.sort();
    (names, unreadable)
}

fn stat_entry(dir: &Path, name: String) -> ListingEntry {
    match fs::metadata(dir.join(&name)) {
        Ok(meta) if meta.is_file() => ListingEntry::file(name, meta.len()),
        Ok(meta) if meta.is_dir() => ListingEntry::directory(name),
        Ok(_) => ListingEntry::unknown(name),
        Err(e) => {
            trace!(entry = %name, error = %e, "could not stat entry");
            ListingEntry::unknown(name)
        }
    }
}
