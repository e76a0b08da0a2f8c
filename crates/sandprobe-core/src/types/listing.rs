//! Directory listing types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of a listed directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Regular file.
    File,

    /// Directory.
    Directory,

    /// Anything else, or an entry that could not be stat'ed.
    Unknown,
}

/// A single sampled directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// Entry file name.
    pub name: String,

    /// Entry kind.
    pub kind: EntryKind,

    /// Size in bytes, present for regular files only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl ListingEntry {
    /// Create a file entry.
    pub fn file(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            size_bytes: Some(size_bytes),
        }
    }

    /// Create a directory entry.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            size_bytes: None,
        }
    }

    /// Create an entry whose kind could not be determined.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Unknown,
            size_bytes: None,
        }
    }
}

/// Truncated listing of a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryListing {
    /// Listed directory.
    pub path: PathBuf,

    /// Number of entries in the directory.
    pub total_count: usize,

    /// First entries, at most the sample bound.
    pub entries: Vec<ListingEntry>,
}

impl DirectoryListing {
    /// Number of entries not included in the sample.
    pub fn remaining(&self) -> usize {
        self.total_count.saturating_sub(self.entries.len())
    }

    /// Whether the sample was truncated.
    pub fn is_truncated(&self) -> bool {
        self.remaining() > 0
    }
}
