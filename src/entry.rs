use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use tracing::debug;

use crate::error::ListingError;

/// Ownership and allocation details only POSIX platforms report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformMetadata {
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub block_size: u64,
    /// Allocated 512-byte blocks.
    pub blocks: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    /// File type and permission bits, `st_mode` layout.
    pub mode: u32,
    pub size: u64,
    pub modified: SystemTime,
    pub platform: Option<PlatformMetadata>,
}

impl EntryMetadata {
    pub fn from_fs(metadata: &fs::Metadata) -> io::Result<Self> {
        Ok(EntryMetadata {
            mode: file_mode(metadata),
            size: metadata.len(),
            modified: metadata.modified()?,
            platform: platform_metadata(metadata),
        })
    }
}

#[cfg(unix)]
fn file_mode(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    metadata.mode()
}

#[cfg(not(unix))]
fn file_mode(metadata: &fs::Metadata) -> u32 {
    let file_type = metadata.file_type();
    let kind = if file_type.is_dir() {
        0o040000
    } else if file_type.is_symlink() {
        0o120000
    } else {
        0o100000
    };
    let perms = match (file_type.is_dir(), metadata.permissions().readonly()) {
        (true, _) => 0o755,
        (false, true) => 0o444,
        (false, false) => 0o644,
    };
    kind | perms
}

#[cfg(unix)]
fn platform_metadata(metadata: &fs::Metadata) -> Option<PlatformMetadata> {
    use std::os::unix::fs::MetadataExt;
    Some(PlatformMetadata {
        nlink: metadata.nlink(),
        uid: metadata.uid(),
        gid: metadata.gid(),
        block_size: metadata.blksize(),
        blocks: metadata.blocks(),
    })
}

#[cfg(not(unix))]
fn platform_metadata(_metadata: &fs::Metadata) -> Option<PlatformMetadata> {
    None
}

/// A directory entry as the renderer sees it.
///
/// Name and directory flag are known up front; everything else is fetched
/// on demand and that fetch may fail.
pub trait ListEntry {
    fn name(&self) -> &str;
    fn is_dir(&self) -> bool;
    fn metadata(&self) -> io::Result<EntryMetadata>;
}

#[derive(Debug)]
pub struct FsEntry {
    entry: fs::DirEntry,
    name: String,
    is_dir: bool,
}

impl FsEntry {
    pub fn new(entry: fs::DirEntry) -> io::Result<Self> {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type()?.is_dir();
        Ok(FsEntry { entry, name, is_dir })
    }
}

impl ListEntry for FsEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_dir(&self) -> bool {
        self.is_dir
    }

    fn metadata(&self) -> io::Result<EntryMetadata> {
        // DirEntry::metadata does not traverse symlinks.
        EntryMetadata::from_fs(&self.entry.metadata()?)
    }
}

/// Reads `path` into entries ordered by file name.
pub fn read_entries(path: &Path) -> Result<Vec<FsEntry>, ListingError> {
    let read_err = |source: io::Error| ListingError::ReadDir {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        entries.push(FsEntry::new(entry).map_err(read_err)?);
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(path = %path.display(), count = entries.len(), "read directory");
    Ok(entries)
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
