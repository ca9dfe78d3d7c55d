use std::io;
use std::path::PathBuf;

use crate::color::TextModifiers;

/// Rejected color modifier operations.
#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid modifier {0:?}: DefaultText names no text modifier")]
    InvalidModifier(TextModifiers),
}

/// Errors that abort a listing run.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("unable to get file info for {name}: {source}")]
    Metadata { name: String, source: io::Error },

    #[error("unable to read directory {}: {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("unable to determine pwd: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("failed to write listing: {0}")]
    Write(#[from] io::Error),
}
