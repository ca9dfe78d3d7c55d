//! A colorized `ls`: ANSI color formatting plus grid and long-format
//! directory listings.

pub mod cli;
pub mod color;
pub mod config;
pub mod entry;
pub mod error;
pub mod format;
pub mod listing;
pub mod owner;
pub mod printer;

pub use color::{colorize, Background, Color, Foreground, TextModifiers};
pub use config::{ColorOption, Config};
pub use entry::{read_entries, EntryMetadata, FsEntry, ListEntry, PlatformMetadata};
pub use error::{ColorError, ListingError};
pub use listing::{print_entries_grid, print_entries_long, DisplayOptions};
pub use owner::{OwnerLookup, SystemOwners};
pub use printer::ColorizedPrinter;
