//! Grid and long-format layouts.

use std::cmp;
use std::io::Write;

use chrono::{DateTime, Local};
use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

use crate::color::{Color, Foreground};
use crate::entry::{is_hidden, ListEntry};
use crate::error::ListingError;
use crate::format::{block_usage, format_file_mode, format_modified};
use crate::owner::{resolve_owner_group, OwnerLookup};
use crate::printer::ColorizedPrinter;

pub const MAX_COLUMNS: usize = 12;

const GUTTER: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_color: bool,
    pub show_hidden: bool,
    pub long_format: bool,
}

impl DisplayOptions {
    fn is_visible(&self, name: &str) -> bool {
        self.show_hidden || !is_hidden(name)
    }
}

fn directory_color() -> Color {
    Color::foreground(Foreground::Blue)
}

/// Column count for names at most `longest` wide. Never below one.
pub fn grid_columns(term_width: usize, longest: usize) -> usize {
    cmp::min(MAX_COLUMNS, term_width / (longest + GUTTER)).max(1)
}

fn print_name<W: Write, E: ListEntry>(
    printer: &mut ColorizedPrinter<W>,
    entry: &E,
    options: &DisplayOptions,
) -> std::io::Result<()> {
    if options.show_color && entry.is_dir() {
        let mut scope = printer.with_color(directory_color());
        scope.print(entry.name())
    } else {
        printer.print(entry.name())
    }
}

pub fn print_entries_grid<W: Write, E: ListEntry>(
    printer: &mut ColorizedPrinter<W>,
    entries: &[E],
    options: &DisplayOptions,
    term_width: usize,
) -> Result<(), ListingError> {
    let visible: Vec<(usize, &E)> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| options.is_visible(e.name()))
        .collect();

    let longest = visible
        .iter()
        .map(|(_, e)| e.name().width())
        .max()
        .unwrap_or(0);
    let cell_width = longest + GUTTER;
    let columns = grid_columns(term_width, longest);
    debug!(term_width, longest, columns, "grid layout");

    let mut line_open = false;
    for (idx, entry) in &visible {
        print_name(printer, *entry, options)?;
        let padding = cell_width - entry.name().width();
        printer.write_raw(" ".repeat(padding).as_bytes())?;
        line_open = true;

        // Wraps on the position in the unfiltered list, hidden entries included.
        if (idx + 1) % columns == 0 {
            printer.write_raw(b"\n")?;
            line_open = false;
        }
    }

    if line_open || visible.is_empty() {
        printer.write_raw(b"\n")?;
    }

    Ok(())
}

/// Prints `total <blocks>` followed by one row per visible entry.
///
/// Rows are buffered so the total can lead. A metadata failure aborts the
/// listing before anything is written.
pub fn print_entries_long<W: Write, E: ListEntry>(
    printer: &mut ColorizedPrinter<W>,
    entries: &[E],
    options: &DisplayOptions,
    now: DateTime<Local>,
    owners: &dyn OwnerLookup,
) -> Result<(), ListingError> {
    let mut rows = ColorizedPrinter::new(Vec::new(), printer.color(), printer.is_enabled());
    let mut total_blocks = 0u64;

    for entry in entries.iter().filter(|e| options.is_visible(e.name())) {
        let meta = entry.metadata().map_err(|source| ListingError::Metadata {
            name: entry.name().to_string(),
            source,
        })?;

        let platform = meta.platform.as_ref();
        total_blocks += block_usage(platform, meta.size);

        let (owner, group) = resolve_owner_group(platform, owners);
        let nlink = platform.map_or(1, |p| p.nlink);
        let modified = format_modified(DateTime::<Local>::from(meta.modified), now);
        trace!(name = entry.name(), size = meta.size, "long row");

        rows.print(&format!(
            "{} {} {} {} {:>4} {:>13}  ",
            format_file_mode(meta.mode),
            nlink,
            owner,
            group,
            meta.size,
            modified
        ))?;
        print_name(&mut rows, entry, options)?;
        rows.write_raw(b"\n")?;
    }

    debug!(total_blocks, "long listing");
    printer.write_raw(format!("total {}\n", total_blocks).as_bytes())?;
    printer.write_raw(&rows.into_inner())?;
    Ok(())
}
