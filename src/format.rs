use chrono::{DateTime, Local, Months};

use crate::entry::PlatformMetadata;

const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;

/// Formats `st_mode` bits like `drwxr-xr-x`.
pub fn format_file_mode(mode: u32) -> String {
    let kind = match mode & S_IFMT {
        S_IFDIR => 'd',
        S_IFLNK => 'l',
        S_IFIFO => 'p',
        S_IFSOCK => 's',
        S_IFCHR => 'c',
        S_IFBLK => 'b',
        _ => '-',
    };

    let mut chars = [kind, '-', '-', '-', '-', '-', '-', '-', '-', '-'];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = 1 + i * 3;
        if (mode >> (shift + 2)) & 1 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1 != 0 {
            chars[base + 2] = 'x';
        }
    }

    // setuid, setgid, sticky
    let specials = [(0o4000, 3, 's'), (0o2000, 6, 's'), (0o1000, 9, 't')];
    for (bit, idx, lower) in specials {
        if mode & bit != 0 {
            chars[idx] = if chars[idx] == 'x' {
                lower
            } else {
                lower.to_ascii_uppercase()
            };
        }
    }

    chars.iter().collect()
}

/// `Mon DD HH:MM` for recent files, `Mon DD  YYYY` for anything modified
/// before one year ago.
pub fn format_modified(modified: DateTime<Local>, now: DateTime<Local>) -> String {
    let year_ago = now.checked_sub_months(Months::new(12)).unwrap_or(now);
    if modified < year_ago {
        modified.format("%b %d  %Y").to_string()
    } else {
        modified.format("%b %d %H:%M").to_string()
    }
}

/// Block usage in 512-byte units, assuming the platform block size is a
/// multiple of 512.
pub fn block_usage(platform: Option<&PlatformMetadata>, size: u64) -> u64 {
    match platform {
        Some(p) if p.block_size > 0 => size.div_ceil(p.block_size) * 4,
        _ => 0,
    }
}
