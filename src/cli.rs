use std::path::PathBuf;

use clap::Parser;

use crate::config::ColorOption;

#[derive(Debug, Parser)]
#[command(name = "ls", version)]
#[command(
    about = "List information about the DIRECTORY. If no directory is specified, the current directory is used."
)]
pub struct Cli {
    /// Directory to list
    pub directory: Option<PathBuf>,

    /// Do not ignore entries starting with .
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Use a long listing format
    #[arg(short = 'l')]
    pub long_format: bool,

    /// When to colorize the output
    #[arg(long, visible_alias = "colour", value_enum, default_value_t = ColorOption::Auto)]
    pub color: ColorOption,

    /// Assume screen width instead of the current terminal width
    #[arg(short = 'w', long)]
    pub width: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ls"]).unwrap();
        assert!(cli.directory.is_none());
        assert!(!cli.all);
        assert!(!cli.long_format);
        assert_eq!(cli.color, ColorOption::Auto);
        assert!(cli.width.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["ls", "-la", "--color", "never", "-w", "100", "/tmp"]).unwrap();
        assert!(cli.all);
        assert!(cli.long_format);
        assert_eq!(cli.color, ColorOption::Never);
        assert_eq!(cli.width, Some(100));
        assert_eq!(cli.directory, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn test_colour_alias() {
        let cli = Cli::try_parse_from(["ls", "--colour", "always"]).unwrap();
        assert_eq!(cli.color, ColorOption::Always);
    }

    #[test]
    fn test_at_most_one_directory() {
        assert!(Cli::try_parse_from(["ls", "a", "b"]).is_err());
    }

    #[test]
    fn test_invalid_color_value() {
        assert!(Cli::try_parse_from(["ls", "--color", "sometimes"]).is_err());
    }
}
