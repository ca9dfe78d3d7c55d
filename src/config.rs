use std::path::PathBuf;

use tracing::debug;

use crate::cli::Cli;
use crate::listing::DisplayOptions;

/// Width used when stdout is not a terminal and no width was given.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorOption {
    Always,
    Auto,
    Never,
}

impl ColorOption {
    pub fn enabled(self, stdout_is_terminal: bool) -> bool {
        match self {
            ColorOption::Always => true,
            ColorOption::Auto => stdout_is_terminal,
            ColorOption::Never => false,
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub directory: Option<PathBuf>,
    pub options: DisplayOptions,
    pub width: usize,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        let stdout_is_terminal = atty::is(atty::Stream::Stdout);
        let terminal_width = if stdout_is_terminal {
            term_size::dimensions_stdout().map(|(w, _)| w)
        } else {
            None
        };

        let config = Config::resolve(cli, stdout_is_terminal, terminal_width);
        debug!(
            width = config.width,
            color = config.options.show_color,
            stdout_is_terminal,
            "resolved config"
        );
        config
    }

    fn resolve(cli: Cli, stdout_is_terminal: bool, terminal_width: Option<usize>) -> Self {
        Config {
            directory: cli.directory,
            options: DisplayOptions {
                show_color: cli.color.enabled(stdout_is_terminal),
                show_hidden: cli.all,
                long_format: cli.long_format,
            },
            width: resolve_width(cli.width, terminal_width),
        }
    }
}

pub fn resolve_width(screen_width: Option<usize>, terminal_width: Option<usize>) -> usize {
    screen_width
        .or(terminal_width)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}
