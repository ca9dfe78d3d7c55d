use std::env;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;

use lister::cli::Cli;
use lister::{
    print_entries_grid, print_entries_long, read_entries, Color, ColorizedPrinter, Config,
    ListingError, SystemOwners,
};

fn main() -> ExitCode {
    let config = Config::from_cli(Cli::parse());

    let stdout = io::stdout();
    let mut printer = ColorizedPrinter::new(
        BufWriter::new(stdout.lock()),
        Color::default(),
        config.options.show_color,
    );

    match run(&config, &mut printer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = printer.flush();
            let stderr = io::stderr();
            let mut errors =
                ColorizedPrinter::new(stderr.lock(), Color::default(), config.options.show_color);
            let _ = errors.print_error("ls", &err);
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(config: &Config, printer: &mut ColorizedPrinter<W>) -> Result<(), ListingError> {
    let directory = match &config.directory {
        Some(dir) => dir.clone(),
        None => env::current_dir().map_err(ListingError::CurrentDir)?,
    };

    let entries = read_entries(&directory)?;

    if config.options.long_format {
        let owners = SystemOwners::new();
        print_entries_long(printer, &entries, &config.options, Local::now(), &owners)?;
    } else {
        print_entries_grid(printer, &entries, &config.options, config.width)?;
    }

    printer.flush()?;
    Ok(())
}
