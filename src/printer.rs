use std::error::Error;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use crate::color::{colorize, Color, Foreground};

/// Writes text through an active `Color`.
///
/// When disabled, text is written verbatim and colors are ignored.
pub struct ColorizedPrinter<W: Write> {
    out: W,
    color: Color,
    enabled: bool,
}

impl<W: Write> ColorizedPrinter<W> {
    pub fn new(out: W, color: Color, enabled: bool) -> Self {
        ColorizedPrinter { out, color, enabled }
    }

    pub fn plain(out: W) -> Self {
        ColorizedPrinter::new(out, Color::default(), false)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        let color = self.color;
        self.print_color(color, text)
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        self.print(text)?;
        self.out.write_all(b"\n")
    }

    pub fn print_color(&mut self, color: Color, text: &str) -> io::Result<()> {
        if self.enabled {
            self.out.write_all(colorize(text, color).as_bytes())
        } else {
            self.out.write_all(text.as_bytes())
        }
    }

    pub fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)
    }

    /// Makes `color` active until the returned scope is dropped.
    pub fn with_color(&mut self, color: Color) -> ColorScope<'_, W> {
        let previous = self.color;
        self.color = color;
        ColorScope { printer: self, previous }
    }

    /// Reports `context: err` in red, on its own line.
    pub fn print_error(&mut self, context: &str, err: &dyn Error) -> io::Result<()> {
        let mut scope = self.with_color(Color::foreground(Foreground::Red));
        scope.println(&format!("{}: {}", context, err))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// A printer borrowed with a temporary color. The prior color comes back on drop.
pub struct ColorScope<'a, W: Write> {
    printer: &'a mut ColorizedPrinter<W>,
    previous: Color,
}

impl<W: Write> Deref for ColorScope<'_, W> {
    type Target = ColorizedPrinter<W>;

    fn deref(&self) -> &Self::Target {
        &*self.printer
    }
}

impl<W: Write> DerefMut for ColorScope<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.printer
    }
}

impl<W: Write> Drop for ColorScope<'_, W> {
    fn drop(&mut self) {
        self.printer.color = self.previous;
    }
}
