//! ANSI color model and SGR rendering.
//!
//! A `Color` is a plain value: foreground, background and three style flags.
//! Modifier changes return a new value instead of mutating in place.

use std::fmt;
use std::ops::BitOr;

use crate::error::ColorError;

const RESET: &str = "\x1B[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Foreground {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Purple = 35,
    Cyan = 36,
    White = 37,
    #[default]
    Default = 39,
}

impl Foreground {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Background {
    Black = 40,
    Red = 41,
    Green = 42,
    Yellow = 43,
    Blue = 44,
    Purple = 45,
    Cyan = 46,
    White = 47,
    #[default]
    Default = 49,
}

impl Background {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Bitmask of text modifiers. Flags combine with `|`.
///
/// `DEFAULT` is the empty mask: a valid initial value for `Color::new`,
/// but rejected by the add/clear operations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextModifiers(u32);

impl TextModifiers {
    pub const DEFAULT: TextModifiers = TextModifiers(0);
    pub const ITALIC: TextModifiers = TextModifiers(1 << 1);
    pub const BOLD: TextModifiers = TextModifiers(1 << 2);
    pub const UNDERLINE: TextModifiers = TextModifiers(1 << 3);

    pub fn contains(self, other: TextModifiers) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_default(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for TextModifiers {
    type Output = TextModifiers;

    fn bitor(self, rhs: TextModifiers) -> TextModifiers {
        TextModifiers(self.0 | rhs.0)
    }
}

impl fmt::Debug for TextModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default() {
            return write!(f, "DefaultText");
        }
        let names: Vec<&str> = [
            (TextModifiers::ITALIC, "Italic"),
            (TextModifiers::BOLD, "Bold"),
            (TextModifiers::UNDERLINE, "Underline"),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| *name)
        .collect();
        write!(f, "{}", names.join("|"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub foreground: Foreground,
    pub background: Background,
    italic: bool,
    bold: bool,
    underline: bool,
}

impl Color {
    pub fn new(foreground: Foreground, background: Background, modifiers: TextModifiers) -> Self {
        Color {
            foreground,
            background,
            italic: modifiers.contains(TextModifiers::ITALIC),
            bold: modifiers.contains(TextModifiers::BOLD),
            underline: modifiers.contains(TextModifiers::UNDERLINE),
        }
    }

    pub fn foreground(foreground: Foreground) -> Self {
        Color::new(foreground, Background::Default, TextModifiers::DEFAULT)
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_underline(&self) -> bool {
        self.underline
    }

    /// Returns a copy with every flag named in `modifiers` set.
    pub fn with_modifiers_added(self, modifiers: TextModifiers) -> Result<Self, ColorError> {
        self.with_modifiers(modifiers, true)
    }

    /// Returns a copy with every flag named in `modifiers` cleared.
    pub fn with_modifiers_cleared(self, modifiers: TextModifiers) -> Result<Self, ColorError> {
        self.with_modifiers(modifiers, false)
    }

    pub fn without_modifiers(self) -> Self {
        Color {
            italic: false,
            bold: false,
            underline: false,
            ..self
        }
    }

    fn with_modifiers(mut self, modifiers: TextModifiers, value: bool) -> Result<Self, ColorError> {
        if modifiers.is_default() {
            return Err(ColorError::InvalidModifier(modifiers));
        }
        if modifiers.contains(TextModifiers::ITALIC) {
            self.italic = value;
        }
        if modifiers.contains(TextModifiers::BOLD) {
            self.bold = value;
        }
        if modifiers.contains(TextModifiers::UNDERLINE) {
            self.underline = value;
        }
        Ok(self)
    }

    pub fn paint(&self, text: &str) -> String {
        colorize(text, *self)
    }
}

/// Wraps `text` in the SGR sequence for `color`, followed by a reset.
pub fn colorize(text: &str, color: Color) -> String {
    let bold = if color.bold { 1 } else { 22 };
    let italic = if color.italic { 3 } else { 23 };
    let underline = if color.underline { 4 } else { 24 };

    format!(
        "\x1B[{};{};{};{};{}m{}{}",
        color.foreground.code(),
        color.background.code(),
        bold,
        italic,
        underline,
        text,
        RESET
    )
}
