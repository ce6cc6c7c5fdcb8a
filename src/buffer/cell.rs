//! Cell: The atomic unit of the grid.
//!
//! A cell is a plain value: one character and two [`AnsiColor`]s. Either
//! color may be [`AnsiColor::Default`], which defers the choice to the
//! owning buffer's current colors.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │  Cell                                     │
//! ├──────────────┬──────────────┬─────────────┤
//! │  character   │  foreground  │  background │
//! │  char        │  AnsiColor   │  AnsiColor  │
//! │  '\0' = none │  0 = default │  0 = default│
//! └──────────────┴──────────────┴─────────────┘
//! ```

/// The eight basic ANSI colors plus a `Default` sentinel.
///
/// The discriminants are 1-based so that the SGR code of a color is
/// `30 + n - 1` (foreground) or `40 + n - 1` (background).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnsiColor {
    /// Not a color: replaced by the buffer's current foreground or background.
    #[default]
    Default = 0,
    /// Black
    Black = 1,
    /// Red
    Red = 2,
    /// Green
    Green = 3,
    /// Yellow
    Yellow = 4,
    /// Blue
    Blue = 5,
    /// Magenta
    Magenta = 6,
    /// Cyan
    Cyan = 7,
    /// White
    White = 8,
}

impl AnsiColor {
    /// All concrete colors, in SGR order.
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Check if this is the `Default` sentinel.
    #[inline]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }

    /// Return `fallback` if this is `Default`, otherwise `self`.
    #[inline]
    #[must_use]
    pub const fn or(self, fallback: Self) -> Self {
        if self.is_default() {
            fallback
        } else {
            self
        }
    }

    /// SGR parameter selecting this color as foreground (`30..=37`).
    ///
    /// `Default` has no code of its own and maps to Black.
    #[inline]
    pub const fn foreground_code(self) -> u8 {
        30 + self.or(Self::Black) as u8 - 1
    }

    /// SGR parameter selecting this color as background (`40..=47`).
    #[inline]
    pub const fn background_code(self) -> u8 {
        40 + self.or(Self::Black) as u8 - 1
    }
}

/// A single grid cell.
///
/// Equality and hashing are structural over all three fields.
/// `Cell::default()` is [`Cell::ZERO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// The character to display. `'\0'` marks an empty, transparent cell.
    pub character: char,
    /// Foreground color.
    pub foreground: AnsiColor,
    /// Background color.
    pub background: AnsiColor,
}

impl Cell {
    /// The empty cell: NUL character, default colors.
    pub const ZERO: Self = Self::new('\0', AnsiColor::Default, AnsiColor::Default);

    /// Create a new cell.
    #[inline]
    pub const fn new(character: char, foreground: AnsiColor, background: AnsiColor) -> Self {
        Self {
            character,
            foreground,
            background,
        }
    }

    /// Create a cell with default colors.
    #[inline]
    pub const fn from_char(character: char) -> Self {
        Self::new(character, AnsiColor::Default, AnsiColor::Default)
    }

    /// Check if this cell is skipped when drawn onto another grid.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.character == '\0'
    }

    /// Set the character (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_character(mut self, character: char) -> Self {
        self.character = character;
        self
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_foreground(mut self, color: AnsiColor) -> Self {
        self.foreground = color;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_background(mut self, color: AnsiColor) -> Self {
        self.background = color;
        self
    }

    /// Replace `Default` colors with the given ones.
    ///
    /// Concrete colors are left untouched.
    #[inline]
    #[must_use]
    pub const fn override_defaults(self, foreground: AnsiColor, background: AnsiColor) -> Self {
        Self {
            character: self.character,
            foreground: self.foreground.or(foreground),
            background: self.background.or(background),
        }
    }
}

impl From<char> for Cell {
    #[inline]
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}
