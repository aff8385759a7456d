//! ANSI SGR styling for terminal text.
//!
//! A [`Style`] is an ordered list of [`AnsiCode`]s. [`Style::paint`] wraps text
//! in the matching escape sequence and a trailing reset:
//!
//! ```
//! use fieldbind::style::Style;
//!
//! assert_eq!(Style::BOLD.paint("Port"), "\x1b[1mPort\x1b[0m");
//! assert_eq!(Style::fg256(208).paint("!"), "\x1b[38;5;208m!\x1b[0m");
//! ```

use std::borrow::Cow;
use std::fmt;

/// One Select Graphic Rendition parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnsiCode(pub u8);

impl AnsiCode {
    pub const RESET: Self = Self(0);
    pub const BOLD: Self = Self(1);
    pub const FAINT: Self = Self(2);
    pub const ITALIC: Self = Self(3);
    pub const UNDERLINE: Self = Self(4);
    pub const BLINK_SLOW: Self = Self(5);
    pub const BLINK_RAPID: Self = Self(6);
    pub const REVERSE_VIDEO: Self = Self(7);
    pub const CONCEALED: Self = Self(8);
    pub const CROSSED_OUT: Self = Self(9);

    pub const FG_BLACK: Self = Self(30);
    pub const FG_RED: Self = Self(31);
    pub const FG_GREEN: Self = Self(32);
    pub const FG_YELLOW: Self = Self(33);
    pub const FG_BLUE: Self = Self(34);
    pub const FG_MAGENTA: Self = Self(35);
    pub const FG_CYAN: Self = Self(36);
    pub const FG_WHITE: Self = Self(37);

    pub const BG_BLACK: Self = Self(40);
    pub const BG_RED: Self = Self(41);
    pub const BG_GREEN: Self = Self(42);
    pub const BG_YELLOW: Self = Self(43);
    pub const BG_BLUE: Self = Self(44);
    pub const BG_MAGENTA: Self = Self(45);
    pub const BG_CYAN: Self = Self(46);
    pub const BG_WHITE: Self = Self(47);

    /// Extended foreground; followed by `5;n` or `2;r;g;b`.
    pub const FG_EXTENDED: Self = Self(38);
    /// Extended background; followed by `5;n` or `2;r;g;b`.
    pub const BG_EXTENDED: Self = Self(48);
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered combination of [`AnsiCode`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Style(Cow<'static, [AnsiCode]>);

impl Style {
    pub const PLAIN: Self = Self::from_static(&[]);
    pub const BOLD: Self = Self::from_static(&[AnsiCode::BOLD]);
    pub const FAINT: Self = Self::from_static(&[AnsiCode::FAINT]);
    pub const UNDERLINE: Self = Self::from_static(&[AnsiCode::UNDERLINE]);

    pub const BLACK: Self = Self::from_static(&[AnsiCode::FG_BLACK]);
    pub const RED: Self = Self::from_static(&[AnsiCode::FG_RED]);
    pub const GREEN: Self = Self::from_static(&[AnsiCode::FG_GREEN]);
    pub const YELLOW: Self = Self::from_static(&[AnsiCode::FG_YELLOW]);
    pub const BLUE: Self = Self::from_static(&[AnsiCode::FG_BLUE]);
    pub const MAGENTA: Self = Self::from_static(&[AnsiCode::FG_MAGENTA]);
    pub const CYAN: Self = Self::from_static(&[AnsiCode::FG_CYAN]);
    pub const WHITE: Self = Self::from_static(&[AnsiCode::FG_WHITE]);

    pub const fn from_static(codes: &'static [AnsiCode]) -> Self {
        Self(Cow::Borrowed(codes))
    }

    pub fn new(codes: impl Into<Vec<AnsiCode>>) -> Self {
        Self(Cow::Owned(codes.into()))
    }

    /// A 256-colour palette foreground. Codes outside `0..=255` fall back to black.
    pub fn fg256(code: i32) -> Self {
        let code = u8::try_from(code).unwrap_or(0);
        Self::new([AnsiCode::FG_EXTENDED, AnsiCode(5), AnsiCode(code)])
    }

    /// A 256-colour palette background. Codes outside `0..=255` fall back to white (7).
    pub fn bg256(code: i32) -> Self {
        let code = u8::try_from(code).unwrap_or(7);
        Self::new([AnsiCode::BG_EXTENDED, AnsiCode(5), AnsiCode(code)])
    }

    /// A 24-bit foreground. Any component outside `0..=255` yields black.
    pub fn fg_rgb(r: i32, g: i32, b: i32) -> Self {
        let (r, g, b) = rgb(r, g, b).unwrap_or((0, 0, 0));
        Self::new([
            AnsiCode::FG_EXTENDED,
            AnsiCode(2),
            AnsiCode(r),
            AnsiCode(g),
            AnsiCode(b),
        ])
    }

    /// A 24-bit background. Any component outside `0..=255` yields white.
    pub fn bg_rgb(r: i32, g: i32, b: i32) -> Self {
        let (r, g, b) = rgb(r, g, b).unwrap_or((255, 255, 255));
        Self::new([
            AnsiCode::BG_EXTENDED,
            AnsiCode(2),
            AnsiCode(r),
            AnsiCode(g),
            AnsiCode(b),
        ])
    }

    /// This style followed by the codes of `other`.
    pub fn with(&self, other: &Style) -> Self {
        let mut codes = self.0.to_vec();
        codes.extend_from_slice(&other.0);
        Self::new(codes)
    }

    pub fn codes(&self) -> &[AnsiCode] {
        &self.0
    }

    /// Wrap `text` in this style's escape sequence and a reset.
    pub fn paint(&self, text: impl fmt::Display) -> String {
        let sequence: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        format!("\x1b[{}m{text}\x1b[{}m", sequence.join(";"), AnsiCode::RESET)
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::PLAIN
    }
}

fn rgb(r: i32, g: i32, b: i32) -> Option<(u8, u8, u8)> {
    Some((u8::try_from(r).ok()?, u8::try_from(g).ok()?, u8::try_from(b).ok()?))
}
