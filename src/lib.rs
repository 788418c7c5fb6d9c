/*!
A safe TrueType font parser that decodes glyph outlines, horizontal metrics
and a Unicode character map into an owned, in-memory model.

## Features

- Decodes simple and composite `glyf` outlines, including component transforms.
- Supports `cmap` subtables in formats 4 and 12.
- Reconstructs implied on-curve points, so contours can be drawn
  as a sequence of quadratic curves.
- Zero unsafe.
- `no_std` compatible. Requires `alloc`.
- Stateless. Each parse owns its own cursor, so fonts can be parsed in parallel.

## Safety

- The library must not panic. Any panic considered as a critical bug and should be reported.
- The library forbids the unsafe code.
- All reads are bounds-checked.
- Composite glyph recursion has a depth limit and a cycle check.

## Error handling

Unlike a pull parser, a font is either parsed completely or not at all.
Any structural problem aborts the whole parse and is reported as an [`Error`].
Character lookups on a parsed font never fail: unmapped characters are
reported as `None` or resolved to the missing glyph.

Some methods may print warnings, when the `logging` feature is enabled.
*/

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use core::fmt;

use parser::FromData;

#[cfg(feature = "logging")]
macro_rules! warn {
    ($($arg:tt)+) => (
        log::log!(log::Level::Warn, $($arg)+);
    )
}

#[cfg(not(feature = "logging"))]
macro_rules! warn {
    ($($arg:tt)+) => () // do nothing
}

#[cfg(feature = "logging")]
macro_rules! debug {
    ($($arg:tt)+) => (
        log::log!(log::Level::Debug, $($arg)+);
    )
}

#[cfg(not(feature = "logging"))]
macro_rules! debug {
    ($($arg:tt)+) => () // do nothing
}

mod contour;
mod directory;
mod font;
mod metrics;
pub mod layout;
pub mod parser;
pub mod tables;

#[cfg(test)]
mod writer;

pub use contour::{reconstruct_contour, Point};
pub use directory::{TableDirectory, TableRecord, REQUIRED_TABLES};
pub use font::{FontData, ParseOptions};
pub use metrics::FontMetrics;
pub use parser::{F2Dot14, FWord, Tag};
pub use tables::cmap::CharacterMap;
pub use tables::glyf::{GlyphOutline, OutlinePoint};


/// A type-safe wrapper for glyph ID.
#[repr(transparent)]
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Default, Debug, Hash)]
pub struct GlyphId(pub u16);

impl FromData for GlyphId {
    const SIZE: usize = 2;

    #[inline]
    fn parse(data: &[u8]) -> Self {
        GlyphId(u16::parse(data))
    }
}

impl fmt::Display for GlyphId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


/// A rectangle.
///
/// Doesn't guarantee that `x_min` <= `x_max` and/or `y_min` <= `y_max`.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[allow(missing_docs)]
pub struct Rect {
    pub x_min: i16,
    pub y_min: i16,
    pub x_max: i16,
    pub y_max: i16,
}

impl Rect {
    /// Returns rect's width.
    #[inline]
    pub fn width(&self) -> i16 {
        self.x_max.wrapping_sub(self.x_min)
    }

    /// Returns rect's height.
    #[inline]
    pub fn height(&self) -> i16 {
        self.y_max.wrapping_sub(self.y_min)
    }
}


/// A trait for glyph outline construction.
///
/// TrueType outlines are made only of quadratic curves,
/// so there is no `line_to` or `curve_to`. Straight segments are emitted
/// as quadratic curves with a control point lying on the segment.
pub trait OutlineBuilder {
    /// Appends a MoveTo segment.
    ///
    /// Start of a contour.
    fn move_to(&mut self, x: f32, y: f32);

    /// Appends a QuadTo segment.
    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32);

    /// Appends a ClosePath segment.
    ///
    /// End of a contour.
    fn close(&mut self);
}


/// A list of font parsing errors.
///
/// All errors are terminal: a font is either parsed completely or not at all.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Error {
    /// One of the `head`, `maxp`, `loca`, `glyf`, `hhea`, `hmtx` or `cmap` tables is missing.
    MissingRequiredTable(Tag),

    /// `indexToLocFormat` in the `head` table is neither 0 nor 1.
    UnsupportedLocaFormat(i16),

    /// The `cmap` table has no suitable Unicode subtable,
    /// or the selected subtable is not in format 4 or 12.
    UnsupportedCmapFormat,

    /// A composite glyph component is positioned by matching points,
    /// which is not supported.
    UnsupportedComponentArgs(GlyphId),

    /// A composite glyph references itself, directly or indirectly,
    /// or is nested too deep.
    GlyphCycleDetected(GlyphId),

    /// An attempt to read past the end of data at the specified offset.
    OutOfBounds(usize),

    /// The font doesn't have a glyph with ID 0.
    NoMissingGlyph,

    /// A table has an invalid value.
    MalformedTable(Tag),

    /// A glyph has invalid data.
    MalformedGlyph(GlyphId),

    /// A glyph ID is not covered by the `loca` table.
    UnknownGlyph(GlyphId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MissingRequiredTable(tag) => {
                write!(f, "the font doesn't have a required '{}' table", tag)
            }
            Error::UnsupportedLocaFormat(format) => {
                write!(f, "'{}' is not a valid glyph index to location format", format)
            }
            Error::UnsupportedCmapFormat => {
                write!(f, "the font doesn't have a supported character map")
            }
            Error::UnsupportedComponentArgs(id) => {
                write!(f, "glyph {} has components positioned by points, \
                           which is not supported", id)
            }
            Error::GlyphCycleDetected(id) => {
                write!(f, "glyph {} has recursive or too deeply nested components", id)
            }
            Error::OutOfBounds(offset) => {
                write!(f, "an attempt to read data past the end at offset {}", offset)
            }
            Error::NoMissingGlyph => {
                write!(f, "the font doesn't have a missing glyph")
            }
            Error::MalformedTable(tag) => {
                write!(f, "the '{}' table is malformed", tag)
            }
            Error::MalformedGlyph(id) => {
                write!(f, "glyph {} is malformed", id)
            }
            Error::UnknownGlyph(id) => {
                write!(f, "glyph {} is not present in the font", id)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A type alias for `Result<T, ttf_outline::Error>`.
pub type Result<T> = core::result::Result<T, Error>;
