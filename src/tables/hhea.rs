//! A [Horizontal Header Table](
//! https://docs.microsoft.com/en-us/typography/opentype/spec/hhea) implementation.

use crate::parser::{FWord, Stream};
use crate::Result;

/// A [Horizontal Header Table](https://docs.microsoft.com/en-us/typography/opentype/spec/hhea).
#[derive(Clone, Copy, Debug)]
pub struct Table {
    /// Face ascender.
    pub ascender: i16,
    /// Face descender.
    pub descender: i16,
    /// Face line gap.
    pub line_gap: i16,
    /// Maximum advance width.
    pub advance_width_max: u16,
    /// Number of long metrics in the `hmtx` table.
    pub number_of_metrics: u16,
}

impl Table {
    /// Parses a table at the current stream position.
    pub fn parse(s: &mut Stream) -> Result<Self> {
        s.skip::<u32>(); // version
        let ascender: FWord = s.read()?;
        let descender: FWord = s.read()?;
        let line_gap: FWord = s.read()?;
        let advance_width_max: u16 = s.read()?;
        // minLeftSideBearing, minRightSideBearing, xMaxExtent, caretSlopeRise,
        // caretSlopeRun, caretOffset, 4 reserved, metricDataFormat
        s.advance(22);
        let number_of_metrics: u16 = s.read()?;

        Ok(Table {
            ascender,
            descender,
            line_gap,
            advance_width_max,
            number_of_metrics,
        })
    }
}
