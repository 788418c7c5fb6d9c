// https://docs.microsoft.com/en-us/typography/opentype/spec/loca

use core::ops::Range;

use crate::parser::{LazyArray, Stream};
use crate::tables::head::IndexToLocationFormat;
use crate::{Error, GlyphId, Result};

#[derive(Clone, Copy)]
enum Offsets<'a> {
    Short(LazyArray<'a, u16>),
    Long(LazyArray<'a, u32>),
}

/// An [Index to Location Table](https://docs.microsoft.com/en-us/typography/opentype/spec/loca).
///
/// Resolves glyph IDs into absolute `glyf` record ranges.
#[derive(Clone, Copy)]
#[allow(missing_debug_implementations)]
pub struct Table<'a> {
    offsets: Offsets<'a>,
    glyf_offset: usize,
}

impl<'a> Table<'a> {
    /// Parses a table at the current stream position.
    ///
    /// `glyf_offset` is an absolute offset of the `glyf` table.
    pub fn parse(
        s: &mut Stream<'a>,
        number_of_glyphs: u16,
        format: IndexToLocationFormat,
        glyf_offset: usize,
    ) -> Result<Self> {
        // The number of ranges is `maxp.numGlyphs + 1`.
        let total = usize::from(number_of_glyphs) + 1;

        let offsets = match format {
            IndexToLocationFormat::Short => Offsets::Short(s.read_array::<u16>(total)?),
            IndexToLocationFormat::Long => Offsets::Long(s.read_array::<u32>(total)?),
        };

        Ok(Table {
            offsets,
            glyf_offset,
        })
    }

    /// Returns the number of glyphs covered by the table.
    #[inline]
    pub fn number_of_glyphs(&self) -> u16 {
        let len = match self.offsets {
            Offsets::Short(ref array) => array.len(),
            Offsets::Long(ref array) => array.len(),
        };

        len.saturating_sub(1) as u16
    }

    /// Returns an absolute range of the glyph's record.
    ///
    /// An empty range indicates a glyph without an outline.
    pub fn glyph_range(&self, glyph_id: GlyphId) -> Result<Range<usize>> {
        let index = usize::from(glyph_id.0);
        let range = match self.offsets {
            Offsets::Short(ref array) => {
                // 'The actual local offset divided by 2 is stored.'
                let start = array.get(index).ok_or(Error::UnknownGlyph(glyph_id))?;
                let end = array.get(index + 1).ok_or(Error::UnknownGlyph(glyph_id))?;
                usize::from(start) * 2 .. usize::from(end) * 2
            }
            Offsets::Long(ref array) => {
                let start = array.get(index).ok_or(Error::UnknownGlyph(glyph_id))?;
                let end = array.get(index + 1).ok_or(Error::UnknownGlyph(glyph_id))?;
                start as usize .. end as usize
            }
        };

        // 'The offsets must be in ascending order.'
        if range.start > range.end {
            return Err(Error::MalformedGlyph(glyph_id));
        }

        let start = self.glyf_offset.checked_add(range.start)
            .ok_or(Error::OutOfBounds(self.glyf_offset))?;
        let end = self.glyf_offset.checked_add(range.end)
            .ok_or(Error::OutOfBounds(self.glyf_offset))?;

        Ok(start..end)
    }
}
