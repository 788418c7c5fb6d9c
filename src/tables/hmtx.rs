// https://docs.microsoft.com/en-us/typography/opentype/spec/hmtx

use crate::parser::{FromData, LazyArray, Stream, Tag};
use crate::{Error, GlyphId, Result};


#[derive(Clone, Copy)]
struct HorizontalMetrics {
    advance_width: u16,
    lsb: i16,
}

impl FromData for HorizontalMetrics {
    const SIZE: usize = 4;

    #[inline]
    fn parse(data: &[u8]) -> Self {
        HorizontalMetrics {
            advance_width: u16::parse(&data[0..2]),
            lsb: i16::parse(&data[2..4]),
        }
    }
}


/// A [Horizontal Metrics Table](https://docs.microsoft.com/en-us/typography/opentype/spec/hmtx).
#[derive(Clone, Copy)]
#[allow(missing_debug_implementations)]
pub struct Table<'a> {
    metrics: LazyArray<'a, HorizontalMetrics>,
    bearings: LazyArray<'a, i16>,
    number_of_glyphs: u16,
}

impl<'a> Table<'a> {
    /// Parses a table at the current stream position.
    ///
    /// `number_of_hmetrics` comes from `hhea` and `number_of_glyphs` from `maxp`.
    pub fn parse(
        s: &mut Stream<'a>,
        number_of_hmetrics: u16,
        number_of_glyphs: u16,
    ) -> Result<Self> {
        if number_of_hmetrics == 0 && number_of_glyphs != 0 {
            return Err(Error::MalformedTable(Tag::from_bytes(b"hmtx")));
        }

        let metrics = s.read_array::<HorizontalMetrics>(usize::from(number_of_hmetrics))?;

        // 'If the number_of_hmetrics is less than the total number of glyphs,
        // then that array is followed by an array for the left side bearing values
        // of the remaining glyphs.'
        let bearings_count = number_of_glyphs.saturating_sub(number_of_hmetrics);
        let bearings = s.read_array::<i16>(usize::from(bearings_count))?;

        Ok(Table {
            metrics,
            bearings,
            number_of_glyphs,
        })
    }

    /// Returns glyph's advance width.
    ///
    /// Returns `None` when glyph is not covered by the table.
    #[inline]
    pub fn advance(&self, glyph_id: GlyphId) -> Option<u16> {
        if glyph_id.0 >= self.number_of_glyphs {
            return None;
        }

        if let Some(metrics) = self.metrics.get(usize::from(glyph_id.0)) {
            Some(metrics.advance_width)
        } else {
            // 'As an optimization, the number of records can be less than the number of glyphs,
            // in which case the advance width value of the last record applies
            // to all remaining glyph IDs.'
            self.metrics.last().map(|m| m.advance_width)
        }
    }

    /// Returns glyph's left side bearing.
    #[inline]
    pub fn side_bearing(&self, glyph_id: GlyphId) -> Option<i16> {
        if glyph_id.0 >= self.number_of_glyphs {
            return None;
        }

        let index = usize::from(glyph_id.0);
        if let Some(metrics) = self.metrics.get(index) {
            Some(metrics.lsb)
        } else {
            self.bearings.get(index - self.metrics.len())
        }
    }
}
