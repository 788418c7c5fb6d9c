use crate::directory::TableDirectory;
use crate::parser::{Stream, Tag};
use crate::tables::{head, hhea, hmtx, maxp};
use crate::tables::head::IndexToLocationFormat;
use crate::{GlyphId, Rect, Result};

/// Font-wide and per-glyph horizontal metrics.
///
/// Collected from the `head`, `maxp`, `hhea` and `hmtx` tables.
#[derive(Clone, Copy)]
#[allow(missing_debug_implementations)]
pub struct FontMetrics<'a> {
    head: head::Table,
    hhea: hhea::Table,
    number_of_glyphs: u16,
    hmtx: hmtx::Table<'a>,
}

impl<'a> FontMetrics<'a> {
    /// Parses metrics tables using the provided stream.
    ///
    /// `s` must be a stream over the whole font data. The stream position is not preserved.
    pub fn parse(s: &mut Stream<'a>, directory: &TableDirectory) -> Result<Self> {
        s.seek(directory.offset(Tag::from_bytes(b"head"))?);
        let head = head::Table::parse(s)?;

        s.seek(directory.offset(Tag::from_bytes(b"maxp"))?);
        let number_of_glyphs = maxp::parse(s)?;

        s.seek(directory.offset(Tag::from_bytes(b"hhea"))?);
        let hhea = hhea::Table::parse(s)?;

        s.seek(directory.offset(Tag::from_bytes(b"hmtx"))?);
        let hmtx = hmtx::Table::parse(s, hhea.number_of_metrics, number_of_glyphs)?;

        Ok(FontMetrics {
            head,
            hhea,
            number_of_glyphs,
            hmtx,
        })
    }

    /// Returns font's units per EM.
    ///
    /// Guarantee to be non-zero.
    #[inline]
    pub fn units_per_em(&self) -> u16 {
        self.head.units_per_em
    }

    /// Returns the `loca` entry format.
    #[inline]
    pub fn index_to_location_format(&self) -> IndexToLocationFormat {
        self.head.index_to_location_format
    }

    /// Returns a bounding box that large enough to enclose any glyph.
    #[inline]
    pub fn global_bbox(&self) -> Rect {
        self.head.global_bbox
    }

    /// Returns the total number of glyphs.
    #[inline]
    pub fn number_of_glyphs(&self) -> u16 {
        self.number_of_glyphs
    }

    /// Returns font's ascender.
    #[inline]
    pub fn ascender(&self) -> i16 {
        self.hhea.ascender
    }

    /// Returns font's descender.
    #[inline]
    pub fn descender(&self) -> i16 {
        self.hhea.descender
    }

    /// Returns font's line gap.
    #[inline]
    pub fn line_gap(&self) -> i16 {
        self.hhea.line_gap
    }

    /// Returns glyph's advance width.
    #[inline]
    pub fn advance(&self, glyph_id: GlyphId) -> Option<u16> {
        self.hmtx.advance(glyph_id)
    }

    /// Returns glyph's left side bearing.
    #[inline]
    pub fn side_bearing(&self, glyph_id: GlyphId) -> Option<i16> {
        self.hmtx.side_bearing(glyph_id)
    }
}
