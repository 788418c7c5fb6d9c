use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::directory::TableDirectory;
use crate::metrics::FontMetrics;
use crate::parser::{Stream, Tag};
use crate::tables::cmap::{self, CharacterMap};
use crate::tables::glyf::{self, GlyphOutline};
use crate::tables::loca;
use crate::{Error, GlyphId, Rect, Result};

/// Font parsing options.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ParseOptions {
    /// Maximum number of glyphs on a single composite path, including the requested one.
    ///
    /// 1 allows only simple glyphs. 0 is treated as 1.
    /// A component past the limit is reported as `Error::GlyphCycleDetected` with its ID.
    pub max_component_depth: u8,

    /// Decode all glyphs and not only the ones reachable from the character map.
    pub decode_all_glyphs: bool,
}

impl Default for ParseOptions {
    #[inline]
    fn default() -> Self {
        ParseOptions {
            max_component_depth: glyf::MAX_COMPONENT_DEPTH,
            decode_all_glyphs: false,
        }
    }
}


/// A parsed font.
///
/// Owns all the decoded data, so it doesn't borrow the font data.
#[derive(Clone, Debug)]
pub struct FontData {
    units_per_em: u16,
    ascender: i16,
    descender: i16,
    line_gap: i16,
    global_bbox: Rect,
    number_of_glyphs: u16,
    missing_glyph: GlyphOutline,
    glyphs: BTreeMap<GlyphId, GlyphOutline>,
    character_map: CharacterMap,
}

impl FontData {
    /// Parses a font with default options.
    ///
    /// Required tables: `head`, `maxp`, `loca`, `glyf`, `hhea`, `hmtx`, `cmap`.
    #[inline]
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::parse_with_options(data, ParseOptions::default())
    }

    /// Parses a font.
    pub fn parse_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let mut s = Stream::new(data);
        let directory = TableDirectory::parse(&mut s)?;
        let metrics = FontMetrics::parse(&mut s, &directory)?;

        let number_of_glyphs = metrics.number_of_glyphs();
        if number_of_glyphs == 0 {
            return Err(Error::NoMissingGlyph);
        }

        let glyf_offset = directory.offset(Tag::from_bytes(b"glyf"))?;
        s.seek(directory.offset(Tag::from_bytes(b"loca"))?);
        let loca = loca::Table::parse(
            &mut s, number_of_glyphs, metrics.index_to_location_format(), glyf_offset,
        )?;

        s.seek(directory.offset(Tag::from_bytes(b"cmap"))?);
        let mut character_map = cmap::parse(&mut s)?;
        character_map.retain(|c, id| {
            if id.0 < number_of_glyphs {
                true
            } else {
                warn!("U+{:04X} is mapped to a non-existing glyph {}. Skipped.", c, id);
                false
            }
        });

        let decoder = glyf::Decoder::new(loca, options.max_component_depth);
        let mut decode = |id: GlyphId| -> Result<GlyphOutline> {
            let mut outline = decoder.decode(&mut s, id)?;
            outline.advance_width = metrics.advance(id).unwrap_or(0);
            outline.left_side_bearing = metrics.side_bearing(id).unwrap_or(0);
            Ok(outline)
        };

        let missing_glyph = decode(GlyphId(0))?;

        let ids: Vec<GlyphId> = if options.decode_all_glyphs {
            (1..number_of_glyphs).map(GlyphId).collect()
        } else {
            character_map.glyph_ids().filter(|id| id.0 != 0).collect()
        };

        let mut glyphs = BTreeMap::new();
        for id in ids {
            glyphs.insert(id, decode(id)?);
        }

        debug!("Decoded {} out of {} glyphs.", glyphs.len() + 1, number_of_glyphs);

        Ok(FontData {
            units_per_em: metrics.units_per_em(),
            ascender: metrics.ascender(),
            descender: metrics.descender(),
            line_gap: metrics.line_gap(),
            global_bbox: metrics.global_bbox(),
            number_of_glyphs,
            missing_glyph,
            glyphs,
            character_map,
        })
    }

    /// Returns font's units per EM.
    ///
    /// Guarantee to be non-zero.
    #[inline]
    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Returns font's ascender.
    #[inline]
    pub fn ascender(&self) -> i16 {
        self.ascender
    }

    /// Returns font's descender.
    #[inline]
    pub fn descender(&self) -> i16 {
        self.descender
    }

    /// Returns font's line gap.
    #[inline]
    pub fn line_gap(&self) -> i16 {
        self.line_gap
    }

    /// Returns a bounding box that large enough to enclose any glyph from the font.
    #[inline]
    pub fn global_bbox(&self) -> Rect {
        self.global_bbox
    }

    /// Returns the total number of glyphs in the font.
    ///
    /// Not all of them are decoded. See [`ParseOptions::decode_all_glyphs`].
    #[inline]
    pub fn number_of_glyphs(&self) -> u16 {
        self.number_of_glyphs
    }

    /// Returns the character map.
    #[inline]
    pub fn character_map(&self) -> &CharacterMap {
        &self.character_map
    }

    /// Resolves a glyph ID for a character.
    ///
    /// Returns `None` for characters that are not mapped or mapped to the missing glyph.
    #[inline]
    pub fn glyph_index(&self, c: char) -> Option<GlyphId> {
        self.character_map.get(u32::from(c))
    }

    /// Returns a decoded glyph.
    #[inline]
    pub fn glyph(&self, glyph_id: GlyphId) -> Option<&GlyphOutline> {
        if glyph_id.0 == 0 {
            Some(&self.missing_glyph)
        } else {
            self.glyphs.get(&glyph_id)
        }
    }

    /// Returns a glyph for a character.
    ///
    /// Returns `None` for characters that are not mapped.
    #[inline]
    pub fn find(&self, c: char) -> Option<&GlyphOutline> {
        self.glyph_index(c).and_then(|id| self.glyph(id))
    }

    /// Returns a glyph for a character or the missing glyph.
    #[inline]
    pub fn lookup(&self, c: char) -> &GlyphOutline {
        self.find(c).unwrap_or(&self.missing_glyph)
    }

    /// Returns the missing glyph, which is always the glyph 0.
    #[inline]
    pub fn missing_glyph(&self) -> &GlyphOutline {
        &self.missing_glyph
    }

    /// Returns an iterator over all decoded glyphs, ordered by ID.
    #[inline]
    pub fn glyphs(&self) -> impl Iterator<Item = &GlyphOutline> + '_ {
        core::iter::once(&self.missing_glyph).chain(self.glyphs.values())
    }
}
