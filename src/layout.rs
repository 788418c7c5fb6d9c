//! A minimal single-direction text layout.
//!
//! Positions are in EM units. Lines grow downwards.
//! There is no shaping, kerning or line breaking.

use alloc::vec::Vec;

use crate::{FontData, GlyphId};

/// Width of a space character in EM.
pub const SPACE_WIDTH: f32 = 0.333;

/// Width of a tab character in spaces.
pub const TAB_SIZE: f32 = 4.0;

/// Distance between baselines in EM.
pub const LINE_HEIGHT: f32 = 1.3;


/// A positioned glyph.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PositionedGlyph {
    /// Glyph ID. The missing glyph for unmapped characters.
    pub glyph_id: GlyphId,
    /// Sum of glyph advances since the start of the line.
    pub char_pos: f32,
    /// Sum of whitespace advances since the start of the line.
    pub word_pos: f32,
    /// Vertical offset of the line.
    pub line: f32,
    /// Horizontal center of the glyph bounding box.
    pub offset_x: f32,
    /// Vertical center of the glyph bounding box.
    pub offset_y: f32,
}

impl PositionedGlyph {
    /// Returns the pen position.
    #[inline]
    pub fn x(&self) -> f32 {
        self.char_pos + self.word_pos
    }
}


/// Lays out a single- or multi-line text.
///
/// Spaces, tabs and newlines do not produce glyphs.
/// Any other character is resolved via [`FontData::lookup`],
/// so unmapped characters are rendered with the missing glyph.
pub fn layout(font: &FontData, text: &str) -> Vec<PositionedGlyph> {
    let scale = 1.0 / f32::from(font.units_per_em());

    let mut glyphs = Vec::with_capacity(text.len());
    let mut char_pos = 0.0;
    let mut word_pos = 0.0;
    let mut line = 0.0;
    for c in text.chars() {
        match c {
            ' ' => word_pos += SPACE_WIDTH,
            '\t' => word_pos += SPACE_WIDTH * TAB_SIZE,
            '\n' => {
                line += LINE_HEIGHT;
                char_pos = 0.0;
                word_pos = 0.0;
            }
            _ => {
                let glyph = font.lookup(c);
                let bbox = glyph.bbox();
                // Not `Rect::width`, which can overflow `i16`.
                let offset_x = (f32::from(bbox.x_min) + f32::from(bbox.x_max)) / 2.0 * scale;
                let offset_y = (f32::from(bbox.y_min) + f32::from(bbox.y_max)) / 2.0 * scale;

                glyphs.push(PositionedGlyph {
                    glyph_id: glyph.glyph_id(),
                    char_pos,
                    word_pos,
                    line,
                    offset_x,
                    offset_y,
                });

                char_pos += f32::from(glyph.advance_width()) * scale;
            }
        }
    }

    glyphs
}
