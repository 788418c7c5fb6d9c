// https://docs.microsoft.com/en-us/typography/opentype/spec/cmap#format-4-segment-mapping-to-delta-values

use crate::parser::Stream;
use crate::{GlyphId, Result};
use super::CharacterMap;

/// Decodes a format 4 subtable into `map`.
///
/// The stream must be positioned right after the format field.
pub fn parse(s: &mut Stream, map: &mut CharacterMap) -> Result<()> {
    s.skip::<u16>(); // length
    s.skip::<u16>(); // language
    let seg_count_x2: u16 = s.read()?;
    let seg_count = usize::from(seg_count_x2 / 2);
    s.advance(6); // searchRange + entrySelector + rangeShift

    let end_codes = s.read_array::<u16>(seg_count)?;
    s.skip::<u16>(); // reservedPad
    let start_codes = s.read_array::<u16>(seg_count)?;
    let id_deltas = s.read_array::<u16>(seg_count)?;
    // Indirect glyph IDs are addressed relative to the offset's own position.
    let id_range_offset_pos = s.offset();
    let id_range_offsets = s.read_array::<u16>(seg_count)?;

    let segments = start_codes.into_iter()
        .zip(end_codes)
        .zip(id_deltas.into_iter().zip(id_range_offsets))
        .enumerate();

    for (index, ((start, end), (id_delta, id_range_offset))) in segments {
        // The last segment must be 0xFFFF..=0xFFFF and maps nothing.
        if start == 0xFFFF {
            break;
        }

        // u32 prevents overflow when `end` is 0xFFFF.
        for code_point in u32::from(start)..=u32::from(end) {
            let glyph_id = if id_range_offset == 0 {
                (code_point as u16).wrapping_add(id_delta)
            } else {
                let pos = id_range_offset_pos
                    + index * 2
                    + usize::from(id_range_offset)
                    + (code_point - u32::from(start)) as usize * 2;
                let glyph_id: u16 = Stream::read_at(s.data(), pos)?;

                // 0 indicates missing glyph.
                if glyph_id == 0 {
                    continue;
                }

                glyph_id.wrapping_add(id_delta)
            };

            map.insert(code_point, GlyphId(glyph_id));
        }
    }

    Ok(())
}
