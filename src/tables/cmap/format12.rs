// https://docs.microsoft.com/en-us/typography/opentype/spec/cmap#format-12-segmented-coverage

use core::convert::TryFrom;

use crate::parser::{FromData, Stream};
use crate::{Error, GlyphId, Result};
use super::CharacterMap;

/// The last valid Unicode codepoint.
const MAX_CODE_POINT: u32 = 0x10FFFF;

#[derive(Clone, Copy)]
struct SequentialMapGroup {
    start_char_code: u32,
    end_char_code: u32,
    start_glyph_id: u32,
}

impl FromData for SequentialMapGroup {
    const SIZE: usize = 12;

    #[inline]
    fn parse(data: &[u8]) -> Self {
        SequentialMapGroup {
            start_char_code: u32::parse(&data[0..4]),
            end_char_code: u32::parse(&data[4..8]),
            start_glyph_id: u32::parse(&data[8..12]),
        }
    }
}

/// Decodes a format 12 subtable into `map`.
///
/// The stream must be positioned right after the format field.
pub fn parse(s: &mut Stream, map: &mut CharacterMap) -> Result<()> {
    s.skip::<u16>(); // reserved
    s.skip::<u32>(); // length
    s.skip::<u32>(); // language
    let count: u32 = s.read()?;
    let count = usize::try_from(count).map_err(|_| Error::OutOfBounds(s.offset()))?;
    let groups = s.read_array::<SequentialMapGroup>(count)?;

    for group in groups {
        let end = core::cmp::min(group.end_char_code, MAX_CODE_POINT);
        for code_point in group.start_char_code..=end {
            let id = match group.start_glyph_id.checked_add(code_point - group.start_char_code) {
                Some(id) => id,
                None => break,
            };

            // Glyph IDs are sequential, so the rest of the group is out of range too.
            if id > u32::from(core::u16::MAX) {
                break;
            }

            map.insert(code_point, GlyphId(id as u16));
        }
    }

    Ok(())
}
