/*!
A [character to glyph index mapping](https://docs.microsoft.com/en-us/typography/opentype/spec/cmap)
table implementation.

Only Unicode subtables in formats 4 and 12 are supported.
Unlike lazy lookups, the selected subtable is decoded eagerly into a [`CharacterMap`].
*/

use alloc::collections::{BTreeMap, BTreeSet};

use crate::parser::{FromData, Stream};
use crate::{Error, GlyphId, Result};

mod format4;
mod format12;

// https://docs.microsoft.com/en-us/typography/opentype/spec/name#platform-ids
const UNICODE_PLATFORM_ID: u16 = 0;
const WINDOWS_PLATFORM_ID: u16 = 3;

// https://docs.microsoft.com/en-us/typography/opentype/spec/name#windows-encoding-ids
const WINDOWS_UNICODE_BMP_ENCODING_ID: u16 = 1;
const WINDOWS_UNICODE_FULL_REPERTOIRE_ENCODING_ID: u16 = 10;


#[derive(Clone, Copy, Debug)]
struct EncodingRecord {
    platform_id: u16,
    encoding_id: u16,
    offset: u32,
}

impl FromData for EncodingRecord {
    const SIZE: usize = 8;

    #[inline]
    fn parse(data: &[u8]) -> Self {
        EncodingRecord {
            platform_id: u16::parse(&data[0..2]),
            encoding_id: u16::parse(&data[2..4]),
            offset: u32::parse(&data[4..8]),
        }
    }
}

impl EncodingRecord {
    /// Unicode 1.0, 1.1, 2.0+ BMP and 2.0+ full repertoire.
    #[inline]
    fn is_supported_unicode(&self) -> bool {
        self.platform_id == UNICODE_PLATFORM_ID && matches!(self.encoding_id, 0 | 1 | 3 | 4)
    }
}


/// A decoded mapping from Unicode codepoints to glyph IDs.
///
/// Codepoints that map to the missing glyph are not stored.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct CharacterMap {
    map: BTreeMap<u32, GlyphId>,
}

impl CharacterMap {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        CharacterMap::default()
    }

    /// Adds a mapping.
    ///
    /// Mappings to the glyph 0 and the `0xFFFF` codepoint are ignored.
    /// An existing mapping is not overwritten.
    pub fn insert(&mut self, code_point: u32, glyph_id: GlyphId) {
        if glyph_id.0 == 0 || code_point == 0xFFFF {
            return;
        }

        self.map.entry(code_point).or_insert(glyph_id);
    }

    /// Returns a glyph ID for a codepoint.
    #[inline]
    pub fn get(&self, code_point: u32) -> Option<GlyphId> {
        self.map.get(&code_point).copied()
    }

    /// Returns the number of mapped codepoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Checks that the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over all mappings, ordered by codepoint.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (u32, GlyphId)> + '_ {
        self.map.iter().map(|(&c, &id)| (c, id))
    }

    /// Returns all glyph IDs reachable from the map, in ascending order.
    ///
    /// The missing glyph is always included.
    pub fn glyph_ids(&self) -> impl Iterator<Item = GlyphId> {
        let mut ids: BTreeSet<GlyphId> = self.map.values().copied().collect();
        ids.insert(GlyphId(0));
        ids.into_iter()
    }

    /// Removes all mappings that do not satisfy the predicate.
    pub(crate) fn retain(&mut self, mut f: impl FnMut(u32, GlyphId) -> bool) {
        let map = core::mem::take(&mut self.map);
        self.map = map.into_iter().filter(|&(c, id)| f(c, id)).collect();
    }
}


/// Parses a `cmap` table at the current stream position.
///
/// Selects the best Unicode subtable and decodes it.
pub fn parse(s: &mut Stream) -> Result<CharacterMap> {
    let table_offset = s.offset();
    s.skip::<u16>(); // version
    let records = s.read_array16::<EncodingRecord>()?;

    let record = select_subtable(records.into_iter()).ok_or(Error::UnsupportedCmapFormat)?;
    if record.platform_id == WINDOWS_PLATFORM_ID
        && record.encoding_id != WINDOWS_UNICODE_BMP_ENCODING_ID
        && record.encoding_id != WINDOWS_UNICODE_FULL_REPERTOIRE_ENCODING_ID
    {
        warn!("No Unicode character map. Using a Windows one with encoding {}.",
              record.encoding_id);
    }

    let subtable_offset = table_offset.checked_add(record.offset as usize)
        .ok_or(Error::OutOfBounds(table_offset))?;
    s.seek(subtable_offset);
    let format: u16 = s.read()?;

    debug!("Selected cmap subtable: platform {}, encoding {}, format {}.",
           record.platform_id, record.encoding_id, format);

    let mut map = CharacterMap::new();
    match format {
        4 => format4::parse(s, &mut map)?,
        12 => format12::parse(s, &mut map)?,
        _ => return Err(Error::UnsupportedCmapFormat),
    }

    Ok(map)
}

/// Prefers a Unicode platform subtable with the highest supported encoding ID,
/// then the last Windows platform one.
fn select_subtable(records: impl Iterator<Item = EncodingRecord>) -> Option<EncodingRecord> {
    let mut unicode: Option<EncodingRecord> = None;
    let mut windows: Option<EncodingRecord> = None;
    for record in records {
        if record.is_supported_unicode() {
            if unicode.map_or(true, |r| record.encoding_id > r.encoding_id) {
                unicode = Some(record);
            }
        } else if record.platform_id == WINDOWS_PLATFORM_ID {
            windows = Some(record);
        }
    }

    unicode.or(windows)
}
