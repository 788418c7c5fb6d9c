//! A [Font Header Table](
//! https://docs.microsoft.com/en-us/typography/opentype/spec/head) implementation.

use crate::parser::{FWord, Stream, Tag};
use crate::{Error, Rect, Result};

/// An index format used by the [Index to Location Table](
/// https://docs.microsoft.com/en-us/typography/opentype/spec/loca).
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IndexToLocationFormat {
    Short,
    Long,
}

impl IndexToLocationFormat {
    /// Returns the size of a single `loca` entry in bytes.
    #[inline]
    pub fn entry_size(self) -> usize {
        match self {
            IndexToLocationFormat::Short => 2,
            IndexToLocationFormat::Long => 4,
        }
    }
}


/// A [Font Header Table](https://docs.microsoft.com/en-us/typography/opentype/spec/head).
#[derive(Clone, Copy, Debug)]
pub struct Table {
    /// Units per EM.
    ///
    /// Guarantee to be non-zero.
    pub units_per_em: u16,
    /// A bounding box that large enough to enclose any glyph from the face.
    pub global_bbox: Rect,
    /// An index format used by the [Index to Location Table](
    /// https://docs.microsoft.com/en-us/typography/opentype/spec/loca).
    pub index_to_location_format: IndexToLocationFormat,
}

impl Table {
    /// Parses a table at the current stream position.
    pub fn parse(s: &mut Stream) -> Result<Self> {
        s.skip::<u32>(); // version
        s.skip::<u32>(); // font revision
        s.skip::<u32>(); // checksum adjustment
        s.skip::<u32>(); // magic number
        s.skip::<u16>(); // flags
        let units_per_em: u16 = s.read()?;
        s.advance(16); // created time + modified time
        let x_min: FWord = s.read()?;
        let y_min: FWord = s.read()?;
        let x_max: FWord = s.read()?;
        let y_max: FWord = s.read()?;
        s.skip::<u16>(); // mac style
        s.skip::<u16>(); // lowest PPEM
        s.skip::<i16>(); // font direction hint
        let index_to_location_format: i16 = s.read()?;

        if units_per_em == 0 {
            return Err(Error::MalformedTable(Tag::from_bytes(b"head")));
        }

        let index_to_location_format = match index_to_location_format {
            0 => IndexToLocationFormat::Short,
            1 => IndexToLocationFormat::Long,
            n => return Err(Error::UnsupportedLocaFormat(n)),
        };

        Ok(Table {
            units_per_em,
            global_bbox: Rect { x_min, y_min, x_max, y_max },
            index_to_location_format,
        })
    }
}
