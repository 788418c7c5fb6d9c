// https://docs.microsoft.com/en-us/typography/opentype/spec/otff#organization-of-an-opentype-font

use alloc::vec::Vec;

use crate::parser::{FromData, Stream, Tag};
use crate::{Error, Result};

/// Tables that must be present in every font.
pub const REQUIRED_TABLES: [Tag; 7] = [
    Tag::from_bytes(b"head"),
    Tag::from_bytes(b"maxp"),
    Tag::from_bytes(b"loca"),
    Tag::from_bytes(b"glyf"),
    Tag::from_bytes(b"hhea"),
    Tag::from_bytes(b"hmtx"),
    Tag::from_bytes(b"cmap"),
];


/// A [table record](https://docs.microsoft.com/en-us/typography/opentype/spec/otff#table-directory).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TableRecord {
    /// Table identifier.
    pub tag: Tag,
    /// Table checksum. Not verified.
    pub checksum: u32,
    /// An absolute offset to the table.
    pub offset: u32,
    /// Table length.
    pub length: u32,
}

impl FromData for TableRecord {
    const SIZE: usize = 16;

    #[inline]
    fn parse(data: &[u8]) -> Self {
        TableRecord {
            tag: Tag::parse(&data[0..4]),
            checksum: u32::parse(&data[4..8]),
            offset: u32::parse(&data[8..12]),
            length: u32::parse(&data[12..16]),
        }
    }
}


/// A table directory.
///
/// Maps table tags to their records. Only the first record is used
/// when a tag is present multiple times.
#[derive(Clone, Default, Debug)]
pub struct TableDirectory {
    records: Vec<TableRecord>,
}

impl TableDirectory {
    /// Parses a table directory starting at the current stream position.
    ///
    /// Checks that all the [`REQUIRED_TABLES`] are present.
    pub fn parse(s: &mut Stream) -> Result<Self> {
        s.skip::<u32>(); // sfnt version
        let num_tables: u16 = s.read()?;
        s.advance(6); // searchRange (u16) + entrySelector (u16) + rangeShift (u16)
        let records = s.read_array::<TableRecord>(usize::from(num_tables))?;

        let directory = TableDirectory {
            records: records.into_iter().collect(),
        };

        for &tag in &REQUIRED_TABLES {
            directory.offset(tag)?;
        }

        Ok(directory)
    }

    /// Returns a table record by tag.
    #[inline]
    pub fn get(&self, tag: Tag) -> Option<&TableRecord> {
        self.records.iter().find(|record| record.tag == tag)
    }

    /// Returns an absolute table offset.
    ///
    /// Returns `Error::MissingRequiredTable` when there is no such table.
    #[inline]
    pub fn offset(&self, tag: Tag) -> Result<usize> {
        self.get(tag)
            .map(|record| record.offset as usize)
            .ok_or(Error::MissingRequiredTable(tag))
    }

    /// Returns an iterator over all table records.
    #[inline]
    pub fn records(&self) -> impl Iterator<Item = &TableRecord> {
        self.records.iter()
    }
}
