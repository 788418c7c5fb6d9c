// A test-only font writer.

use alloc::vec::Vec;

#[derive(Clone, Copy)]
pub enum TtfType<'a> {
    Raw(&'a [u8]),
    TrueTypeMagic,
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    UInt32(u32),
    F2Dot14(i16),
}

pub fn convert(values: &[TtfType]) -> Vec<u8> {
    let mut data = Vec::with_capacity(256);
    for v in values {
        convert_type(*v, &mut data);
    }

    data
}

fn convert_type(v: TtfType, data: &mut Vec<u8>) {
    match v {
        TtfType::Raw(bytes) => {
            data.extend_from_slice(bytes);
        }
        TtfType::TrueTypeMagic => {
            data.extend_from_slice(&[0x00, 0x01, 0x00, 0x00]);
        }
        TtfType::Int8(n) => {
            data.extend_from_slice(&i8::to_be_bytes(n));
        }
        TtfType::UInt8(n) => {
            data.extend_from_slice(&u8::to_be_bytes(n));
        }
        TtfType::Int16(n) | TtfType::F2Dot14(n) => {
            data.extend_from_slice(&i16::to_be_bytes(n));
        }
        TtfType::UInt16(n) => {
            data.extend_from_slice(&u16::to_be_bytes(n));
        }
        TtfType::UInt32(n) => {
            data.extend_from_slice(&u32::to_be_bytes(n));
        }
    }
}

/// Builds a font from a list of tables.
///
/// Tables are stored in the provided order, right after the table directory.
pub fn build_font(tables: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let mut data = convert(&[
        TtfType::TrueTypeMagic,
        TtfType::UInt16(tables.len() as u16), // numTables
        TtfType::UInt16(0), // searchRange
        TtfType::UInt16(0), // entrySelector
        TtfType::UInt16(0), // rangeShift
    ]);

    let mut offset = 12 + tables.len() as u32 * 16;
    for (tag, table) in tables {
        data.extend_from_slice(&tag[..]);
        convert_type(TtfType::UInt32(0), &mut data); // checksum
        convert_type(TtfType::UInt32(offset), &mut data);
        convert_type(TtfType::UInt32(table.len() as u32), &mut data);
        offset += table.len() as u32;
    }

    for (_, table) in tables {
        data.extend_from_slice(table);
    }

    data
}
