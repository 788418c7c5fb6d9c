mod hmtx;

use ttf_outline::{Error, FontData, Tag};

#[derive(Clone, Copy)]
pub enum Unit {
    Raw(&'static [u8]),
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    UInt32(u32),
    F2Dot14(f32),
}

pub fn convert(units: &[Unit]) -> Vec<u8> {
    let mut data = Vec::with_capacity(256);
    for v in units {
        convert_unit(*v, &mut data);
    }

    data
}

fn convert_unit(unit: Unit, data: &mut Vec<u8>) {
    match unit {
        Unit::Raw(bytes) => {
            data.extend_from_slice(bytes);
        }
        Unit::Int8(n) => {
            data.extend_from_slice(&i8::to_be_bytes(n));
        }
        Unit::UInt8(n) => {
            data.extend_from_slice(&u8::to_be_bytes(n));
        }
        Unit::Int16(n) => {
            data.extend_from_slice(&i16::to_be_bytes(n));
        }
        Unit::UInt16(n) => {
            data.extend_from_slice(&u16::to_be_bytes(n));
        }
        Unit::UInt32(n) => {
            data.extend_from_slice(&u32::to_be_bytes(n));
        }
        Unit::F2Dot14(n) => {
            data.extend_from_slice(&i16::to_be_bytes((n * 16384.0) as i16));
        }
    }
}

#[test]
fn empty_font() {
    assert_eq!(FontData::parse(&[]).unwrap_err(), Error::OutOfBounds(4));
}

#[test]
fn zero_tables() {
    let data = &[
        0x00, 0x01, 0x00, 0x00, // magic
        0x00, 0x00, // numTables: 0
        0x00, 0x00, // searchRange: 0
        0x00, 0x00, // entrySelector: 0
        0x00, 0x00, // rangeShift: 0
    ];

    assert_eq!(FontData::parse(data).unwrap_err(),
               Error::MissingRequiredTable(Tag::from_bytes(b"head")));
}

#[test]
fn tables_count_overflow() {
    let data = &[
        0x00, 0x01, 0x00, 0x00, // magic
        0xFF, 0xFF, // numTables: u16::MAX
        0x00, 0x00, // searchRange: 0
        0x00, 0x00, // entrySelector: 0
        0x00, 0x00, // rangeShift: 0
    ];

    assert_eq!(FontData::parse(data).unwrap_err(), Error::OutOfBounds(12));
}

#[test]
fn table_offset_out_of_bounds() {
    let mut data = vec![
        0x00, 0x01, 0x00, 0x00, // magic
        0x00, 0x07, // numTables: 7
        0x00, 0x00, // searchRange: 0
        0x00, 0x00, // entrySelector: 0
        0x00, 0x00, // rangeShift: 0
    ];

    for tag in &[b"head", b"maxp", b"loca", b"glyf", b"hhea", b"hmtx", b"cmap"] {
        data.extend_from_slice(&tag[..]);
        data.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // checksum
        data.extend_from_slice(&[0x00, 0x01, 0x00, 0x00]); // offset: 65536
        data.extend_from_slice(&[0x00, 0x00, 0x00, 0x36]); // length: 54
    }

    // `units_per_em` is the first value we actually read.
    assert_eq!(FontData::parse(&data).unwrap_err(), Error::OutOfBounds(65536 + 18));
}
