//! Low-level table parsers.
//!
//! All parsers work with a [`Stream`](crate::parser::Stream) over the whole font data
//! and expect it to be positioned at the start of a table.

pub mod cmap;
pub mod glyf;
pub mod head;
pub mod hhea;
pub mod hmtx;
pub mod loca;
pub mod maxp;
