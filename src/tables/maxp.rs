// https://docs.microsoft.com/en-us/typography/opentype/spec/maxp

use crate::parser::Stream;
use crate::Result;

/// Parses the number of glyphs at the current stream position.
///
/// We care only about `numGlyphs`, so the table version is not checked.
pub fn parse(s: &mut Stream) -> Result<u16> {
    s.skip::<u32>(); // version
    s.read()
}
