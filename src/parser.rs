//! Binary parsing utilities.
//!
//! This module should not be used directly, unless you're planning to parse
//! some tables manually.

use core::ops::Range;

use crate::{Error, Result};

/// A trait for parsing raw binary data.
///
/// This is a low-level, internal trait that should not be used directly.
pub trait FromData: Sized {
    /// Object's raw data size.
    ///
    /// `mem::size_of` by default.
    ///
    /// Override when size of `Self` != size of a raw data.
    /// For example, when you are parsing `u16`, but storing it as `u8`.
    /// In this case `size_of::<Self>()` == 1, but `FromData::SIZE` == 2.
    const SIZE: usize = core::mem::size_of::<Self>();

    /// Parses an object from a raw data.
    ///
    /// `data` is guarantee to be exactly `SIZE` bytes long.
    fn parse(data: &[u8]) -> Self;
}

impl FromData for u8 {
    #[inline]
    fn parse(data: &[u8]) -> Self {
        data[0]
    }
}

impl FromData for i8 {
    #[inline]
    fn parse(data: &[u8]) -> Self {
        data[0] as i8
    }
}

impl FromData for u16 {
    #[inline]
    fn parse(data: &[u8]) -> Self {
        u16::from_be_bytes([data[0], data[1]])
    }
}

impl FromData for i16 {
    #[inline]
    fn parse(data: &[u8]) -> Self {
        i16::from_be_bytes([data[0], data[1]])
    }
}

impl FromData for u32 {
    #[inline]
    fn parse(data: &[u8]) -> Self {
        u32::from_be_bytes([data[0], data[1], data[2], data[3]])
    }
}

impl FromData for i32 {
    #[inline]
    fn parse(data: &[u8]) -> Self {
        i32::from_be_bytes([data[0], data[1], data[2], data[3]])
    }
}


/// A signed distance in font design units.
///
/// https://docs.microsoft.com/en-us/typography/opentype/spec/otff#data-types
pub type FWord = i16;


/// A 4-byte table tag.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(pub [u8; 4]);

impl Tag {
    /// Creates a `Tag` from bytes.
    #[inline]
    pub const fn from_bytes(bytes: &[u8; 4]) -> Self {
        Tag(*bytes)
    }

    /// Returns tag as 4-element byte array.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0
    }
}

impl FromData for Tag {
    const SIZE: usize = 4;

    #[inline]
    fn parse(data: &[u8]) -> Self {
        Tag([data[0], data[1], data[2], data[3]])
    }
}

impl core::fmt::Debug for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Tag({})", self)
    }
}

impl core::fmt::Display for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for &c in &self.0 {
            // Tags are printable ASCII. Anything else is printed as a placeholder.
            let c = if c.is_ascii_graphic() || c == b' ' { c as char } else { '?' };
            write!(f, "{}", c)?;
        }

        Ok(())
    }
}


/// A 2.14 fixed-point number.
///
/// https://docs.microsoft.com/en-us/typography/opentype/spec/otff#data-types
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct F2Dot14(pub i16);

impl F2Dot14 {
    /// Converts the raw value into `f32`.
    #[inline]
    pub fn to_f32(self) -> f32 {
        f32::from(self.0) / 16384.0
    }
}

impl FromData for F2Dot14 {
    const SIZE: usize = 2;

    #[inline]
    fn parse(data: &[u8]) -> Self {
        F2Dot14(i16::parse(data))
    }
}


/// A slice-like container that converts internal binary data only on access.
///
/// This is a low-level, internal structure that should not be used directly.
#[derive(Clone, Copy)]
pub struct LazyArray<'a, T> {
    data: &'a [u8],
    data_type: core::marker::PhantomData<T>,
}

impl<T> Default for LazyArray<'_, T> {
    fn default() -> Self {
        LazyArray {
            data: &[],
            data_type: core::marker::PhantomData,
        }
    }
}

impl<'a, T: FromData> LazyArray<'a, T> {
    /// Creates a new `LazyArray`.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        LazyArray {
            data,
            data_type: core::marker::PhantomData,
        }
    }

    /// Returns a value at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        if index < self.len() {
            let start = index * T::SIZE;
            let end = start + T::SIZE;
            self.data.get(start..end).map(T::parse)
        } else {
            None
        }
    }

    /// Returns the last value.
    #[inline]
    pub fn last(&self) -> Option<T> {
        if !self.is_empty() {
            self.get(self.len() - 1)
        } else {
            None
        }
    }

    /// Returns array's length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / T::SIZE
    }

    /// Checks if array is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, T: FromData + core::fmt::Debug + Copy> core::fmt::Debug for LazyArray<'a, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_list().entries(self.into_iter()).finish()
    }
}

impl<'a, T: FromData> IntoIterator for LazyArray<'a, T> {
    type Item = T;
    type IntoIter = LazyArrayIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LazyArrayIter {
            data: self,
            index: 0,
        }
    }
}


/// An iterator over `LazyArray`.
#[derive(Clone, Copy)]
#[allow(missing_debug_implementations)]
pub struct LazyArrayIter<'a, T> {
    data: LazyArray<'a, T>,
    index: usize,
}

impl<'a, T: FromData> Iterator for LazyArrayIter<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.index += 1;
        self.data.get(self.index - 1)
    }
}


/// A streaming binary parser.
///
/// Unlike a plain slice reader, the stream always works with the whole font data
/// and absolute offsets, so it can jump between tables.
/// All reads are bounds-checked and return `Error::OutOfBounds` on failure.
#[derive(Clone, Copy, Debug)]
pub struct Stream<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Stream<'a> {
    /// Creates a new `Stream` positioned at the start of `data`.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Stream {
            data,
            offset: 0,
        }
    }

    /// Returns the underlying data.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the current absolute offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Jumps to an absolute offset.
    ///
    /// The offset is not checked here. An invalid offset will be reported by the next read.
    #[inline]
    pub fn seek(&mut self, offset: usize) {
        self.offset = offset;
    }

    /// Skips `T::SIZE` bytes.
    #[inline]
    pub fn skip<T: FromData>(&mut self) {
        self.advance(T::SIZE);
    }

    /// Skips `len` bytes.
    #[inline]
    pub fn advance(&mut self, len: usize) {
        self.offset = self.offset.saturating_add(len);
    }

    /// Reads the next value and advances the stream.
    #[inline]
    pub fn read<T: FromData>(&mut self) -> Result<T> {
        let data = self.read_bytes(T::SIZE)?;
        Ok(T::parse(data))
    }

    /// Reads a value at an absolute offset without affecting any stream.
    #[inline]
    pub fn read_at<T: FromData>(data: &[u8], offset: usize) -> Result<T> {
        let range = checked_range(offset, T::SIZE)?;
        let data = data.get(range).ok_or(Error::OutOfBounds(offset))?;
        Ok(T::parse(data))
    }

    /// Reads the next `len` bytes and advances the stream.
    #[inline]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let range = checked_range(self.offset, len)?;
        let data = self.data.get(range).ok_or(Error::OutOfBounds(self.offset))?;
        self.offset += len;
        Ok(data)
    }

    /// Reads an array of `count` values and advances the stream.
    #[inline]
    pub fn read_array<T: FromData>(&mut self, count: usize) -> Result<LazyArray<'a, T>> {
        let len = count.checked_mul(T::SIZE).ok_or(Error::OutOfBounds(self.offset))?;
        self.read_bytes(len).map(LazyArray::new)
    }

    /// Reads a `u16` count followed by an array of `count` values.
    #[inline]
    pub fn read_array16<T: FromData>(&mut self) -> Result<LazyArray<'a, T>> {
        let count: u16 = self.read()?;
        self.read_array(usize::from(count))
    }
}

#[inline]
fn checked_range(offset: usize, len: usize) -> Result<Range<usize>> {
    let end = offset.checked_add(len).ok_or(Error::OutOfBounds(offset))?;
    Ok(offset..end)
}
