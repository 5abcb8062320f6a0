mod crc;
mod read;
mod traits;
mod types;
mod write;

use self::crc::Crc32;
pub(crate) use self::{read::read_chunk_from_slice, write::ChunkWriter};
pub use self::{traits::*, types::*};
use std::{
    io::{self, Write},
    mem,
    ops::Deref,
};

/// Minimum required size of bytes to represent a chunk.
/// length:4 + chunk type:4 + data:0 + crc:4
pub const MIN_CHUNK_BYTES_SIZE: usize =
    mem::size_of::<u32>() + mem::size_of::<ChunkType>() + mem::size_of::<u32>();

pub(crate) trait ChunkExt: Chunk {
    /// byte size of chunk
    #[inline]
    fn bytes_len(&self) -> usize {
        MIN_CHUNK_BYTES_SIZE + self.data().len()
    }

    #[inline]
    fn write_chunk_in<W: Write>(&self, writer: &mut W) -> io::Result<usize> {
        writer.write_all(&self.length().to_be_bytes())?;
        writer.write_all(&self.ty().0)?;
        writer.write_all(self.data())?;
        writer.write_all(&self.crc().to_be_bytes())?;
        Ok(self.bytes_len())
    }

    /// Convert the provided `Chunk` instance into a `Vec<u8>`.
    ///
    /// # Returns
    ///
    /// A `Vec<u8>` containing the converted `Chunk` data.
    #[allow(dead_code)]
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        let mut vec = Vec::with_capacity(self.bytes_len());
        vec.extend_from_slice(&self.length().to_be_bytes());
        vec.extend_from_slice(&self.ty().0);
        vec.extend_from_slice(self.data());
        vec.extend_from_slice(&self.crc().to_be_bytes());
        vec
    }
}

impl<T> ChunkExt for T where T: Chunk {}

/// Represents a raw chunk
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct RawChunk<D = Vec<u8>> {
    pub(crate) length: u32,
    pub(crate) ty: ChunkType,
    pub(crate) data: D,
    pub(crate) crc: u32,
}

impl<'d> RawChunk<&'d [u8]> {
    /// Create a new [`RawChunk`] borrowing `data`, computing the checksum.
    ///
    /// This is the zero-copy counterpart of [`RawChunk::from_data`]; the
    /// payload must outlive the chunk.
    #[inline]
    pub fn from_slice(ty: ChunkType, data: &'d [u8]) -> Self {
        let chunk = (ty, data);
        Self {
            length: chunk.length(),
            crc: chunk.crc(),
            ty,
            data,
        }
    }

    /// Copies the borrowed payload into an independently owned chunk.
    #[inline]
    pub fn to_owned(&self) -> RawChunk<Vec<u8>> {
        RawChunk {
            length: self.length,
            ty: self.ty,
            data: self.data.to_vec(),
            crc: self.crc,
        }
    }
}

impl<D> RawChunk<D>
where
    Self: Chunk,
{
    #[inline]
    pub fn as_ref(&self) -> RawChunk<&[u8]> {
        RawChunk {
            length: self.length,
            ty: self.ty,
            data: self.data(),
            crc: self.crc,
        }
    }

    /// Recompute the checksum over the chunk type and payload and compare
    /// it against the stored `crc` field.
    ///
    /// Parsing carries the stored checksum through without validating it;
    /// this is the opt-in integrity check.
    ///
    /// # Examples
    /// ```
    /// use libpngchunk::{ChunkType, RawChunk};
    ///
    /// let chunk = RawChunk::from_data(ChunkType::IDAT, [0xAA, 0xBB, 0xCC, 0xDD]);
    /// assert!(chunk.verify_crc());
    /// ```
    #[inline]
    pub fn verify_crc(&self) -> bool {
        (self.ty, self.data()).crc() == self.crc
    }
}

impl Chunk for RawChunk<&[u8]> {
    #[inline]
    fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    fn ty(&self) -> ChunkType {
        self.ty
    }

    #[inline]
    fn data(&self) -> &[u8] {
        self.data
    }

    #[inline]
    fn crc(&self) -> u32 {
        self.crc
    }
}

impl RawChunk {
    /// Create a new [`RawChunk`] from given [`ChunkType`] and bytes.
    ///
    /// # Examples
    /// ```
    /// use libpngchunk::{prelude::*, ChunkType, RawChunk};
    ///
    /// let data = [0xAA, 0xBB, 0xCC, 0xDD];
    /// let chunk = RawChunk::from_data(ChunkType::IDAT, data);
    ///
    /// assert_eq!(chunk.length(), 4);
    /// assert_eq!(chunk.ty(), ChunkType::IDAT);
    /// assert_eq!(chunk.data(), &[0xAA, 0xBB, 0xCC, 0xDD]);
    /// ```
    #[inline]
    pub fn from_data<T: Into<Vec<u8>>>(ty: ChunkType, data: T) -> Self {
        #[inline]
        fn inner(ty: ChunkType, data: Vec<u8>) -> RawChunk {
            let chunk = (ty, &data[..]);
            RawChunk {
                length: chunk.length(),
                crc: chunk.crc(),
                ty,
                data,
            }
        }
        inner(ty, data.into())
    }
}

impl Chunk for RawChunk {
    #[inline]
    fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    fn ty(&self) -> ChunkType {
        self.ty
    }

    #[inline]
    fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn crc(&self) -> u32 {
        self.crc
    }
}

impl<T: Deref<Target = [u8]>> Chunk for (ChunkType, T) {
    #[inline]
    fn ty(&self) -> ChunkType {
        self.0
    }

    #[inline]
    fn data(&self) -> &[u8] {
        &self.1
    }
}

impl<T: Chunk> Chunk for &T {
    #[inline]
    fn ty(&self) -> ChunkType {
        (*self).ty()
    }

    #[inline]
    fn data(&self) -> &[u8] {
        (*self).data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bytes() {
        let chunk = RawChunk::from_data(ChunkType::IEND, vec![]);

        let bytes = chunk.to_bytes();

        assert_eq!(
            bytes,
            vec![
                0x00, 0x00, 0x00, 0x00, // chunk length (0)
                0x49, 0x45, 0x4E, 0x44, // chunk type ("IEND")
                0xAE, 0x42, 0x60, 0x82, // CRC32 (calculated from chunk type and data)
            ]
        );
    }

    #[test]
    fn from_slice_matches_from_data() {
        let data = [0xAA, 0xBB, 0xCC, 0xDD];
        let borrowed = RawChunk::from_slice(ChunkType::IDAT, &data);
        let owned = RawChunk::from_data(ChunkType::IDAT, data);

        assert_eq!(borrowed.to_owned(), owned);
        assert_eq!(owned.as_ref(), borrowed);
    }

    #[test]
    fn verify_crc_detects_payload_corruption() {
        let mut chunk = RawChunk::from_data(ChunkType::IDAT, vec![0x01, 0x02, 0x03, 0x04]);
        assert!(chunk.verify_crc());

        chunk.data[0] ^= 0xFF;
        assert!(!chunk.verify_crc());
    }
}
