use crate::chunk::{ChunkType, RawChunk};
use std::mem;

/// Reads one chunk record from the front of `bytes`.
///
/// Returns the parsed chunk and the bytes remaining after it, or `None`
/// when the input cannot hold a complete length/type/data/crc record.
/// The stored crc is carried through without validation.
pub(crate) fn read_chunk_from_slice(bytes: &[u8]) -> Option<(RawChunk<&[u8]>, &[u8])> {
    // read chunk length
    let (length, r) = bytes.split_first_chunk::<{ mem::size_of::<u32>() }>()?;
    let length = u32::from_be_bytes(*length);

    // read a chunk type
    let (ty, r) = r.split_first_chunk::<{ mem::size_of::<ChunkType>() }>()?;

    // read chunk data
    let (data, r) = r.split_at_checked(length as usize)?;

    // read crc sum
    let (crc, r) = r.split_first_chunk::<{ mem::size_of::<u32>() }>()?;
    let crc = u32::from_be_bytes(*crc);

    Some((
        RawChunk {
            length,
            ty: ChunkType(*ty),
            data,
            crc,
        },
        r,
    ))
}
