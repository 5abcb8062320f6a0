use crate::chunk::{read_chunk_from_slice, RawChunk};
use crate::stream::PNG_HEADER;

/// Splits a PNG datastream into its raw chunks.
///
/// Scanning starts immediately after the 8-byte magic number; use
/// [`is_png`](crate::is_png) to validate the magic number itself. Each
/// chunk borrows its payload from `bytes`, so the buffer must outlive the
/// returned chunks; call [`RawChunk::to_owned`] for independent copies.
///
/// Scanning stops at the first point where the remaining bytes cannot hold
/// a complete chunk record: a truncated tail or trailing garbage yields
/// the chunks that are legitimately present instead of an error. Stored
/// checksums are carried through without validation.
///
/// # Examples
/// ```
/// use libpngchunk::{prelude::*, ChunkType, RawChunk, join_chunks, split_chunks};
///
/// let stream = join_chunks(&[
///     RawChunk::from_data(ChunkType::IHDR, vec![0x00; 13]),
///     RawChunk::from_data(ChunkType::IEND, vec![]),
/// ])
/// .unwrap();
///
/// let chunks = split_chunks(&stream);
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].ty(), ChunkType::IHDR);
/// assert_eq!(chunks[1].ty(), ChunkType::IEND);
/// ```
pub fn split_chunks(bytes: &[u8]) -> Vec<RawChunk<&[u8]>> {
    let mut rest = bytes.get(PNG_HEADER.len()..).unwrap_or_default();
    let mut chunks = Vec::new();
    while let Some((chunk, r)) = read_chunk_from_slice(rest) {
        chunks.push(chunk);
        rest = r;
    }
    chunks
}
