use crate::chunk::{Chunk, ChunkExt, ChunkWriter};
use crate::stream::PNG_HEADER;
use std::io;

/// Joins chunks into a PNG datastream.
///
/// The output holds the magic number followed by every chunk in input
/// order. Stored checksums are written as-is, never recomputed, so a
/// sequence produced by [`split_chunks`](crate::split_chunks) reassembles
/// the source buffer byte for byte (up to any trailing bytes the split
/// discarded).
///
/// # Errors
///
/// Returns an [`InvalidInput`](io::ErrorKind::InvalidInput) error when a
/// chunk declares a length that disagrees with its payload; serializing
/// such a chunk would corrupt the stream.
///
/// # Examples
/// ```
/// use libpngchunk::{ChunkType, RawChunk, join_chunks, split_chunks};
///
/// let stream = join_chunks(&[
///     RawChunk::from_data(ChunkType::IHDR, vec![0x00; 13]),
///     RawChunk::from_data(ChunkType::IEND, vec![]),
/// ])
/// .unwrap();
///
/// let rejoined = join_chunks(&split_chunks(&stream)).unwrap();
/// assert_eq!(rejoined, stream);
/// ```
pub fn join_chunks<C: Chunk>(chunks: &[C]) -> io::Result<Vec<u8>> {
    let total = PNG_HEADER.len() + chunks.iter().map(|c| c.bytes_len()).sum::<usize>();
    let mut buffer = Vec::with_capacity(total);
    buffer.extend_from_slice(PNG_HEADER);

    let mut writer = ChunkWriter::from(buffer);
    for chunk in chunks {
        writer.write_chunk(chunk)?;
    }
    Ok(writer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::{ChunkType, RawChunk};
    use crate::stream::split_chunks;

    #[test]
    fn empty_sequence_is_header_only() {
        let stream = join_chunks::<RawChunk>(&[]).unwrap();
        assert_eq!(stream, PNG_HEADER);
    }

    #[test]
    fn single_iend_stream() {
        let stream = join_chunks(&[RawChunk::from_data(ChunkType::IEND, vec![])]).unwrap();

        let mut expected = PNG_HEADER.to_vec();
        expected.extend_from_slice(&[
            0x00, 0x00, 0x00, 0x00, // chunk length (0)
            0x49, 0x45, 0x4E, 0x44, // chunk type ("IEND")
            0xAE, 0x42, 0x60, 0x82, // CRC32 (calculated from chunk type and data)
        ]);
        assert_eq!(stream, expected);
    }

    #[test]
    fn round_trip_is_byte_identical() {
        let stream = join_chunks(&[
            RawChunk::from_data(ChunkType::IHDR, vec![0x01; 13]),
            RawChunk::from_data(ChunkType::IDAT, vec![0xAA, 0xBB, 0xCC, 0xDD]),
            RawChunk::from_data(ChunkType::IEND, vec![]),
        ])
        .unwrap();

        let rejoined = join_chunks(&split_chunks(&stream)).unwrap();
        assert_eq!(rejoined, stream);
    }

    #[test]
    fn preserves_stored_crc_verbatim() {
        let mut stream = join_chunks(&[
            RawChunk::from_data(ChunkType::IDAT, vec![0xAA, 0xBB]),
            RawChunk::from_data(ChunkType::IEND, vec![]),
        ])
        .unwrap();

        // corrupt the final crc byte; the chunks must still survive a
        // split and rejoin untouched
        let last = stream.len() - 1;
        stream[last] ^= 0xFF;

        let rejoined = join_chunks(&split_chunks(&stream)).unwrap();
        assert_eq!(rejoined, stream);
    }

    #[test]
    fn accepts_borrowed_and_referenced_chunks() {
        let owned = RawChunk::from_data(ChunkType::IDAT, vec![0x01, 0x02, 0x03]);
        let end = RawChunk::from_data(ChunkType::IEND, vec![]);

        let by_value = join_chunks(&[owned.clone(), end.clone()]).unwrap();
        let by_reference = join_chunks(&[&owned, &end]).unwrap();
        let borrowed = join_chunks(&[owned.as_ref(), end.as_ref()]).unwrap();

        assert_eq!(by_reference, by_value);
        assert_eq!(borrowed, by_value);
    }

    #[test]
    fn rejects_length_mismatch() {
        struct BadChunk;
        impl Chunk for BadChunk {
            fn length(&self) -> u32 {
                2
            }

            fn ty(&self) -> ChunkType {
                ChunkType::IDAT
            }

            fn data(&self) -> &[u8] {
                &[0xAA]
            }
        }

        let err = join_chunks(&[BadChunk]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
