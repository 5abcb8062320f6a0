use crate::chunk::{Chunk, ChunkExt};
use std::io::{self, Write};

pub(crate) struct ChunkWriter<W> {
    w: W,
}

impl<W> ChunkWriter<W> {
    pub(crate) fn into_inner(self) -> W {
        self.w
    }
}

impl<W> From<W> for ChunkWriter<W>
where
    W: Write,
{
    fn from(writer: W) -> Self {
        Self { w: writer }
    }
}

impl<W: Write> ChunkWriter<W> {
    /// Writes `chunk` as a length/type/data/crc record.
    ///
    /// A chunk whose declared length disagrees with its payload would
    /// corrupt every record after it, so it is rejected before any byte
    /// is written.
    pub(crate) fn write_chunk(&mut self, chunk: &impl Chunk) -> io::Result<usize> {
        if chunk.length() as usize != chunk.data().len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "chunk {} declares length {} but holds {} bytes of data",
                    chunk.ty(),
                    chunk.length(),
                    chunk.data().len()
                ),
            ));
        }
        chunk.write_chunk_in(&mut self.w)
    }
}
