//! A library for reading and writing PNG chunk streams
//!
//! This library splits a PNG datastream into its raw chunks and joins raw
//! chunks back into a byte-identical datastream. Chunk payloads are carried
//! as opaque bytes; parsed chunks borrow from the source buffer, so a
//! stream can be inspected, edited and reassembled without copying.

#![doc(html_root_url = "https://docs.rs/libpngchunk/0.1.0")]
pub(crate) mod chunk;
pub(crate) mod error;
pub mod prelude;
pub(crate) mod stream;

pub use chunk::*;
pub use error::*;
pub use stream::*;
