mod header;
mod read;
mod write;

pub use header::{is_png, PNG_HEADER};
pub use read::split_chunks;
pub use write::join_chunks;
