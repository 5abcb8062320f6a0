//! PNG chunk stream prelude.
//!
//! The purpose of this module is to alleviate imports of common traits
//! by adding a glob import to modules:
//!
//! ```
//! # #![allow(unused_imports)]
//! use libpngchunk::prelude::*;
//! ```
pub use crate::Chunk;
