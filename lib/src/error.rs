use std::{
    error::Error,
    fmt::{Display, Formatter},
};

/// Invalid chunk type error.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct InvalidChunkTypeError(pub(crate) usize);

impl Display for InvalidChunkTypeError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid chunk type length {}, expected 4 bytes", self.0)
    }
}

impl Error for InvalidChunkTypeError {}
