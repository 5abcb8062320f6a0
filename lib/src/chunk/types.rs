use crate::error::InvalidChunkTypeError;
use std::{fmt, str::FromStr};

/// A 4-byte chunk type code.
///
/// The letter case of each byte encodes the chunk's property bits (bit 5 of
/// the first byte: ancillary; second byte: private; fourth byte: safe to
/// copy). The codec carries the code as opaque bytes and never consults
/// these bits; [`ChunkType::is_critical`] and friends expose them to
/// consumers that care.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    // -- Critical chunks --
    /// Image header
    pub const IHDR: ChunkType = ChunkType(*b"IHDR");
    /// Palette table
    pub const PLTE: ChunkType = ChunkType(*b"PLTE");
    /// Image data
    pub const IDAT: ChunkType = ChunkType(*b"IDAT");
    /// Image end
    pub const IEND: ChunkType = ChunkType(*b"IEND");

    // -- Ancillary chunks --
    /// Background color
    #[allow(non_upper_case_globals)]
    pub const bKGD: ChunkType = ChunkType(*b"bKGD");
    /// Primary chromaticities and white point
    #[allow(non_upper_case_globals)]
    pub const cHRM: ChunkType = ChunkType(*b"cHRM");
    /// Coding-independent code points
    #[allow(non_upper_case_globals)]
    pub const cICP: ChunkType = ChunkType(*b"cICP");
    /// Digital signature
    #[allow(non_upper_case_globals)]
    pub const dSIG: ChunkType = ChunkType(*b"dSIG");
    /// Exif metadata
    #[allow(non_upper_case_globals)]
    pub const eXIf: ChunkType = ChunkType(*b"eXIf");
    /// Image gamma
    #[allow(non_upper_case_globals)]
    pub const gAMA: ChunkType = ChunkType(*b"gAMA");
    /// Palette histogram
    #[allow(non_upper_case_globals)]
    pub const hIST: ChunkType = ChunkType(*b"hIST");
    /// Embedded ICC profile
    #[allow(non_upper_case_globals)]
    pub const iCCP: ChunkType = ChunkType(*b"iCCP");
    /// International textual data
    #[allow(non_upper_case_globals)]
    pub const iTXt: ChunkType = ChunkType(*b"iTXt");
    /// Physical pixel dimensions
    #[allow(non_upper_case_globals)]
    pub const pHYs: ChunkType = ChunkType(*b"pHYs");
    /// Significant bits
    #[allow(non_upper_case_globals)]
    pub const sBIT: ChunkType = ChunkType(*b"sBIT");
    /// Suggested palette
    #[allow(non_upper_case_globals)]
    pub const sPLT: ChunkType = ChunkType(*b"sPLT");
    /// Standard RGB color space
    #[allow(non_upper_case_globals)]
    pub const sRGB: ChunkType = ChunkType(*b"sRGB");
    /// Stereo image indicator
    #[allow(non_upper_case_globals)]
    pub const sTER: ChunkType = ChunkType(*b"sTER");
    /// Textual data
    #[allow(non_upper_case_globals)]
    pub const tEXt: ChunkType = ChunkType(*b"tEXt");
    /// Last-modification time
    #[allow(non_upper_case_globals)]
    pub const tIME: ChunkType = ChunkType(*b"tIME");
    /// Transparency
    #[allow(non_upper_case_globals)]
    pub const tRNS: ChunkType = ChunkType(*b"tRNS");
    /// Compressed textual data
    #[allow(non_upper_case_globals)]
    pub const zTXt: ChunkType = ChunkType(*b"zTXt");
}

impl ChunkType {
    /// Returns `true` if this is a critical chunk (uppercase first byte).
    ///
    /// # Examples
    /// ```
    /// use libpngchunk::ChunkType;
    ///
    /// assert!(ChunkType::IHDR.is_critical());
    /// assert!(!ChunkType::tEXt.is_critical());
    /// ```
    #[inline]
    pub const fn is_critical(&self) -> bool {
        self.0[0] & 0x20 == 0
    }

    /// Returns `true` if this is a private chunk (lowercase second byte).
    #[inline]
    pub const fn is_private(&self) -> bool {
        self.0[1] & 0x20 != 0
    }

    /// Returns `true` if editors that do not recognize this chunk may copy
    /// it anyway (lowercase fourth byte).
    ///
    /// # Examples
    /// ```
    /// use libpngchunk::ChunkType;
    ///
    /// assert!(ChunkType::tEXt.is_safe_to_copy());
    /// assert!(!ChunkType::gAMA.is_safe_to_copy());
    /// ```
    #[inline]
    pub const fn is_safe_to_copy(&self) -> bool {
        self.0[3] & 0x20 != 0
    }
}

impl TryFrom<&[u8]> for ChunkType {
    type Error = InvalidChunkTypeError;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.try_into() {
            Ok(ty) => Ok(Self(ty)),
            Err(_) => Err(InvalidChunkTypeError(bytes.len())),
        }
    }
}

impl FromStr for ChunkType {
    type Err = InvalidChunkTypeError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.as_bytes())
    }
}

impl fmt::Display for ChunkType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.escape_ascii(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_bits() {
        assert!(ChunkType::IHDR.is_critical());
        assert!(ChunkType::IEND.is_critical());
        assert!(!ChunkType::iTXt.is_critical());
        assert!(!ChunkType::IHDR.is_private());
        assert!(ChunkType(*b"prVt").is_private());
        assert!(ChunkType::tEXt.is_safe_to_copy());
        assert!(!ChunkType::IDAT.is_safe_to_copy());
    }

    #[test]
    fn try_from_requires_four_bytes() {
        assert_eq!(ChunkType::try_from(&b"IDAT"[..]), Ok(ChunkType::IDAT));
        assert_eq!(
            ChunkType::try_from(&b"ID"[..]),
            Err(InvalidChunkTypeError(2))
        );
        assert_eq!(
            ChunkType::try_from(&b"IDATA"[..]),
            Err(InvalidChunkTypeError(5))
        );
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("tEXt".parse::<ChunkType>(), Ok(ChunkType::tEXt));
        assert_eq!(
            "IE".parse::<ChunkType>(),
            Err(InvalidChunkTypeError(2))
        );
    }

    #[test]
    fn display_renders_tag_bytes() {
        assert_eq!(ChunkType::IHDR.to_string(), "IHDR");
        assert_eq!(ChunkType([0x49, 0x44, 0x41, 0xFF]).to_string(), "IDA\\xff");
    }
}
