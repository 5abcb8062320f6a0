/// The magic number of a PNG datastream.
pub const PNG_HEADER: &[u8; 8] = b"\x89PNG\r\n\x1A\n";

/// Returns `true` if `bytes` starts with the PNG magic number.
///
/// Buffers shorter than the magic number are never PNG datastreams and
/// return `false`.
///
/// # Examples
/// ```
/// use libpngchunk::is_png;
///
/// assert!(is_png(b"\x89PNG\r\n\x1A\n"));
/// assert!(!is_png(b"\x89PN"));
/// assert!(!is_png(b"GIF89a"));
/// ```
#[inline]
pub fn is_png(bytes: &[u8]) -> bool {
    bytes.starts_with(PNG_HEADER)
}
