//! Bounded copy into caller-owned buffers

/// Copy `src` into `dst` as a NUL-terminated byte string
///
/// At most `dst.len() - 1` bytes are copied so the terminator always fits;
/// longer values are truncated silently. Bytes after the terminator are
/// zeroed. An empty `dst` has no room for a terminator and is left untouched.
///
/// Returns the number of value bytes written (excluding the terminator).
pub fn copy_truncated(src: &[u8], dst: &mut [u8]) -> usize {
    let Some(room) = dst.len().checked_sub(1) else {
        return 0;
    };

    let copied = src.len().min(room);
    dst[..copied].copy_from_slice(&src[..copied]);
    dst[copied..].fill(0);
    copied
}

/// View a NUL-terminated buffer filled by [`copy_truncated`] as bytes up to the terminator
pub fn terminated_bytes(buf: &[u8]) -> &[u8] {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    &buf[..end]
}
