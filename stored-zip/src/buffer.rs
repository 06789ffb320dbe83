/// Append-only cursor over a buffer sized up front.
///
/// The writer knows the final archive length before the first byte is
/// written, so positions handed out by [`ByteWriter::position`] are stable
/// offsets into the finished buffer.
pub(crate) struct ByteWriter {
    buf: Vec<u8>,
    expected_len: usize,
}

impl ByteWriter {
    pub(crate) fn with_len(expected_len: usize) -> Self {
        Self {
            buf: Vec::with_capacity(expected_len),
            expected_len,
        }
    }

    /// Byte offset at which the next write lands.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub(crate) fn put(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Return the buffer, or `None` if fewer or more bytes were written than planned.
    pub(crate) fn finish(self) -> Option<Vec<u8>> {
        (self.buf.len() == self.expected_len).then_some(self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_track_writes() {
        let mut writer = ByteWriter::with_len(5);
        assert_eq!(writer.position(), 0);
        writer.put(b"ab");
        assert_eq!(writer.position(), 2);
        writer.put(b"cde");
        assert_eq!(writer.finish().as_deref(), Some(b"abcde".as_slice()));
    }

    #[test]
    fn test_short_write_is_rejected() {
        let mut writer = ByteWriter::with_len(4);
        writer.put(b"abc");
        assert!(writer.finish().is_none());
    }
}
