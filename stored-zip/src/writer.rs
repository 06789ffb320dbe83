//! Stored-only archive writer.
//!
//! Members are laid out in insertion order: every local header followed by
//! its raw bytes, then the central directory in the same order, then one
//! end-of-central-directory record.
use crate::buffer::ByteWriter;
use crate::crc::crc32;
use crate::errors::{Error, ErrorKind};
use crate::headers::{CentralDirectoryHeader, EndOfCentralDirectory, LocalFileHeader};
use std::collections::HashSet;

/// A member scheduled for the archive, with its derived checksum and offset.
///
/// Members are immutable once created; the offset is fixed by the order in
/// which they were added to the [`ArchiveWriter`].
#[derive(Debug, Clone)]
pub struct ArchiveMember {
    path: String,
    content: Vec<u8>,
    crc32: u32,
    offset: u32,
    size: u32,
}

impl ArchiveMember {
    /// Archive-internal path, always forward-slash separated.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    #[inline]
    pub fn crc32(&self) -> u32 {
        self.crc32
    }

    /// Byte position of this member's local header in the finished archive.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn local_header(&self) -> LocalFileHeader {
        LocalFileHeader::stored(self.crc32, self.size, self.name_len())
    }

    pub fn central_header(&self) -> CentralDirectoryHeader {
        CentralDirectoryHeader::stored(self.crc32, self.size, self.name_len(), self.offset)
    }

    /// Bytes occupied by the local header, name, and content.
    fn local_len(&self) -> usize {
        LocalFileHeader::SIZE + self.path.len() + self.content.len()
    }

    /// Bytes occupied by the central directory entry and name.
    fn central_len(&self) -> usize {
        CentralDirectoryHeader::SIZE + self.path.len()
    }

    // Path length is checked against u16::MAX when the member is created.
    #[inline]
    fn name_len(&self) -> u16 {
        self.path.len() as u16
    }
}

/// In-memory writer producing a stored-only ZIP archive.
///
/// # Example
///
/// ```rust
/// use stored_zip::ArchiveWriter;
///
/// let mut writer = ArchiveWriter::new();
/// writer.write_stored("mimetype", b"application/test")?;
/// writer.write_stored("content.xml", b"<content/>")?;
/// let bytes = writer.finish()?;
/// assert_eq!(&bytes[..4], b"PK\x03\x04");
/// # Ok::<(), stored_zip::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ArchiveWriter {
    members: Vec<ArchiveMember>,
    paths: HashSet<String>,
    /// Offset of the next local header, i.e. the running size of the data section
    next_offset: usize,
}

impl ArchiveWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a stored (uncompressed) member.
    ///
    /// The member's CRC-32 and local header offset are computed immediately.
    pub fn write_stored(&mut self, path: &str, data: &[u8]) -> Result<&ArchiveMember, Error> {
        validate_path(path)?;
        if self.paths.contains(path) {
            return Err(ErrorKind::DuplicatePath(path.to_string()).into());
        }
        if path.len() > usize::from(u16::MAX) {
            return Err(ErrorKind::TooLarge {
                what: "member path",
                value: path.len(),
            }
            .into());
        }

        let size = to_u32("member", data.len())?;
        let offset = to_u32("data section", self.next_offset)?;
        let member = ArchiveMember {
            path: path.to_string(),
            content: data.to_vec(),
            crc32: crc32(data),
            offset,
            size,
        };
        log::trace!(
            "scheduled {} at offset {} ({} bytes, crc {:#010x})",
            member.path,
            member.offset,
            member.size,
            member.crc32
        );

        self.next_offset += member.local_len();
        self.paths.insert(member.path.clone());
        self.members.push(member);
        Ok(&self.members[self.members.len() - 1])
    }

    /// Members in archive order.
    #[inline]
    pub fn members(&self) -> &[ArchiveMember] {
        &self.members
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Lay out all members and return the finished archive bytes.
    pub fn finish(self) -> Result<Vec<u8>, Error> {
        if self.members.is_empty() {
            return Err(ErrorKind::EmptyArchive.into());
        }
        let entries = u16::try_from(self.members.len())
            .map_err(|_| ErrorKind::TooManyEntries(self.members.len()))?;

        let directory_offset = to_u32("data section", self.next_offset)?;
        let directory_len: usize = self.members.iter().map(ArchiveMember::central_len).sum();
        let directory_size = to_u32("central directory", directory_len)?;
        let total_len = self.next_offset + directory_len + EndOfCentralDirectory::SIZE;

        let mut out = ByteWriter::with_len(total_len);

        for member in &self.members {
            if out.position() != member.offset as usize {
                return Err(ErrorKind::LayoutMismatch(format!(
                    "{} planned at offset {} but written at {}",
                    member.path,
                    member.offset,
                    out.position()
                ))
                .into());
            }
            out.put(member.local_header().to_bytes());
            out.put(member.path.as_bytes());
            out.put(&member.content);
        }

        if out.position() != directory_offset as usize {
            return Err(ErrorKind::LayoutMismatch(format!(
                "central directory planned at offset {} but written at {}",
                directory_offset,
                out.position()
            ))
            .into());
        }

        for member in &self.members {
            out.put(member.central_header().to_bytes());
            out.put(member.path.as_bytes());
        }

        out.put(
            EndOfCentralDirectory::single_disk(entries, directory_size, directory_offset)
                .to_bytes(),
        );

        let bytes = out.finish().ok_or_else(|| {
            ErrorKind::LayoutMismatch(format!("archive length differs from planned {}", total_len))
        })?;
        log::debug!(
            "encoded {} members into {} bytes (central directory at {}, {} bytes)",
            entries,
            bytes.len(),
            directory_offset,
            directory_size
        );
        Ok(bytes)
    }
}

/// Encode an ordered list of `(path, content)` pairs as a stored ZIP archive.
pub fn encode<P, C>(entries: &[(P, C)]) -> Result<Vec<u8>, Error>
where
    P: AsRef<str>,
    C: AsRef<[u8]>,
{
    let mut writer = ArchiveWriter::new();
    for (path, content) in entries {
        writer.write_stored(path.as_ref(), content.as_ref())?;
    }
    writer.finish()
}

fn validate_path(path: &str) -> Result<(), Error> {
    let invalid = path.is_empty()
        || path.starts_with('/')
        || path.ends_with('/')
        || path.contains('\\')
        || path.contains('\0')
        || path.split('/').any(str::is_empty);
    if invalid {
        return Err(ErrorKind::InvalidPath(path.to_string()).into());
    }
    Ok(())
}

fn to_u32(what: &'static str, value: usize) -> Result<u32, Error> {
    u32::try_from(value).map_err(|_| ErrorKind::TooLarge { what, value }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::{
        CENTRAL_DIRECTORY_SIGNATURE, END_OF_CENTRAL_DIRECTORY_SIGNATURE,
        LOCAL_FILE_HEADER_SIGNATURE,
    };

    fn u16_at(bytes: &[u8], pos: usize) -> u16 {
        u16::from_le_bytes([bytes[pos], bytes[pos + 1]])
    }

    fn u32_at(bytes: &[u8], pos: usize) -> u32 {
        u32::from_le_bytes([bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]])
    }

    #[test]
    fn test_single_member_layout() {
        let bytes = encode(&[("a.txt", b"hello".as_slice())]).unwrap();

        // 30 + 5 + 5 local, 46 + 5 central, 22 end record
        assert_eq!(bytes.len(), 40 + 51 + 22);
        assert_eq!(u32_at(&bytes, 0), LOCAL_FILE_HEADER_SIGNATURE);
        assert_eq!(&bytes[30..35], b"a.txt");
        assert_eq!(&bytes[35..40], b"hello");
        assert_eq!(u32_at(&bytes, 40), CENTRAL_DIRECTORY_SIGNATURE);
        assert_eq!(u32_at(&bytes, 40 + 42), 0);

        let end = bytes.len() - 22;
        assert_eq!(u32_at(&bytes, end), END_OF_CENTRAL_DIRECTORY_SIGNATURE);
        assert_eq!(u16_at(&bytes, end + 8), 1);
        assert_eq!(u16_at(&bytes, end + 10), 1);
        assert_eq!(u32_at(&bytes, end + 12), 51);
        assert_eq!(u32_at(&bytes, end + 16), 40);
        assert_eq!(u16_at(&bytes, end + 20), 0);
    }

    #[test]
    fn test_offsets_follow_insertion_order() {
        let mut writer = ArchiveWriter::new();
        writer.write_stored("first.xml", b"<a/>").unwrap();
        writer.write_stored("second.xml", b"<bb/>").unwrap();
        writer.write_stored("third.xml", b"").unwrap();

        let offsets: Vec<u32> = writer.members().iter().map(ArchiveMember::offset).collect();
        assert_eq!(offsets, vec![0, 30 + 9 + 4, 30 + 9 + 4 + 30 + 10 + 5]);

        let bytes = writer.finish().unwrap();
        for &offset in &offsets {
            assert_eq!(u32_at(&bytes, offset as usize), LOCAL_FILE_HEADER_SIGNATURE);
        }
    }

    #[test]
    fn test_crc_recorded_in_both_headers() {
        let bytes = encode(&[("x", b"123456789".as_slice())]).unwrap();
        assert_eq!(u32_at(&bytes, 14), 0xCBF4_3926);
        let central = 30 + 1 + 9;
        assert_eq!(u32_at(&bytes, central + 16), 0xCBF4_3926);
    }

    #[test]
    fn test_empty_member_is_allowed() {
        let bytes = encode(&[("empty", b"".as_slice())]).unwrap();
        assert_eq!(u32_at(&bytes, 14), 0);
        assert_eq!(u32_at(&bytes, 18), 0);
    }

    #[test]
    fn test_rejects_empty_archive() {
        let entries: [(&str, &[u8]); 0] = [];
        let err = encode(&entries).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::EmptyArchive);
    }

    #[test]
    fn test_rejects_duplicate_path() {
        let mut writer = ArchiveWriter::new();
        writer.write_stored("word/document.xml", b"1").unwrap();
        let err = writer.write_stored("word/document.xml", b"2").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::DuplicatePath(_)));
    }

    #[test]
    fn test_rejects_invalid_paths() {
        for path in ["", "/abs.xml", "dir/", "win\\path.xml", "a//b.xml"] {
            let mut writer = ArchiveWriter::new();
            let err = writer.write_stored(path, b"").unwrap_err();
            assert!(
                matches!(err.kind(), ErrorKind::InvalidPath(_)),
                "{path:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_bracketed_names_are_valid() {
        let bytes = encode(&[("[Content_Types].xml", b"<Types/>".as_slice())]).unwrap();
        assert_eq!(&bytes[30..49], b"[Content_Types].xml");
    }
}
