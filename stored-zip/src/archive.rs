//! Read-back verification of stored archives.
//!
//! [`inspect`] walks an archive the way a strict reader would: it locates the
//! end-of-central-directory record, follows every central directory entry to
//! its local header, and recomputes each member's CRC-32. Any disagreement
//! between the recorded and actual layout is reported as an error.
use crate::crc::crc32;
use crate::errors::{Error, ErrorKind};
use crate::headers::{
    CentralDirectoryHeader, EndOfCentralDirectory, LocalFileHeader, CENTRAL_DIRECTORY_SIGNATURE,
    END_OF_CENTRAL_DIRECTORY_SIGNATURE, LOCAL_FILE_HEADER_SIGNATURE, METHOD_STORED,
};
use std::ops::Range;

/// Maximum trailing comment a ZIP32 end record may carry.
const MAX_COMMENT_LEN: usize = u16::MAX as usize;

/// A verified member of an inspected archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Member path as recorded in the central directory
    pub path: String,
    /// Position of the local header
    pub offset: u32,
    /// Stored size in bytes
    pub size: u32,
    /// Recorded (and verified) CRC-32
    pub crc32: u32,
    data: Range<usize>,
}

/// The verified table of contents of an archive.
#[derive(Debug)]
pub struct ArchiveListing<'data> {
    data: &'data [u8],
    entries: Vec<ArchiveEntry>,
    directory_offset: u32,
    directory_size: u32,
}

impl<'data> ArchiveListing<'data> {
    /// Entries in central directory order.
    #[inline]
    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Member paths in central directory order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.path.as_str())
    }

    /// Stored bytes of the member at `path`.
    pub fn read(&self, path: &str) -> Option<&'data [u8]> {
        let data = self.data;
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| &data[entry.data.clone()])
    }

    /// Offset recorded in the end record for the start of the central directory.
    #[inline]
    pub fn central_directory_offset(&self) -> u32 {
        self.directory_offset
    }

    #[inline]
    pub fn central_directory_size(&self) -> u32 {
        self.directory_size
    }
}

/// Parse and verify a stored-only ZIP archive.
pub fn inspect(data: &[u8]) -> Result<ArchiveListing<'_>, Error> {
    let end_pos = find_end_record(data)?;
    let end = EndOfCentralDirectory::parse(&data[end_pos..])
        .ok_or(ErrorKind::Truncated("end of central directory"))?;

    if end.disk_number() != 0 || end.entries_on_disk() != end.entries_total() {
        return Err(ErrorKind::LayoutMismatch("multi-disk archives are not supported".into()).into());
    }

    let directory_offset = end.central_directory_offset() as usize;
    let directory_end = directory_offset + end.central_directory_size() as usize;
    if directory_end != end_pos {
        return Err(ErrorKind::LayoutMismatch(format!(
            "central directory spans {}..{} but end record starts at {}",
            directory_offset, directory_end, end_pos
        ))
        .into());
    }

    let mut entries = Vec::with_capacity(usize::from(end.entries_total()));
    let mut pos = directory_offset;
    for _ in 0..end.entries_total() {
        let (entry, next) = read_directory_entry(data, pos, directory_offset)?;
        entries.push(entry);
        pos = next;
    }

    if pos != directory_end {
        return Err(ErrorKind::LayoutMismatch(format!(
            "central directory entries end at {} but size implies {}",
            pos, directory_end
        ))
        .into());
    }

    Ok(ArchiveListing {
        data,
        entries,
        directory_offset: end.central_directory_offset(),
        directory_size: end.central_directory_size(),
    })
}

/// Scan backwards for an end record whose comment length reaches exactly to EOF.
fn find_end_record(data: &[u8]) -> Result<usize, Error> {
    if data.len() < EndOfCentralDirectory::SIZE {
        return Err(ErrorKind::Truncated("shorter than an end record").into());
    }

    let last = data.len() - EndOfCentralDirectory::SIZE;
    let first = last.saturating_sub(MAX_COMMENT_LEN);
    (first..=last)
        .rev()
        .find(|&pos| {
            EndOfCentralDirectory::parse(&data[pos..]).is_some_and(|record| {
                record.signature() == END_OF_CENTRAL_DIRECTORY_SIGNATURE
                    && pos + EndOfCentralDirectory::SIZE + usize::from(record.comment_len())
                        == data.len()
            })
        })
        .ok_or_else(|| ErrorKind::MissingEndRecord.into())
}

/// Read one central directory entry at `pos` and verify its local header.
///
/// Returns the entry and the position of the next directory entry.
fn read_directory_entry(
    data: &[u8],
    pos: usize,
    directory_offset: usize,
) -> Result<(ArchiveEntry, usize), Error> {
    let central = data
        .get(pos..)
        .and_then(CentralDirectoryHeader::parse)
        .ok_or(ErrorKind::Truncated("central directory entry"))?;
    if central.signature() != CENTRAL_DIRECTORY_SIGNATURE {
        return Err(ErrorKind::BadSignature {
            record: "central directory",
            offset: pos,
        }
        .into());
    }

    let name_start = pos + CentralDirectoryHeader::SIZE;
    let name = slice(data, name_start, usize::from(central.name_len()), "central name")?;
    let path = std::str::from_utf8(name)
        .map_err(|_| ErrorKind::InvalidName(name_start))?
        .to_string();
    let next = name_start
        + name.len()
        + usize::from(central.extra_len())
        + usize::from(central.comment_len());

    if central.compression_method() != METHOD_STORED {
        return Err(ErrorKind::UnsupportedCompressionMethod {
            path,
            method: central.compression_method(),
        }
        .into());
    }

    let offset = central.local_header_offset() as usize;
    let local = data
        .get(offset..)
        .and_then(LocalFileHeader::parse)
        .ok_or(ErrorKind::Truncated("local file header"))?;
    if local.signature() != LOCAL_FILE_HEADER_SIGNATURE {
        return Err(ErrorKind::BadSignature {
            record: "local file header",
            offset,
        }
        .into());
    }

    let local_name_start = offset + LocalFileHeader::SIZE;
    let local_name = slice(data, local_name_start, usize::from(local.name_len()), "local name")?;
    if local_name != name {
        return Err(ErrorKind::LayoutMismatch(format!(
            "local header at {} names a different member than {:?}",
            offset, path
        ))
        .into());
    }

    if local.compression_method() != central.compression_method()
        || local.crc32() != central.crc32()
        || local.compressed_size() != central.compressed_size()
        || local.uncompressed_size() != central.uncompressed_size()
        || central.compressed_size() != central.uncompressed_size()
    {
        return Err(ErrorKind::LayoutMismatch(format!(
            "local and central headers disagree for {:?}",
            path
        ))
        .into());
    }

    let data_start = local_name_start + local_name.len() + usize::from(local.extra_len());
    let size = central.uncompressed_size() as usize;
    let content = slice(data, data_start, size, "member data")?;
    if data_start + size > directory_offset {
        return Err(ErrorKind::LayoutMismatch(format!(
            "{:?} overlaps the central directory",
            path
        ))
        .into());
    }

    let computed = crc32(content);
    if computed != central.crc32() {
        return Err(ErrorKind::CrcMismatch {
            path,
            recorded: central.crc32(),
            computed,
        }
        .into());
    }

    let entry = ArchiveEntry {
        path,
        offset: central.local_header_offset(),
        size: central.uncompressed_size(),
        crc32: central.crc32(),
        data: data_start..data_start + size,
    };
    Ok((entry, next))
}

fn slice<'a>(data: &'a [u8], start: usize, len: usize, what: &'static str) -> Result<&'a [u8], Error> {
    data.get(start..start + len)
        .ok_or_else(|| ErrorKind::Truncated(what).into())
}
