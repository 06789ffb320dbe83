//! Fixed-size ZIP records.
//!
//! Every multi-byte field is stored as a little-endian byte array so the
//! structs have no padding and serialize with `as_bytes()` directly.
use zerocopy::{FromBytes, IntoBytes};
use zerocopy_derive::{
    FromBytes as DeriveFromBytes, Immutable, IntoBytes as DeriveIntoBytes, KnownLayout,
};

/// Signature opening every local file header (`PK\x03\x04`)
pub const LOCAL_FILE_HEADER_SIGNATURE: u32 = 0x0403_4B50;

/// Signature opening every central directory entry (`PK\x01\x02`)
pub const CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0201_4B50;

/// Signature opening the end-of-central-directory record (`PK\x05\x06`)
pub const END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0605_4B50;

/// ZIP specification version 2.0, the minimum for stored members.
pub(crate) const VERSION_20: u16 = 20;

/// Compression method 0: stored without compression.
pub(crate) const METHOD_STORED: u16 = 0;

/// Local file header (30 bytes, followed by the file name).
#[repr(C)]
#[derive(Debug, Clone, Copy, DeriveIntoBytes, DeriveFromBytes, Immutable, KnownLayout)]
pub struct LocalFileHeader {
    signature: [u8; 4],
    version_needed: [u8; 2],
    flags: [u8; 2],
    compression_method: [u8; 2],
    mod_time: [u8; 2],
    mod_date: [u8; 2],
    crc32: [u8; 4],
    compressed_size: [u8; 4],
    uncompressed_size: [u8; 4],
    name_len: [u8; 2],
    extra_len: [u8; 2],
}

impl LocalFileHeader {
    /// Serialized size without the trailing name.
    pub const SIZE: usize = 30;

    /// Header for a stored member with zero timestamp and no extra field.
    pub fn stored(crc32: u32, size: u32, name_len: u16) -> Self {
        Self {
            signature: LOCAL_FILE_HEADER_SIGNATURE.to_le_bytes(),
            version_needed: VERSION_20.to_le_bytes(),
            flags: 0u16.to_le_bytes(),
            compression_method: METHOD_STORED.to_le_bytes(),
            mod_time: 0u16.to_le_bytes(),
            mod_date: 0u16.to_le_bytes(),
            crc32: crc32.to_le_bytes(),
            compressed_size: size.to_le_bytes(),
            uncompressed_size: size.to_le_bytes(),
            name_len: name_len.to_le_bytes(),
            extra_len: 0u16.to_le_bytes(),
        }
    }

    /// Parse a header from the start of `data`.
    pub fn parse(data: &[u8]) -> Option<Self> {
        Self::read_from_prefix(data).ok().map(|(header, _)| header)
    }

    #[inline]
    pub fn signature(&self) -> u32 {
        u32::from_le_bytes(self.signature)
    }

    #[inline]
    pub fn compression_method(&self) -> u16 {
        u16::from_le_bytes(self.compression_method)
    }

    #[inline]
    pub fn crc32(&self) -> u32 {
        u32::from_le_bytes(self.crc32)
    }

    #[inline]
    pub fn compressed_size(&self) -> u32 {
        u32::from_le_bytes(self.compressed_size)
    }

    #[inline]
    pub fn uncompressed_size(&self) -> u32 {
        u32::from_le_bytes(self.uncompressed_size)
    }

    #[inline]
    pub fn name_len(&self) -> u16 {
        u16::from_le_bytes(self.name_len)
    }

    #[inline]
    pub fn extra_len(&self) -> u16 {
        u16::from_le_bytes(self.extra_len)
    }

    /// Raw little-endian bytes of this header.
    #[inline]
    pub fn to_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Central directory file header (46 bytes, followed by the file name).
#[repr(C)]
#[derive(Debug, Clone, Copy, DeriveIntoBytes, DeriveFromBytes, Immutable, KnownLayout)]
pub struct CentralDirectoryHeader {
    signature: [u8; 4],
    version_made_by: [u8; 2],
    version_needed: [u8; 2],
    flags: [u8; 2],
    compression_method: [u8; 2],
    mod_time: [u8; 2],
    mod_date: [u8; 2],
    crc32: [u8; 4],
    compressed_size: [u8; 4],
    uncompressed_size: [u8; 4],
    name_len: [u8; 2],
    extra_len: [u8; 2],
    comment_len: [u8; 2],
    disk_number_start: [u8; 2],
    internal_attributes: [u8; 2],
    external_attributes: [u8; 4],
    local_header_offset: [u8; 4],
}

impl CentralDirectoryHeader {
    /// Serialized size without the trailing name.
    pub const SIZE: usize = 46;

    /// Directory entry for a stored member whose local header sits at `offset`.
    pub fn stored(crc32: u32, size: u32, name_len: u16, offset: u32) -> Self {
        Self {
            signature: CENTRAL_DIRECTORY_SIGNATURE.to_le_bytes(),
            version_made_by: VERSION_20.to_le_bytes(),
            version_needed: VERSION_20.to_le_bytes(),
            flags: 0u16.to_le_bytes(),
            compression_method: METHOD_STORED.to_le_bytes(),
            mod_time: 0u16.to_le_bytes(),
            mod_date: 0u16.to_le_bytes(),
            crc32: crc32.to_le_bytes(),
            compressed_size: size.to_le_bytes(),
            uncompressed_size: size.to_le_bytes(),
            name_len: name_len.to_le_bytes(),
            extra_len: 0u16.to_le_bytes(),
            comment_len: 0u16.to_le_bytes(),
            disk_number_start: 0u16.to_le_bytes(),
            internal_attributes: 0u16.to_le_bytes(),
            external_attributes: 0u32.to_le_bytes(),
            local_header_offset: offset.to_le_bytes(),
        }
    }

    /// Parse a directory entry from the start of `data`.
    pub fn parse(data: &[u8]) -> Option<Self> {
        Self::read_from_prefix(data).ok().map(|(header, _)| header)
    }

    #[inline]
    pub fn signature(&self) -> u32 {
        u32::from_le_bytes(self.signature)
    }

    #[inline]
    pub fn compression_method(&self) -> u16 {
        u16::from_le_bytes(self.compression_method)
    }

    #[inline]
    pub fn crc32(&self) -> u32 {
        u32::from_le_bytes(self.crc32)
    }

    #[inline]
    pub fn compressed_size(&self) -> u32 {
        u32::from_le_bytes(self.compressed_size)
    }

    #[inline]
    pub fn uncompressed_size(&self) -> u32 {
        u32::from_le_bytes(self.uncompressed_size)
    }

    #[inline]
    pub fn name_len(&self) -> u16 {
        u16::from_le_bytes(self.name_len)
    }

    #[inline]
    pub fn extra_len(&self) -> u16 {
        u16::from_le_bytes(self.extra_len)
    }

    #[inline]
    pub fn comment_len(&self) -> u16 {
        u16::from_le_bytes(self.comment_len)
    }

    #[inline]
    pub fn local_header_offset(&self) -> u32 {
        u32::from_le_bytes(self.local_header_offset)
    }

    /// Raw little-endian bytes of this header.
    #[inline]
    pub fn to_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// End-of-central-directory record (22 bytes, no comment).
#[repr(C)]
#[derive(Debug, Clone, Copy, DeriveIntoBytes, DeriveFromBytes, Immutable, KnownLayout)]
pub struct EndOfCentralDirectory {
    signature: [u8; 4],
    disk_number: [u8; 2],
    central_directory_disk: [u8; 2],
    entries_on_disk: [u8; 2],
    entries_total: [u8; 2],
    central_directory_size: [u8; 4],
    central_directory_offset: [u8; 4],
    comment_len: [u8; 2],
}

impl EndOfCentralDirectory {
    /// Serialized size of the record.
    pub const SIZE: usize = 22;

    /// Trailer for a single-disk archive.
    pub fn single_disk(entries: u16, directory_size: u32, directory_offset: u32) -> Self {
        Self {
            signature: END_OF_CENTRAL_DIRECTORY_SIGNATURE.to_le_bytes(),
            disk_number: 0u16.to_le_bytes(),
            central_directory_disk: 0u16.to_le_bytes(),
            entries_on_disk: entries.to_le_bytes(),
            entries_total: entries.to_le_bytes(),
            central_directory_size: directory_size.to_le_bytes(),
            central_directory_offset: directory_offset.to_le_bytes(),
            comment_len: 0u16.to_le_bytes(),
        }
    }

    /// Parse the record from the start of `data`.
    pub fn parse(data: &[u8]) -> Option<Self> {
        Self::read_from_prefix(data).ok().map(|(record, _)| record)
    }

    #[inline]
    pub fn signature(&self) -> u32 {
        u32::from_le_bytes(self.signature)
    }

    #[inline]
    pub fn disk_number(&self) -> u16 {
        u16::from_le_bytes(self.disk_number)
    }

    #[inline]
    pub fn entries_on_disk(&self) -> u16 {
        u16::from_le_bytes(self.entries_on_disk)
    }

    #[inline]
    pub fn entries_total(&self) -> u16 {
        u16::from_le_bytes(self.entries_total)
    }

    #[inline]
    pub fn central_directory_size(&self) -> u32 {
        u32::from_le_bytes(self.central_directory_size)
    }

    #[inline]
    pub fn central_directory_offset(&self) -> u32 {
        u32::from_le_bytes(self.central_directory_offset)
    }

    #[inline]
    pub fn comment_len(&self) -> u16 {
        u16::from_le_bytes(self.comment_len)
    }

    /// Raw little-endian bytes of this record.
    #[inline]
    pub fn to_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

// Layout guards: the derived byte views must match the ZIP record sizes.
const _: () = {
    assert!(std::mem::size_of::<LocalFileHeader>() == LocalFileHeader::SIZE);
    assert!(std::mem::size_of::<CentralDirectoryHeader>() == CentralDirectoryHeader::SIZE);
    assert!(std::mem::size_of::<EndOfCentralDirectory>() == EndOfCentralDirectory::SIZE);
};
