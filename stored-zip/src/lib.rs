//! Minimal ZIP archive encoder optimized for Office document packages.
//!
//! This crate writes the smallest ZIP subset every archive reader accepts:
//! stored (uncompressed) members, one central directory and one
//! end-of-central-directory record, on a single disk. It is used to assemble
//! OOXML (.docx) packages entirely in memory.
//!
//! # Quick Start
//!
//! ```rust
//! use stored_zip::{encode, inspect};
//!
//! // Writing
//! let bytes = encode(&[("word/document.xml", b"<w:document/>".as_slice())])?;
//!
//! // Verifying
//! let listing = inspect(&bytes)?;
//! assert_eq!(listing.read("word/document.xml"), Some(b"<w:document/>".as_slice()));
//! # Ok::<(), stored_zip::Error>(())
//! ```
#![forbid(unsafe_code)]

mod archive;
mod buffer;
mod crc;
mod errors;
mod headers;
mod writer;

pub use archive::{inspect, ArchiveEntry, ArchiveListing};
pub use crc::crc32;
pub use errors::{Error, ErrorKind};
pub use headers::{
    CentralDirectoryHeader, EndOfCentralDirectory, LocalFileHeader, CENTRAL_DIRECTORY_SIGNATURE,
    END_OF_CENTRAL_DIRECTORY_SIGNATURE, LOCAL_FILE_HEADER_SIGNATURE,
};
pub use writer::{encode, ArchiveMember, ArchiveWriter};
