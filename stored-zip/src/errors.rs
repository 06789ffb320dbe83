//! Error types for archive encoding and inspection.
use thiserror::Error;

/// The error returned by every fallible operation in this crate.
///
/// The concrete failure is available through [`Error::kind`].
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(#[from] ErrorKind);

impl Error {
    /// The specific failure behind this error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }
}

/// The specific failure behind an [`Error`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No members were supplied to the encoder
    #[error("archive has no members")]
    EmptyArchive,

    /// Member path is empty, absolute, or uses backslashes
    #[error("invalid member path {0:?}")]
    InvalidPath(String),

    /// The same member path was supplied twice
    #[error("duplicate member path {0:?}")]
    DuplicatePath(String),

    /// A size or offset does not fit the 32-bit ZIP fields
    #[error("{what} of {value} bytes exceeds the ZIP32 limit")]
    TooLarge { what: &'static str, value: usize },

    /// More members than the 16-bit entry count can hold
    #[error("{0} members exceed the ZIP32 entry limit")]
    TooManyEntries(usize),

    /// Buffer ends before a record it references
    #[error("archive truncated: {0}")]
    Truncated(&'static str),

    /// A record does not start with its expected signature
    #[error("bad {record} signature at offset {offset}")]
    BadSignature { record: &'static str, offset: usize },

    /// No end-of-central-directory record could be located
    #[error("end of central directory record not found")]
    MissingEndRecord,

    /// Recorded offsets or sizes disagree with the actual layout
    #[error("layout mismatch: {0}")]
    LayoutMismatch(String),

    /// A member uses a compression method other than stored
    #[error("member {path:?} uses unsupported compression method {method}")]
    UnsupportedCompressionMethod { path: String, method: u16 },

    /// Stored bytes do not match the recorded checksum
    #[error("CRC mismatch for {path:?}: recorded {recorded:#010x}, computed {computed:#010x}")]
    CrcMismatch {
        path: String,
        recorded: u32,
        computed: u32,
    },

    /// Member name is not valid UTF-8
    #[error("member name at offset {0} is not valid UTF-8")]
    InvalidName(usize),
}
