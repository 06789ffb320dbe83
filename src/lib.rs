//! testament-docx - In-memory generation of last-will-and-testament documents
//!
//! This library renders a structured will description into a Word document
//! (`.docx`, an OOXML package) without any archive or document-authoring
//! dependency. The package is a stored-only ZIP archive produced by the
//! [`stored_zip`] crate.
//!
//! # Features
//!
//! - **Part builder**: document body, styles, relationships, content types and
//!   metadata parts, with all user text XML-escaped
//! - **Article plan**: optional articles (guardian, specific gifts) shift the
//!   numbering of the articles after them
//! - **Verified output**: every produced archive is read back and its offsets,
//!   sizes and CRCs checked before it is returned
//! - **YAML input**: will descriptions load with serde
//!
//! # Example
//!
//! ```
//! use testament_docx::{GenerateOptions, WillInput, generate};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let will = WillInput::new("Jane A. Doe", "John Smith")
//!     .with_gift("Alice", "My Car")
//!     .with_residuary("Bob", 100.0)
//!     .with_witness("W1")
//!     .with_witness("W2");
//!
//! let doc = generate(&will, &GenerateOptions::default())?;
//! assert_eq!(doc.filename, "Jane_A_Doe_Last_Will_and_Testament.docx");
//! assert_eq!(&doc.bytes[..2], b"PK");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting the parts
//!
//! ```
//! use testament_docx::{GenerateOptions, WillInput, build_parts};
//! use testament_docx::ooxml::opc::PartName;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let will = WillInput::new("Jane", "John").with_residuary("Bob", 100.0);
//! let manifest = build_parts(&will, &GenerateOptions::sample())?;
//!
//! let body = manifest.get(PartName::Document).unwrap_or_default();
//! assert!(body.contains("ARTICLE III: RESIDUARY ESTATE"));
//! assert!(body.contains("DRAFT - SAMPLE FOR REFERENCE"));
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod generate;
pub mod ooxml;
pub mod options;
pub mod will;

pub use common::{Error, Result};
pub use generate::{DOCX_MIME_TYPE, GeneratedDocument, generate, suggested_filename};
pub use ooxml::opc::ArchiveManifest;
pub use options::GenerateOptions;
pub use will::{ResiduaryShare, SpecificGift, WillInput, build_parts};

pub use stored_zip;
