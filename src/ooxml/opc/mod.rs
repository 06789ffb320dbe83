//! Open Packaging Conventions (OPC) support for generated packages.
//!
//! This module provides the package-level pieces of an OOXML document:
//!
//! - Part names and their content types
//! - The `[Content_Types].xml` manifest
//! - Relationship (`.rels`) parts
//! - The ordered set of parts handed to the ZIP encoder
pub mod constants;
pub mod content_types;
pub mod package;
pub mod packuri;
pub mod rel;

// Re-export commonly used types
pub use content_types::ContentTypesItem;
pub use package::ArchiveManifest;
pub use packuri::PartName;
pub use rel::{Relationship, Relationships};
