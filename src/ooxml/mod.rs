//! Office Open XML (OOXML) package generation.
//!
//! The module is organized into layers:
//!
//! 1. **OPC Layer** (`opc`): part names, content types, relationships and the
//!    ordered manifest handed to the archive encoder
//! 2. **Shared parts** (`common`): core and extended document properties
//! 3. **Word processing** (`docx`): paragraphs, runs, styles and the document body
pub mod common;
pub mod docx;
pub mod opc;
