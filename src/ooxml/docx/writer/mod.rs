//! Document writer components for DOCX.
//!
//! This module provides the writer API for creating Word documents from
//! styled paragraphs and runs.

pub mod doc;
pub mod paragraph;
pub mod run;
pub mod style;

pub use doc::{Document, SectionLayout};
pub use paragraph::{Paragraph, ParagraphAlignment};
pub use run::Run;
pub use style::{Style, StyleId, generate_styles_xml};
