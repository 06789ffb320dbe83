//! Word document (.docx) generation.
pub mod format;
pub mod writer;

pub use format::ParagraphAlignment;
pub use writer::{Document, Paragraph, Run, Style, StyleId};
