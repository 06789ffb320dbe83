/// Run types and implementation for DOCX documents.
use crate::common::Result;
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

/// A run of text.
///
/// Character formatting comes from the paragraph style. The text is stored
/// unescaped and escaped once when the run is serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    text: String,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the text content.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:r>");
        write!(
            xml,
            "<w:t xml:space=\"preserve\">{}</w:t>",
            escape_xml(&self.text)
        )?;
        xml.push_str("</w:r>");
        Ok(())
    }
}
