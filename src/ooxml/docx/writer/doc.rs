/// Document writer: body paragraphs plus page layout.
use crate::common::Result;
use crate::ooxml::opc::constants::{namespace, relationship_type as rt};
use crate::ooxml::opc::rel::Relationships;
use std::fmt::Write as FmtWrite;

use super::paragraph::Paragraph;
use super::style::StyleId;

/// Page size and margins of the single document section, in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub page_width: u32,
    pub page_height: u32,
    pub margin_top: u32,
    pub margin_right: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub header_distance: u32,
    pub footer_distance: u32,
}

impl SectionLayout {
    /// US Letter with one-inch margins.
    pub const LETTER: SectionLayout = SectionLayout {
        page_width: 12240,
        page_height: 15840,
        margin_top: 1440,
        margin_right: 1440,
        margin_bottom: 1440,
        margin_left: 1440,
        header_distance: 720,
        footer_distance: 720,
    };
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self::LETTER
    }
}

/// A word-processing document body under construction.
#[derive(Debug, Clone, Default)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
    section: SectionLayout,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a styled paragraph holding one run of text.
    pub fn add_text(&mut self, style: StyleId, text: impl Into<String>) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::with_text(style, text));
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Paragraphs with the given style, in document order.
    pub fn paragraphs_with_style(&self, style: StyleId) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs
            .iter()
            .filter(move |p| p.style() == Some(style))
    }

    /// Generate `word/document.xml`.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(16 * 1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write!(
            xml,
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespace::WML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;
        xml.push_str("<w:body>");

        for paragraph in &self.paragraphs {
            paragraph.to_xml(&mut xml)?;
        }

        // The sectPr must be the last element in the body
        self.write_section_properties(&mut xml)?;

        xml.push_str("</w:body>");
        xml.push_str("</w:document>");
        Ok(xml)
    }

    fn write_section_properties(&self, xml: &mut String) -> Result<()> {
        let s = &self.section;
        xml.push_str("<w:sectPr>");
        write!(xml, r#"<w:pgSz w:w="{}" w:h="{}"/>"#, s.page_width, s.page_height)?;
        write!(
            xml,
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="0"/>"#,
            s.margin_top,
            s.margin_right,
            s.margin_bottom,
            s.margin_left,
            s.header_distance,
            s.footer_distance
        )?;
        xml.push_str("</w:sectPr>");
        Ok(())
    }

    /// Relationships of the main document part (`word/_rels/document.xml.rels`).
    pub fn relationships() -> Relationships {
        let mut rels = Relationships::new();
        rels.add_relationship(rt::STYLES, "styles.xml");
        rels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_generation() {
        let mut doc = Document::new();
        doc.add_text(StyleId::Title, "Hello & goodbye");

        let xml = doc.to_xml().unwrap();
        assert!(xml.contains("<w:document"));
        assert!(xml.contains(r#"<w:pStyle w:val="Title"/>"#));
        assert!(xml.contains("Hello &amp; goodbye"));
        assert!(xml.contains(r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/>"#));
        assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
    }

    #[test]
    fn test_paragraphs_with_style() {
        let mut doc = Document::new();
        doc.add_text(StyleId::Heading1, "A");
        doc.add_text(StyleId::Clause, "B");
        doc.add_text(StyleId::Heading1, "C");

        let headings: Vec<String> = doc
            .paragraphs_with_style(StyleId::Heading1)
            .map(Paragraph::text)
            .collect();
        assert_eq!(headings, vec!["A", "C"]);
    }

    #[test]
    fn test_relationships() {
        let xml = Document::relationships().to_xml();
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(r#"Target="styles.xml""#));
    }
}
