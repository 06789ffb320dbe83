/// Paragraph types and implementation for DOCX documents.
use crate::common::Result;
use std::fmt::Write as FmtWrite;

pub use super::super::format::ParagraphAlignment;
use super::run::Run;
use super::style::StyleId;

/// Paragraph-level formatting that overrides the paragraph style.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ParagraphProperties {
    pub(crate) alignment: Option<ParagraphAlignment>,
    /// Twips
    pub(crate) indent_left: Option<u32>,
    pub(crate) keep_next: bool,
    pub(crate) page_break_before: bool,
}

impl ParagraphProperties {
    fn has_properties(&self) -> bool {
        self.alignment.is_some()
            || self.indent_left.is_some()
            || self.keep_next
            || self.page_break_before
    }
}

/// A paragraph in a document.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub(crate) runs: Vec<Run>,
    pub(crate) style: Option<StyleId>,
    pub(crate) properties: ParagraphProperties,
}

impl Paragraph {
    /// Create an empty paragraph with a style applied.
    pub fn styled(style: StyleId) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }

    /// Create a styled paragraph holding a single run.
    pub fn with_text(style: StyleId, text: impl Into<String>) -> Self {
        let mut para = Self::styled(style);
        para.add_run(text);
        para
    }

    /// Add a run with text.
    pub fn add_run(&mut self, text: impl Into<String>) -> &mut Run {
        self.runs.push(Run::new(text));
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    #[inline]
    pub fn style(&self) -> Option<StyleId> {
        self.style
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    /// Set paragraph alignment.
    pub fn set_alignment(&mut self, alignment: ParagraphAlignment) -> &mut Self {
        self.properties.alignment = Some(alignment);
        self
    }

    /// Set left indentation (in twips).
    pub fn set_indent_left(&mut self, twips: u32) -> &mut Self {
        self.properties.indent_left = Some(twips);
        self
    }

    /// Keep this paragraph on the same page as the next one.
    pub fn keep_with_next(&mut self) -> &mut Self {
        self.properties.keep_next = true;
        self
    }

    /// Start this paragraph on a new page.
    pub fn page_break_before(&mut self) -> &mut Self {
        self.properties.page_break_before = true;
        self
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:p>");

        if self.style.is_some() || self.properties.has_properties() {
            xml.push_str("<w:pPr>");

            if let Some(style) = self.style {
                write!(xml, "<w:pStyle w:val=\"{}\"/>", style.as_str())?;
            }

            if self.properties.keep_next {
                xml.push_str("<w:keepNext/>");
            }

            if self.properties.page_break_before {
                xml.push_str("<w:pageBreakBefore/>");
            }

            if let Some(left) = self.properties.indent_left {
                write!(xml, "<w:ind w:left=\"{}\"/>", left)?;
            }

            if let Some(alignment) = self.properties.alignment {
                write!(xml, "<w:jc w:val=\"{}\"/>", alignment.as_str())?;
            }

            xml.push_str("</w:pPr>");
        }

        for run in &self.runs {
            run.to_xml(xml)?;
        }

        xml.push_str("</w:p>");
        Ok(())
    }
}
