/// Style writer support for DOCX documents.
///
/// The will template uses a fixed set of paragraph styles. Each one is a
/// [`Style`] definition rendered into `word/styles.xml`.
use crate::common::Result;
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

use super::super::format::ParagraphAlignment;

/// Font used throughout the document.
pub const BODY_FONT: &str = "Times New Roman";

/// Identifiers of the paragraph styles the document may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleId {
    Normal,
    Title,
    Subtitle,
    Heading1,
    Clause,
    Signature,
    Watermark,
    Notice,
}

impl StyleId {
    pub const ALL: [StyleId; 8] = [
        StyleId::Normal,
        StyleId::Title,
        StyleId::Subtitle,
        StyleId::Heading1,
        StyleId::Clause,
        StyleId::Signature,
        StyleId::Watermark,
        StyleId::Notice,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            StyleId::Normal => "Normal",
            StyleId::Title => "Title",
            StyleId::Subtitle => "Subtitle",
            StyleId::Heading1 => "Heading1",
            StyleId::Clause => "Clause",
            StyleId::Signature => "Signature",
            StyleId::Watermark => "Watermark",
            StyleId::Notice => "Notice",
        }
    }
}

/// A paragraph style definition for writing.
#[derive(Debug, Clone)]
pub struct Style {
    /// Style identifier (e.g., "Heading1")
    style_id: StyleId,
    /// UI-visible name (e.g., "heading 1")
    name: &'static str,
    /// Whether this is the default paragraph style
    is_default: bool,
    /// ID of the style this is based on
    based_on: Option<StyleId>,
    /// Style applied to the following paragraph
    next: Option<StyleId>,
    /// Whether to show in quick style gallery
    is_quick_style: bool,
    keep_next: bool,
    /// Space before paragraph in twips
    space_before: Option<u32>,
    /// Space after paragraph in twips
    space_after: Option<u32>,
    /// Line spacing in 240ths of a line
    line_spacing: Option<u32>,
    /// Left indent in twips
    indent_left: Option<u32>,
    alignment: Option<ParagraphAlignment>,
    font_name: Option<&'static str>,
    bold: bool,
    italic: bool,
    caps: bool,
    /// Font color (RGB hex)
    color: Option<&'static str>,
    /// Font size in half-points
    font_size: Option<u32>,
}

impl Style {
    /// Create a paragraph style based on `Normal`.
    pub fn new(style_id: StyleId, name: &'static str) -> Self {
        Self {
            style_id,
            name,
            is_default: false,
            based_on: Some(StyleId::Normal),
            next: None,
            is_quick_style: true,
            keep_next: false,
            space_before: None,
            space_after: None,
            line_spacing: None,
            indent_left: None,
            alignment: None,
            font_name: None,
            bold: false,
            italic: false,
            caps: false,
            color: None,
            font_size: None,
        }
    }

    #[inline]
    pub fn style_id(&self) -> StyleId {
        self.style_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name
    }

    /// Base style of the document. Every other style inherits from it.
    pub fn normal() -> Self {
        let mut style = Self::new(StyleId::Normal, "Normal");
        style.is_default = true;
        style.based_on = None;
        style.font_name = Some(BODY_FONT);
        style.font_size = Some(24);
        style.space_after = Some(120);
        style.line_spacing = Some(276);
        style
    }

    pub fn title() -> Self {
        let mut style = Self::new(StyleId::Title, "Title");
        style.next = Some(StyleId::Subtitle);
        style.alignment = Some(ParagraphAlignment::Center);
        style.space_after = Some(60);
        style.bold = true;
        style.caps = true;
        style.font_size = Some(36);
        style
    }

    pub fn subtitle() -> Self {
        let mut style = Self::new(StyleId::Subtitle, "Subtitle");
        style.alignment = Some(ParagraphAlignment::Center);
        style.space_after = Some(480);
        style.bold = true;
        style.font_size = Some(28);
        style
    }

    pub fn heading_1() -> Self {
        let mut style = Self::new(StyleId::Heading1, "heading 1");
        style.next = Some(StyleId::Clause);
        style.keep_next = true;
        style.space_before = Some(360);
        style.space_after = Some(120);
        style.bold = true;
        style.font_size = Some(26);
        style
    }

    pub fn clause() -> Self {
        let mut style = Self::new(StyleId::Clause, "Clause");
        style.alignment = Some(ParagraphAlignment::Justify);
        style.space_after = Some(160);
        style
    }

    pub fn signature() -> Self {
        let mut style = Self::new(StyleId::Signature, "Signature");
        style.keep_next = true;
        style.space_before = Some(240);
        style.space_after = Some(0);
        style
    }

    pub fn watermark() -> Self {
        let mut style = Self::new(StyleId::Watermark, "Watermark");
        style.alignment = Some(ParagraphAlignment::Center);
        style.space_after = Some(240);
        style.bold = true;
        style.color = Some("C00000");
        style.font_size = Some(28);
        style
    }

    pub fn notice() -> Self {
        let mut style = Self::new(StyleId::Notice, "Notice");
        style.alignment = Some(ParagraphAlignment::Center);
        style.space_before = Some(240);
        style.space_after = Some(240);
        style.bold = true;
        style.italic = true;
        style.color = Some("C00000");
        style
    }

    /// The fixed style table of the will template, in `styles.xml` order.
    pub fn legal_template() -> Vec<Style> {
        vec![
            Self::normal(),
            Self::title(),
            Self::subtitle(),
            Self::heading_1(),
            Self::clause(),
            Self::signature(),
            Self::watermark(),
            Self::notice(),
        ]
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<w:style w:type="paragraph" w:styleId="{}""#,
            self.style_id.as_str()
        )?;
        if self.is_default {
            xml.push_str(r#" w:default="1""#);
        }
        xml.push('>');

        write!(xml, r#"<w:name w:val="{}"/>"#, escape_xml(self.name))?;
        if let Some(based_on) = self.based_on {
            write!(xml, r#"<w:basedOn w:val="{}"/>"#, based_on.as_str())?;
        }
        if let Some(next) = self.next {
            write!(xml, r#"<w:next w:val="{}"/>"#, next.as_str())?;
        }
        if self.is_quick_style {
            xml.push_str("<w:qFormat/>");
        }

        let has_spacing =
            self.space_before.is_some() || self.space_after.is_some() || self.line_spacing.is_some();
        if self.keep_next || has_spacing || self.indent_left.is_some() || self.alignment.is_some() {
            xml.push_str("<w:pPr>");
            if self.keep_next {
                xml.push_str("<w:keepNext/>");
            }
            if has_spacing {
                xml.push_str("<w:spacing");
                if let Some(before) = self.space_before {
                    write!(xml, r#" w:before="{}""#, before)?;
                }
                if let Some(after) = self.space_after {
                    write!(xml, r#" w:after="{}""#, after)?;
                }
                if let Some(line) = self.line_spacing {
                    write!(xml, r#" w:line="{}" w:lineRule="auto""#, line)?;
                }
                xml.push_str("/>");
            }
            if let Some(left) = self.indent_left {
                write!(xml, r#"<w:ind w:left="{}"/>"#, left)?;
            }
            if let Some(alignment) = self.alignment {
                write!(xml, r#"<w:jc w:val="{}"/>"#, alignment.as_str())?;
            }
            xml.push_str("</w:pPr>");
        }

        let has_run_props = self.font_name.is_some()
            || self.bold
            || self.italic
            || self.caps
            || self.color.is_some()
            || self.font_size.is_some();
        if has_run_props {
            xml.push_str("<w:rPr>");
            if let Some(font) = self.font_name {
                let font = escape_xml(font);
                write!(
                    xml,
                    r#"<w:rFonts w:ascii="{}" w:hAnsi="{}" w:cs="{}"/>"#,
                    font, font, font
                )?;
            }
            if self.bold {
                xml.push_str("<w:b/>");
            }
            if self.italic {
                xml.push_str("<w:i/>");
            }
            if self.caps {
                xml.push_str("<w:caps/>");
            }
            if let Some(color) = self.color {
                write!(xml, r#"<w:color w:val="{}"/>"#, color)?;
            }
            if let Some(size) = self.font_size {
                write!(xml, r#"<w:sz w:val="{}"/><w:szCs w:val="{}"/>"#, size, size)?;
            }
            xml.push_str("</w:rPr>");
        }

        xml.push_str("</w:style>");
        Ok(())
    }
}

/// Generate the complete `styles.xml` content.
pub fn generate_styles_xml(styles: &[Style]) -> Result<String> {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    write!(
        xml,
        r#"<w:styles xmlns:w="{}" xmlns:r="{}">"#,
        namespace::WML_MAIN,
        namespace::OFC_RELATIONSHIPS
    )?;

    xml.push_str("<w:docDefaults>");
    xml.push_str("<w:rPrDefault><w:rPr>");
    write!(
        xml,
        r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
        BODY_FONT
    )?;
    xml.push_str(r#"<w:sz w:val="24"/>"#);
    xml.push_str(r#"<w:szCs w:val="24"/>"#);
    xml.push_str(r#"<w:lang w:val="en-US"/>"#);
    xml.push_str("</w:rPr></w:rPrDefault>");
    xml.push_str("<w:pPrDefault/>");
    xml.push_str("</w:docDefaults>");

    for style in styles {
        style.to_xml(&mut xml)?;
    }

    xml.push_str("</w:styles>");

    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_covers_every_style_id() {
        let styles = Style::legal_template();
        let ids: Vec<StyleId> = styles.iter().map(Style::style_id).collect();
        assert_eq!(ids, StyleId::ALL.to_vec());
    }

    #[test]
    fn test_normal_is_default() {
        let mut xml = String::new();
        Style::normal().to_xml(&mut xml).unwrap();
        assert!(xml.starts_with(r#"<w:style w:type="paragraph" w:styleId="Normal" w:default="1">"#));
        assert!(!xml.contains("w:basedOn"));
        assert!(xml.contains(r#"w:ascii="Times New Roman""#));
    }

    #[test]
    fn test_heading_properties() {
        let h1 = Style::heading_1();
        assert_eq!(h1.name(), "heading 1");

        let mut xml = String::new();
        h1.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<w:basedOn w:val="Normal"/>"#));
        assert!(xml.contains(r#"<w:next w:val="Clause"/>"#));
        assert!(xml.contains(r#"<w:pPr><w:keepNext/><w:spacing w:before="360" w:after="120"/></w:pPr>"#));
        assert!(xml.contains(r#"<w:rPr><w:b/><w:sz w:val="26"/><w:szCs w:val="26"/></w:rPr>"#));
    }

    #[test]
    fn test_generate_styles_xml() {
        let xml = generate_styles_xml(&Style::legal_template()).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
        assert!(xml.contains("<w:docDefaults>"));
        for id in StyleId::ALL {
            assert!(xml.contains(&format!(r#"w:styleId="{}""#, id.as_str())));
        }
        assert!(xml.ends_with("</w:styles>"));
    }
}
