//! Document metadata parts.
//!
//! [`CoreProperties`] renders `docProps/core.xml` (Dublin Core title, author
//! and timestamps) and [`AppProperties`] renders `docProps/app.xml`
//! (extended properties naming the producing application).

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use chrono::{DateTime, Utc};

/// W3CDTF timestamp format used by `dcterms:created`/`dcterms:modified`.
const W3CDTF: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Document core properties (metadata).
///
/// These properties are stored in the `docProps/core.xml` file in the OPC package.
#[derive(Debug, Clone)]
pub struct CoreProperties {
    /// Document title
    pub title: Option<String>,
    /// Document creator/author
    pub creator: Option<String>,
    /// Last modified by
    pub last_modified_by: Option<String>,
    /// Creation and modification date
    pub timestamp: DateTime<Utc>,
}

impl CoreProperties {
    /// Create properties stamped with `timestamp` and no other fields.
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            title: None,
            creator: None,
            last_modified_by: None,
            timestamp,
        }
    }

    /// Set the document title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the document creator/author.
    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }

    /// Set who last modified the document.
    pub fn last_modified_by(mut self, name: &str) -> Self {
        self.last_modified_by = Some(name.to_string());
        self
    }

    /// Generate core.xml content for this properties set.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(768);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<cp:coreProperties xmlns:cp=""#);
        xml.push_str(namespace::OPC_CORE_PROPERTIES);
        xml.push_str(r#"" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        if let Some(ref title) = self.title {
            xml.push_str("<dc:title>");
            xml.push_str(&escape_xml(title));
            xml.push_str("</dc:title>");
        }

        if let Some(ref creator) = self.creator {
            xml.push_str("<dc:creator>");
            xml.push_str(&escape_xml(creator));
            xml.push_str("</dc:creator>");
        }

        if let Some(ref last_modified_by) = self.last_modified_by {
            xml.push_str("<cp:lastModifiedBy>");
            xml.push_str(&escape_xml(last_modified_by));
            xml.push_str("</cp:lastModifiedBy>");
        }

        let stamp = self.timestamp.format(W3CDTF).to_string();
        xml.push_str("<dcterms:created xsi:type=\"dcterms:W3CDTF\">");
        xml.push_str(&stamp);
        xml.push_str("</dcterms:created>");
        xml.push_str("<dcterms:modified xsi:type=\"dcterms:W3CDTF\">");
        xml.push_str(&stamp);
        xml.push_str("</dcterms:modified>");

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

/// Extended (application) properties stored in `docProps/app.xml`.
#[derive(Debug, Clone)]
pub struct AppProperties {
    pub application: String,
    pub pages: u32,
}

impl AppProperties {
    pub fn new(application: &str) -> Self {
        Self {
            application: application.to_string(),
            pages: 1,
        }
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Properties xmlns=""#);
        xml.push_str(namespace::OFC_EXTENDED_PROPERTIES);
        xml.push_str(r#"" xmlns:vt=""#);
        xml.push_str(namespace::OFC_DOC_PROPS_VTYPES);
        xml.push_str(r#"">"#);
        xml.push_str("<Application>");
        xml.push_str(&escape_xml(&self.application));
        xml.push_str("</Application>");
        xml.push_str("<DocSecurity>0</DocSecurity>");
        xml.push_str("<Pages>");
        xml.push_str(itoa::Buffer::new().format(self.pages));
        xml.push_str("</Pages>");
        xml.push_str("<ScaleCrop>false</ScaleCrop>");
        xml.push_str("<LinksUpToDate>false</LinksUpToDate>");
        xml.push_str("<SharedDoc>false</SharedDoc>");
        xml.push_str("<HyperlinksChanged>false</HyperlinksChanged>");
        xml.push_str("<AppVersion>16.0000</AppVersion>");
        xml.push_str("</Properties>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 1).unwrap()
    }

    #[test]
    fn test_core_properties() {
        let props = CoreProperties::new(stamp())
            .title("Last Will and Testament of Jane Doe")
            .creator("Jane Doe");

        let xml = props.to_xml();
        assert!(xml.contains("<dc:title>Last Will and Testament of Jane Doe</dc:title>"));
        assert!(xml.contains("<dc:creator>Jane Doe</dc:creator>"));
        assert!(!xml.contains("lastModifiedBy"));
        assert!(xml.contains(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2024-03-05T09:07:01Z</dcterms:created>"#
        ));
        assert!(xml.contains(
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">2024-03-05T09:07:01Z</dcterms:modified>"#
        ));
    }

    #[test]
    fn test_xml_escaping() {
        let props = CoreProperties::new(stamp()).title("Test & <Special> \"Characters\"");

        let xml = props.to_xml();
        assert!(xml.contains("&amp;"));
        assert!(xml.contains("&lt;"));
        assert!(xml.contains("&gt;"));
        assert!(xml.contains("&quot;"));
    }

    #[test]
    fn test_app_properties() {
        let xml = AppProperties::new("Testament & Co").to_xml();
        assert!(xml.contains("<Application>Testament &amp; Co</Application>"));
        assert!(xml.contains("<Pages>1</Pages>"));
        assert!(xml.ends_with("</Properties>"));
    }
}
