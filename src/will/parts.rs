//! Assembly of every package part for a will.
use crate::common::Result;
use crate::ooxml::common::{AppProperties, CoreProperties};
use crate::ooxml::docx::writer::{Document, Style, generate_styles_xml};
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::{ArchiveManifest, ContentTypesItem, PartName, Relationships};
use crate::options::GenerateOptions;
use crate::will::body::build_document;
use crate::will::input::WillInput;

/// Document title recorded in `docProps/core.xml`.
pub fn document_title(will: &WillInput, sample: bool) -> String {
    let title = format!("Last Will and Testament of {}", will.testator_name.trim());
    if sample {
        format!("SAMPLE - {}", title)
    } else {
        title
    }
}

/// Package-level relationships (`_rels/.rels`).
fn package_relationships() -> Relationships {
    let mut rels = Relationships::new();
    rels.add_relationship(rt::OFFICE_DOCUMENT, PartName::Document.member_path());
    rels.add_relationship(rt::CORE_PROPERTIES, PartName::CoreProperties.member_path());
    rels.add_relationship(rt::EXTENDED_PROPERTIES, PartName::AppProperties.member_path());
    rels
}

/// Render every part of the package for `will`, in archive order.
///
/// Input is not validated here; [`crate::generate`] validates before calling this.
pub fn build_parts(will: &WillInput, options: &GenerateOptions) -> Result<ArchiveManifest> {
    let timestamp = options.timestamp_or_now();
    let mut manifest = ArchiveManifest::new();

    for part in PartName::ALL {
        let xml = match part {
            PartName::Document => build_document(will, options.sample).to_xml()?,
            PartName::Styles => generate_styles_xml(&Style::legal_template())?,
            PartName::DocumentRels => Document::relationships().to_xml(),
            PartName::ContentTypes => ContentTypesItem::from_parts(PartName::ALL).to_xml(),
            PartName::AppProperties => AppProperties::new(&options.application).to_xml(),
            PartName::CoreProperties => CoreProperties::new(timestamp)
                .title(&document_title(will, options.sample))
                .creator(will.testator_name.trim())
                .last_modified_by(&options.application)
                .to_xml(),
            PartName::PackageRels => package_relationships().to_xml(),
        };
        log::debug!("rendered {} ({} bytes)", part, xml.len());
        manifest.insert(part, xml);
    }

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn options(sample: bool) -> GenerateOptions {
        GenerateOptions {
            sample,
            timestamp: Some(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()),
            ..GenerateOptions::default()
        }
    }

    #[test]
    fn test_manifest_order() {
        let will = WillInput::new("Jane", "John");
        let manifest = build_parts(&will, &options(false)).unwrap();
        let paths: Vec<&str> = manifest.iter().map(|(path, _)| path).collect();
        assert_eq!(
            paths,
            vec![
                "word/document.xml",
                "word/styles.xml",
                "word/_rels/document.xml.rels",
                "[Content_Types].xml",
                "docProps/app.xml",
                "docProps/core.xml",
                "_rels/.rels",
            ]
        );
        assert!(manifest.is_complete());
    }

    #[test]
    fn test_core_properties_title() {
        let will = WillInput::new("Tom & Jerry", "John");
        let manifest = build_parts(&will, &options(true)).unwrap();
        let core = manifest.get(PartName::CoreProperties).unwrap();
        assert!(core.contains(
            "<dc:title>SAMPLE - Last Will and Testament of Tom &amp; Jerry</dc:title>"
        ));
        assert!(core.contains("2025-01-02T03:04:05Z"));

        let manifest = build_parts(&will, &options(false)).unwrap();
        let core = manifest.get(PartName::CoreProperties).unwrap();
        assert!(core.contains("<dc:title>Last Will and Testament of Tom &amp; Jerry</dc:title>"));
    }

    #[test]
    fn test_package_relationships() {
        let will = WillInput::new("Jane", "John");
        let manifest = build_parts(&will, &options(false)).unwrap();
        let rels = manifest.get(PartName::PackageRels).unwrap();
        assert!(rels.contains(r#"Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml""#));
        assert!(rels.contains(r#"Target="docProps/core.xml""#));
        assert!(rels.contains(r#"Target="docProps/app.xml""#));
    }
}
