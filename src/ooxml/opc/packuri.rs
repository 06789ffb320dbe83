//! Names of the parts that make up a generated package.
use crate::ooxml::opc::constants::content_type as ct;

/// One of the fixed parts of a word-processing package.
///
/// Member paths are case-sensitive and use forward slashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartName {
    /// `word/document.xml`
    Document,
    /// `word/styles.xml`
    Styles,
    /// `word/_rels/document.xml.rels`
    DocumentRels,
    /// `[Content_Types].xml`
    ContentTypes,
    /// `docProps/app.xml`
    AppProperties,
    /// `docProps/core.xml`
    CoreProperties,
    /// `_rels/.rels`
    PackageRels,
}

impl PartName {
    /// Every part, in the order they are written to the archive.
    pub const ALL: [PartName; 7] = [
        PartName::Document,
        PartName::Styles,
        PartName::DocumentRels,
        PartName::ContentTypes,
        PartName::AppProperties,
        PartName::CoreProperties,
        PartName::PackageRels,
    ];

    /// Path of the member inside the ZIP container.
    pub const fn member_path(self) -> &'static str {
        match self {
            PartName::Document => "word/document.xml",
            PartName::Styles => "word/styles.xml",
            PartName::DocumentRels => "word/_rels/document.xml.rels",
            PartName::ContentTypes => "[Content_Types].xml",
            PartName::AppProperties => "docProps/app.xml",
            PartName::CoreProperties => "docProps/core.xml",
            PartName::PackageRels => "_rels/.rels",
        }
    }

    /// Absolute pack URI as used in `[Content_Types].xml` overrides.
    pub fn uri(self) -> String {
        format!("/{}", self.member_path())
    }

    /// File extension of the member path, without the dot.
    pub fn ext(self) -> &'static str {
        let path = self.member_path();
        path.rsplit_once('.').map_or("", |(_, ext)| ext)
    }

    /// Content type of the part. The content types manifest itself is plain XML.
    pub const fn content_type(self) -> &'static str {
        match self {
            PartName::Document => ct::WML_DOCUMENT_MAIN,
            PartName::Styles => ct::WML_STYLES,
            PartName::DocumentRels | PartName::PackageRels => ct::OPC_RELATIONSHIPS,
            PartName::ContentTypes => ct::XML,
            PartName::AppProperties => ct::OFC_EXTENDED_PROPERTIES,
            PartName::CoreProperties => ct::OPC_CORE_PROPERTIES,
        }
    }
}

impl std::fmt::Display for PartName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.member_path())
    }
}
