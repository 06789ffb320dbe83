//! The ordered set of parts that make up a package.
use crate::ooxml::opc::packuri::PartName;

/// Ordered mapping from part to its serialized XML.
///
/// Each [`PartName`] appears at most once; the archive is written in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct ArchiveManifest {
    parts: Vec<(PartName, String)>,
}

impl ArchiveManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content of a part, keeping its original position if it already exists.
    pub fn insert(&mut self, part: PartName, xml: String) {
        match self.parts.iter_mut().find(|(name, _)| *name == part) {
            Some((_, existing)) => *existing = xml,
            None => self.parts.push((part, xml)),
        }
    }

    /// Content of a part, if present.
    pub fn get(&self, part: PartName) -> Option<&str> {
        self.parts
            .iter()
            .find(|(name, _)| *name == part)
            .map(|(_, xml)| xml.as_str())
    }

    /// Parts in archive order.
    pub fn parts(&self) -> impl Iterator<Item = PartName> + '_ {
        self.parts.iter().map(|(name, _)| *name)
    }

    /// `(member path, content)` pairs in archive order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.parts
            .iter()
            .map(|(name, xml)| (name.member_path(), xml.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Whether every part a word-processing package needs is present.
    pub fn is_complete(&self) -> bool {
        PartName::ALL.iter().all(|part| self.get(*part).is_some())
    }

    /// Encode the parts as a stored ZIP archive, UTF-8 encoded.
    pub fn encode(&self) -> Result<Vec<u8>, stored_zip::Error> {
        let entries: Vec<(&str, &[u8])> = self
            .iter()
            .map(|(path, xml)| (path, xml.as_bytes()))
            .collect();
        stored_zip::encode(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut manifest = ArchiveManifest::new();
        manifest.insert(PartName::Document, "<a/>".to_string());
        manifest.insert(PartName::Styles, "<b/>".to_string());
        manifest.insert(PartName::Document, "<c/>".to_string());

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.get(PartName::Document), Some("<c/>"));
        let order: Vec<PartName> = manifest.parts().collect();
        assert_eq!(order, vec![PartName::Document, PartName::Styles]);
        assert!(!manifest.is_complete());
    }

    #[test]
    fn test_encode_preserves_order() {
        let mut manifest = ArchiveManifest::new();
        for part in PartName::ALL {
            manifest.insert(part, format!("<{}/>", part.ext()));
        }
        assert!(manifest.is_complete());

        let bytes = manifest.encode().unwrap();
        let listing = stored_zip::inspect(&bytes).unwrap();
        let paths: Vec<&str> = listing.paths().collect();
        let expected: Vec<&str> = PartName::ALL.iter().map(|p| p.member_path()).collect();
        assert_eq!(paths, expected);
    }

    #[test]
    fn test_encode_empty_manifest_fails() {
        let err = ArchiveManifest::new().encode().unwrap_err();
        assert_eq!(err.kind(), &stored_zip::ErrorKind::EmptyArchive);
    }
}
