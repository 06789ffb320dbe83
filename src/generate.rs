//! Generation entry point: will in, `.docx` bytes and filename out.
use crate::common::{Error, Result};
use crate::ooxml::opc::constants::content_type;
use crate::options::GenerateOptions;
use crate::will::{WillInput, build_parts};
use stored_zip::ErrorKind;

/// MIME type of the produced document.
pub const DOCX_MIME_TYPE: &str = content_type::WML_DOCUMENT;

const FILENAME_SUFFIX: &str = "Last_Will_and_Testament.docx";

/// A finished document ready to hand to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub bytes: Vec<u8>,
    /// Suggested download filename
    pub filename: String,
    pub mime_type: &'static str,
}

/// Generate the `.docx` package for `will`.
///
/// The input is validated first. The encoded archive is read back and every
/// offset, size and CRC is checked before it is returned.
pub fn generate(will: &WillInput, options: &GenerateOptions) -> Result<GeneratedDocument> {
    will.validate()?;

    let manifest = build_parts(will, options)?;
    let bytes = manifest
        .encode()
        .map_err(|e| Error::generation("failed to encode the document package", e))?;

    if bytes.is_empty() {
        return Err(Error::generation(
            "archive buffer is empty",
            ErrorKind::EmptyArchive.into(),
        ));
    }

    let listing = stored_zip::inspect(&bytes)
        .map_err(|e| Error::generation("encoded package failed verification", e))?;
    if listing.len() != manifest.len() {
        return Err(Error::generation(
            "encoded package failed verification",
            ErrorKind::LayoutMismatch(format!(
                "{} members written but {} parts built",
                listing.len(),
                manifest.len()
            ))
            .into(),
        ));
    }

    let filename = suggested_filename(&will.testator_name, options.sample);
    log::debug!(
        "generated {} ({} bytes, {} parts)",
        filename,
        bytes.len(),
        listing.len()
    );

    Ok(GeneratedDocument {
        bytes,
        filename,
        mime_type: DOCX_MIME_TYPE,
    })
}

/// Suggested download filename for a testator.
///
/// Everything but letters, digits and whitespace is dropped and whitespace
/// runs become single underscores.
///
/// # Examples
///
/// ```
/// use testament_docx::suggested_filename;
///
/// assert_eq!(
///     suggested_filename("Jane A. Doe", false),
///     "Jane_A_Doe_Last_Will_and_Testament.docx"
/// );
/// assert_eq!(
///     suggested_filename("Jane A. Doe", true),
///     "SAMPLE_Jane_A_Doe_Last_Will_and_Testament.docx"
/// );
/// ```
pub fn suggested_filename(testator_name: &str, sample: bool) -> String {
    let cleaned: String = testator_name
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    let name = cleaned.split_whitespace().collect::<Vec<_>>().join("_");

    let mut filename = String::with_capacity(name.len() + FILENAME_SUFFIX.len() + 8);
    if sample {
        filename.push_str("SAMPLE_");
    }
    if !name.is_empty() {
        filename.push_str(&name);
        filename.push('_');
    }
    filename.push_str(FILENAME_SUFFIX);
    filename
}
