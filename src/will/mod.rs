//! Will content: input model, article plan, document body and package parts.
pub mod article;
pub mod body;
pub mod input;
pub mod parts;

pub use article::{ArticleKind, ArticlePlan};
pub use body::{SAMPLE_NOTICE, WATERMARK_TEXT, WillDocumentBuilder, build_document};
pub use input::{ResiduaryShare, SpecificGift, WillInput};
pub use parts::{build_parts, document_title};
