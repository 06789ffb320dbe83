//! XML text helpers.
pub mod escape;

pub use escape::escape_xml;
