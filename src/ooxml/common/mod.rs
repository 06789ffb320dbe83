//! Package-level pieces shared by every word-processing part.
pub mod properties;

pub use properties::{AppProperties, CoreProperties};
