//! Version conventions of registry components
//!
//! - [`formatter`]: `VersionFormatter` trait and the template-based default

pub mod formatter;

pub use formatter::{TemplateVersionFormatter, VersionFormatter};
