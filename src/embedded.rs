//! The search index compiled into this crate.
//!
//! It documents the `certitude` certificate-validation crate and its C-ABI
//! wrapper `c_certitude`.

use crate::error::Result;
use crate::index::SymbolIndex;

/// Script text of the bundled index.
pub const EMBEDDED_SCRIPT: &str = include_str!("../data/search-index.js");

/// Decodes the bundled index.
///
/// The data is fixed at build time, so an error here is a defect in the
/// bundled file rather than a runtime condition.
pub fn embedded() -> Result<SymbolIndex> {
    crate::script::parse(EMBEDDED_SCRIPT)
}
