//! Decoding and validation of generated documentation search indexes.
//!
//! A documentation build emits a `search-index.js` table mapping each crate
//! to its documented symbols. This crate turns that table into an immutable,
//! typed [`SymbolIndex`], rejecting malformed data up front, and hands it to
//! an [`IndexConsumer`].

pub mod consumer;
pub mod embedded;
pub mod error;
pub mod index;
pub mod logging;
pub mod script;

pub use consumer::IndexConsumer;
pub use embedded::embedded;
pub use error::{IndexError, Result};
pub use index::{
    EntryItem, FnSignature, IndexEntry, ItemKind, NamespaceRecord, ParentRef, PathEntry,
    SymbolIndex, TypeRef,
};
