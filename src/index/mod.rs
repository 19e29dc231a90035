//! In-memory symbol index.
//!
//! A [`SymbolIndex`] maps namespace keys (crate names) to the
//! [`NamespaceRecord`] of symbols documented in that namespace. It is built
//! in one step from the positional wire format and never mutated afterwards.

pub(crate) mod entry;
pub(crate) mod kind;
pub(crate) mod record;
pub(crate) mod wire;

pub use entry::{EntryItem, FnSignature, IndexEntry, ParentRef, PathEntry, TypeRef};
pub use kind::ItemKind;
pub use record::NamespaceRecord;
pub use wire::{RawItem, RawPath, RawRecord, RawSymbolIndex};

use crate::consumer::IndexConsumer;
use crate::error::{IndexError, Result};
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Immutable mapping from namespace key to its symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolIndex {
    namespaces: BTreeMap<String, NamespaceRecord>,
}

impl SymbolIndex {
    /// Validates a raw index and builds the typed structure.
    ///
    /// Either every namespace decodes, or the first defect is returned.
    pub fn from_raw(raw: RawSymbolIndex) -> Result<Self> {
        let start = std::time::Instant::now();
        let mut namespaces = BTreeMap::new();

        for (key, record) in raw.namespaces {
            if namespaces.contains_key(&key) {
                return Err(IndexError::DuplicateNamespace(key));
            }
            let record = NamespaceRecord::decode(&key, record)?;
            namespaces.insert(key, record);
        }

        tracing::info!(
            "Built symbol index: {} namespaces, {} entries in {:?}",
            namespaces.len(),
            namespaces
                .values()
                .map(|record| record.items().len())
                .sum::<usize>(),
            start.elapsed()
        );

        Ok(Self { namespaces })
    }

    /// Decodes the JSON object form `{ "<key>": { "items": [...], "paths": [...] } }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawSymbolIndex = serde_json::from_str(json).map_err(IndexError::json)?;
        Self::from_raw(raw)
    }

    /// Encodes back to the wire form. Namespaces come out in key order.
    pub fn to_raw(&self) -> RawSymbolIndex {
        RawSymbolIndex {
            namespaces: self
                .namespaces
                .iter()
                .map(|(key, record)| (key.clone(), record.encode()))
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.to_raw()).map_err(IndexError::json)
    }

    /// Compact binary encoding of the wire form.
    pub fn to_snapshot(&self) -> Result<Vec<u8>> {
        Ok(postcard::to_allocvec(&self.to_raw())?)
    }

    /// Loads a binary snapshot. The contents are validated like any other input.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self> {
        let raw: RawSymbolIndex = postcard::from_bytes(bytes)?;
        Self::from_raw(raw)
    }

    /// Reads and parses a `search-index.js` script from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read search index at {}", path.display()))?;
        crate::script::parse(&content)
            .with_context(|| format!("Failed to parse search index at {}", path.display()))
    }

    /// Publishes the finished index to its consumer.
    ///
    /// The index is moved behind an `Arc` before the consumer sees it, so
    /// every reader observes the fully built structure.
    pub fn hand_off<C: IndexConsumer>(self, consumer: C) -> C::Output {
        let index = Arc::new(self);
        tracing::debug!(
            "Handing off symbol index with {} namespaces",
            index.namespaces.len()
        );
        consumer.init_search(index)
    }

    pub fn get(&self, namespace: &str) -> Option<&NamespaceRecord> {
        self.namespaces.get(namespace)
    }

    /// Namespace keys in sorted order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NamespaceRecord)> {
        self.namespaces
            .iter()
            .map(|(key, record)| (key.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}
