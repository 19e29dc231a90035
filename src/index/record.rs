//! The symbols of one namespace.

use super::entry::{
    EntryDecoder, EntryEncoder, IndexEntry, ParentRef, PathEntry, decode_path, encode_path,
};
use super::kind::ItemKind;
use super::wire::RawRecord;
use crate::error::Result;

/// All entries of one namespace plus the `paths` table their parent
/// references point into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceRecord {
    items: Vec<IndexEntry>,
    paths: Vec<PathEntry>,
}

impl NamespaceRecord {
    /// Decodes and validates a raw record. Fails on the first malformed row.
    pub(crate) fn decode(namespace: &str, raw: RawRecord) -> Result<Self> {
        let RawRecord { items, paths } = raw;

        let paths = paths
            .into_iter()
            .enumerate()
            .map(|(row, path)| decode_path(namespace, row, path))
            .collect::<Result<Vec<_>>>()?;

        let mut decoder = EntryDecoder::new(namespace, paths.len());
        let items = items
            .into_iter()
            .enumerate()
            .map(|(row, item)| decoder.decode(row, item))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "Decoded namespace '{}' ({} items, {} paths)",
            namespace,
            items.len(),
            paths.len()
        );

        Ok(Self { items, paths })
    }

    pub(crate) fn encode(&self) -> RawRecord {
        let mut encoder = EntryEncoder::default();
        RawRecord {
            items: self.items.iter().map(|item| encoder.encode(item)).collect(),
            paths: self.paths.iter().map(encode_path).collect(),
        }
    }

    pub fn items(&self) -> &[IndexEntry] {
        &self.items
    }

    pub fn paths(&self) -> &[PathEntry] {
        &self.paths
    }

    /// Resolves a parent back-reference.
    ///
    /// Parent references are validated at decode time, so this only
    /// returns `None` for a reference taken from a different record.
    pub fn resolve(&self, parent: ParentRef) -> Option<&PathEntry> {
        self.paths.get(parent.index())
    }

    /// The parent type of an entry, if it has one.
    pub fn parent_of(&self, entry: &IndexEntry) -> Option<&PathEntry> {
        entry.parent().and_then(|parent| self.resolve(parent))
    }

    pub fn entries_of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &IndexEntry> {
        self.items.iter().filter(move |entry| entry.kind() == kind)
    }

    /// Entries with exactly this name.
    pub fn find(&self, name: &str) -> impl Iterator<Item = &IndexEntry> {
        self.items.iter().filter(move |entry| entry.name() == name)
    }

    /// Entries whose parent back-reference is `parent`.
    pub fn children_of(&self, parent: ParentRef) -> impl Iterator<Item = &IndexEntry> {
        self.items
            .iter()
            .filter(move |entry| entry.parent() == Some(parent))
    }

    /// The `paths` row named `name` with the given kind, as a parent reference.
    pub fn path_ref(&self, kind: ItemKind, name: &str) -> Option<ParentRef> {
        self.paths
            .iter()
            .position(|path| path.kind == kind && path.name == name)
            .map(ParentRef::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexError;
    use crate::index::wire::{RawItem, RawPath};
    use assert2::{check, let_assert};

    fn sample() -> RawRecord {
        RawRecord {
            items: vec![
                RawItem(0, String::new(), "certitude".into(), String::new(), None, None),
                RawItem(4, "ValidationResult".into(), String::new(), String::new(), None, None),
                RawItem(13, "Trusted".into(), String::new(), String::new(), Some(0), None),
                RawItem(13, "NotTrusted".into(), String::new(), String::new(), Some(0), None),
                RawItem(5, "validate_cert_chain".into(), String::new(), String::new(), None, None),
            ],
            paths: vec![RawPath(4, "ValidationResult".into())],
        }
    }

    #[test]
    fn test_children_resolve_to_parent() {
        let record = NamespaceRecord::decode("certitude", sample()).expect("valid record");
        let_assert!(Some(parent) = record.path_ref(ItemKind::Enum, "ValidationResult"));

        let children: Vec<_> = record.children_of(parent).map(IndexEntry::name).collect();
        check!(children == ["Trusted", "NotTrusted"]);

        for child in record.children_of(parent) {
            let_assert!(Some(path) = record.parent_of(child));
            check!(path.name == "ValidationResult");
        }
    }

    #[test]
    fn test_find_and_kind_filters() {
        let record = NamespaceRecord::decode("certitude", sample()).expect("valid record");
        check!(record.find("validate_cert_chain").count() == 1);
        check!(record.find("validate").count() == 0);
        check!(record.entries_of_kind(ItemKind::Variant).count() == 2);
        check!(record.entries_of_kind(ItemKind::Function).count() == 1);
    }

    #[test]
    fn test_encode_restores_raw() {
        let raw = sample();
        let record = NamespaceRecord::decode("certitude", raw.clone()).expect("valid record");
        check!(record.encode() == raw);
    }

    #[test]
    fn test_bad_row_fails_whole_record() {
        let mut raw = sample();
        raw.items[3].4 = Some(99);
        let_assert!(
            Err(IndexError::ParentOutOfBounds { row: 3, .. }) =
                NamespaceRecord::decode("certitude", raw)
        );
    }
}
