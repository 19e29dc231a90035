//! Positional wire format of the search index.
//!
//! These types mirror the generated data exactly and carry no validation.
//! [`SymbolIndex::from_raw`](super::SymbolIndex::from_raw) turns them into
//! the typed model.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::entry::FnSignature;

/// One item row: `[kind, name, path, description, parent, signature]`.
///
/// An empty `path` means "same path as the previous row".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem(
    pub u8,
    pub String,
    pub String,
    pub String,
    pub Option<usize>,
    pub Option<FnSignature>,
);

/// One `paths` row: `[kind, name]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPath(pub u8, pub String);

/// The record stored under one namespace key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub items: Vec<RawItem>,
    pub paths: Vec<RawPath>,
}

/// The whole index as it appears on the wire.
///
/// Namespaces are kept in source order, duplicates included, so that
/// validation can reject a key that appears twice instead of silently
/// keeping the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSymbolIndex {
    pub namespaces: Vec<(String, RawRecord)>,
}

impl Serialize for RawSymbolIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.namespaces.len()))?;
        for (key, record) in &self.namespaces {
            map.serialize_entry(key, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RawSymbolIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NamespacesVisitor;

        impl<'de> Visitor<'de> for NamespacesVisitor {
            type Value = RawSymbolIndex;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from namespace key to index record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut namespaces = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, record)) = access.next_entry::<String, RawRecord>()? {
                    namespaces.push((key, record));
                }
                Ok(RawSymbolIndex { namespaces })
            }
        }

        deserializer.deserialize_map(NamespacesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn test_item_row_is_positional() {
        let row: RawItem =
            serde_json::from_str(r#"[13,"Trusted","","",0,null]"#).expect("valid row");
        check!(row == RawItem(13, "Trusted".into(), String::new(), String::new(), Some(0), None));
    }

    #[test]
    fn test_signature_column() {
        let row: RawItem = serde_json::from_str(
            r#"[11,"eq","","",0,{"inputs":[{"name":"a"},{"name":"b"}],"output":{"name":"bool"}}]"#,
        )
        .expect("valid row");
        let_assert!(Some(signature) = row.5);
        check!(signature.inputs.len() == 2);
        check!(signature.output.map(|ty| ty.name) == Some("bool".to_string()));
    }

    #[test]
    fn test_short_row_rejected() {
        check!(serde_json::from_str::<RawItem>(r#"[0,"","krate",""]"#).is_err());
    }

    #[test]
    fn test_duplicate_keys_preserved() {
        let raw: RawSymbolIndex = serde_json::from_str(
            r#"{"a":{"items":[],"paths":[]},"a":{"items":[],"paths":[]}}"#,
        )
        .expect("valid map");
        check!(raw.namespaces.len() == 2);
    }

    #[test]
    fn test_source_order_kept() {
        let raw: RawSymbolIndex = serde_json::from_str(
            r#"{"zeta":{"items":[],"paths":[]},"alpha":{"items":[],"paths":[]}}"#,
        )
        .expect("valid map");
        let keys: Vec<_> = raw.namespaces.iter().map(|(key, _)| key.as_str()).collect();
        check!(keys == ["zeta", "alpha"]);
    }
}
