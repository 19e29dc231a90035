//! Typed index entries.

use serde::{Deserialize, Serialize};

use super::kind::ItemKind;
use super::wire::{RawItem, RawPath};
use crate::error::{IndexError, Result};

/// A reference to a type by name, as written in function signatures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Structured signature of a callable item.
///
/// `output` is `None` for functions returning unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FnSignature {
    pub inputs: Vec<TypeRef>,
    #[serde(default)]
    pub output: Option<TypeRef>,
}

/// A validated position in the owning record's `paths` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParentRef(usize);

impl ParentRef {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// One row of a record's `paths` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub kind: ItemKind,
    pub name: String,
}

/// Kind-specific payload of an entry.
///
/// Only callables carry a signature, and only member kinds carry a parent,
/// so a decoded entry can never pair e.g. an enum with a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryItem {
    Module,
    ExternCrate,
    Import,
    Struct,
    Enum,
    Typedef,
    Static,
    Trait,
    Impl,
    Macro,
    Primitive,
    Constant,
    Function {
        signature: Option<FnSignature>,
    },
    TyMethod {
        parent: Option<ParentRef>,
        signature: Option<FnSignature>,
    },
    Method {
        parent: Option<ParentRef>,
        signature: Option<FnSignature>,
    },
    StructField {
        parent: ParentRef,
    },
    Variant {
        parent: ParentRef,
    },
    AssociatedType {
        parent: Option<ParentRef>,
    },
    AssociatedConst {
        parent: Option<ParentRef>,
    },
}

impl EntryItem {
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Module => ItemKind::Module,
            Self::ExternCrate => ItemKind::ExternCrate,
            Self::Import => ItemKind::Import,
            Self::Struct => ItemKind::Struct,
            Self::Enum => ItemKind::Enum,
            Self::Typedef => ItemKind::Typedef,
            Self::Static => ItemKind::Static,
            Self::Trait => ItemKind::Trait,
            Self::Impl => ItemKind::Impl,
            Self::Macro => ItemKind::Macro,
            Self::Primitive => ItemKind::Primitive,
            Self::Constant => ItemKind::Constant,
            Self::Function { .. } => ItemKind::Function,
            Self::TyMethod { .. } => ItemKind::TyMethod,
            Self::Method { .. } => ItemKind::Method,
            Self::StructField { .. } => ItemKind::StructField,
            Self::Variant { .. } => ItemKind::Variant,
            Self::AssociatedType { .. } => ItemKind::AssociatedType,
            Self::AssociatedConst { .. } => ItemKind::AssociatedConst,
        }
    }

    pub const fn parent(&self) -> Option<ParentRef> {
        match self {
            Self::TyMethod { parent, .. }
            | Self::Method { parent, .. }
            | Self::AssociatedType { parent }
            | Self::AssociatedConst { parent } => *parent,
            Self::StructField { parent } | Self::Variant { parent } => Some(*parent),
            _ => None,
        }
    }

    pub const fn signature(&self) -> Option<&FnSignature> {
        match self {
            Self::Function { signature }
            | Self::TyMethod { signature, .. }
            | Self::Method { signature, .. } => signature.as_ref(),
            _ => None,
        }
    }
}

/// One documented symbol.
///
/// Entries are only produced by decoding, which resolves the inherited
/// path column, so `path` is always the full containing path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    name: String,
    path: String,
    description: String,
    item: EntryItem,
}

impl IndexEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `::`-separated path of the module containing this item.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn item(&self) -> &EntryItem {
        &self.item
    }

    pub const fn kind(&self) -> ItemKind {
        self.item.kind()
    }

    pub const fn parent(&self) -> Option<ParentRef> {
        self.item.parent()
    }

    pub const fn signature(&self) -> Option<&FnSignature> {
        self.item.signature()
    }

    /// Fully qualified name, e.g. `certitude::validate_cert_chain`.
    pub fn qualified_name(&self) -> String {
        match (self.path.is_empty(), self.name.is_empty()) {
            (_, true) => self.path.clone(),
            (true, false) => self.name.clone(),
            (false, false) => format!("{}::{}", self.path, self.name),
        }
    }
}

/// Decoding state for one record's item rows.
pub(crate) struct EntryDecoder<'a> {
    namespace: &'a str,
    paths_len: usize,
    last_path: String,
}

impl<'a> EntryDecoder<'a> {
    pub(crate) const fn new(namespace: &'a str, paths_len: usize) -> Self {
        Self {
            namespace,
            paths_len,
            last_path: String::new(),
        }
    }

    /// Decodes item row `row`. Rows must be fed in order, since an empty
    /// path column inherits the previous row's path.
    pub(crate) fn decode(&mut self, row: usize, raw: RawItem) -> Result<IndexEntry> {
        let RawItem(tag, name, path, description, parent, signature) = raw;

        let kind = ItemKind::from_tag(tag).ok_or_else(|| IndexError::UnknownKind {
            namespace: self.namespace.to_string(),
            table: "items",
            row,
            tag,
        })?;

        let parent = parent
            .map(|parent| {
                if parent < self.paths_len {
                    Ok(ParentRef(parent))
                } else {
                    Err(IndexError::ParentOutOfBounds {
                        namespace: self.namespace.to_string(),
                        row,
                        parent,
                        paths_len: self.paths_len,
                    })
                }
            })
            .transpose()?;

        if signature.is_some() && !kind.is_callable() {
            return Err(IndexError::UnexpectedSignature {
                namespace: self.namespace.to_string(),
                row,
                kind,
            });
        }

        let item = match kind {
            ItemKind::Function => {
                self.reject_parent(parent, row, kind)?;
                EntryItem::Function { signature }
            }
            ItemKind::TyMethod => EntryItem::TyMethod { parent, signature },
            ItemKind::Method => EntryItem::Method { parent, signature },
            ItemKind::StructField => EntryItem::StructField {
                parent: self.require_parent(parent, row, kind)?,
            },
            ItemKind::Variant => EntryItem::Variant {
                parent: self.require_parent(parent, row, kind)?,
            },
            ItemKind::AssociatedType => EntryItem::AssociatedType { parent },
            ItemKind::AssociatedConst => EntryItem::AssociatedConst { parent },
            ItemKind::Module => self.declaration(EntryItem::Module, parent, row)?,
            ItemKind::ExternCrate => self.declaration(EntryItem::ExternCrate, parent, row)?,
            ItemKind::Import => self.declaration(EntryItem::Import, parent, row)?,
            ItemKind::Struct => self.declaration(EntryItem::Struct, parent, row)?,
            ItemKind::Enum => self.declaration(EntryItem::Enum, parent, row)?,
            ItemKind::Typedef => self.declaration(EntryItem::Typedef, parent, row)?,
            ItemKind::Static => self.declaration(EntryItem::Static, parent, row)?,
            ItemKind::Trait => self.declaration(EntryItem::Trait, parent, row)?,
            ItemKind::Impl => self.declaration(EntryItem::Impl, parent, row)?,
            ItemKind::Macro => self.declaration(EntryItem::Macro, parent, row)?,
            ItemKind::Primitive => self.declaration(EntryItem::Primitive, parent, row)?,
            ItemKind::Constant => self.declaration(EntryItem::Constant, parent, row)?,
        };

        let path = if path.is_empty() {
            self.last_path.clone()
        } else {
            self.last_path.clone_from(&path);
            path
        };

        Ok(IndexEntry {
            name,
            path,
            description,
            item,
        })
    }

    /// Declarations are payload-free and never have a parent.
    fn declaration(
        &self,
        item: EntryItem,
        parent: Option<ParentRef>,
        row: usize,
    ) -> Result<EntryItem> {
        self.reject_parent(parent, row, item.kind())?;
        Ok(item)
    }

    fn reject_parent(&self, parent: Option<ParentRef>, row: usize, kind: ItemKind) -> Result<()> {
        match parent {
            Some(_) => Err(IndexError::UnexpectedParent {
                namespace: self.namespace.to_string(),
                row,
                kind,
            }),
            None => Ok(()),
        }
    }

    fn require_parent(
        &self,
        parent: Option<ParentRef>,
        row: usize,
        kind: ItemKind,
    ) -> Result<ParentRef> {
        parent.ok_or_else(|| IndexError::MissingParent {
            namespace: self.namespace.to_string(),
            row,
            kind,
        })
    }
}

/// Encoding state for one record's item rows; the inverse of [`EntryDecoder`].
#[derive(Default)]
pub(crate) struct EntryEncoder {
    last_path: String,
}

impl EntryEncoder {
    pub(crate) fn encode(&mut self, entry: &IndexEntry) -> RawItem {
        let path = if entry.path == self.last_path {
            String::new()
        } else {
            self.last_path.clone_from(&entry.path);
            entry.path.clone()
        };

        RawItem(
            entry.kind().tag(),
            entry.name.clone(),
            path,
            entry.description.clone(),
            entry.parent().map(ParentRef::index),
            entry.signature().cloned(),
        )
    }
}

pub(crate) fn decode_path(namespace: &str, row: usize, raw: RawPath) -> Result<PathEntry> {
    let RawPath(tag, name) = raw;
    let kind = ItemKind::from_tag(tag).ok_or_else(|| IndexError::UnknownKind {
        namespace: namespace.to_string(),
        table: "paths",
        row,
        tag,
    })?;
    Ok(PathEntry { kind, name })
}

pub(crate) fn encode_path(path: &PathEntry) -> RawPath {
    RawPath(path.kind.tag(), path.name.clone())
}
