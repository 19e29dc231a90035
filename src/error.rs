//! Error handling types and utilities.

use crate::index::ItemKind;

/// A specialized Result type for index decoding.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Error returned when a search index cannot be constructed.
///
/// Every variant describes a defect in the generated data. Construction
/// stops at the first defect found; no partially decoded index is returned.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The record text is not JSON, or does not have the positional shape.
    #[error("malformed JSON{}: {source}", namespace_suffix(.namespace.as_deref()))]
    Json {
        namespace: Option<String>,
        #[source]
        source: serde_json::Error,
    },

    /// A kind tag outside the recognized item-type table.
    #[error("namespace '{namespace}', {table} row {row}: unknown item kind tag {tag}")]
    UnknownKind {
        namespace: String,
        table: &'static str,
        row: usize,
        tag: u8,
    },

    /// A parent reference that does not resolve into the `paths` table.
    #[error(
        "namespace '{namespace}', item row {row}: parent index {parent} out of bounds ({paths_len} paths)"
    )]
    ParentOutOfBounds {
        namespace: String,
        row: usize,
        parent: usize,
        paths_len: usize,
    },

    /// A parent reference on an item kind that never has one.
    #[error("namespace '{namespace}', item row {row}: {kind} cannot have a parent")]
    UnexpectedParent {
        namespace: String,
        row: usize,
        kind: ItemKind,
    },

    /// A member item (variant, field) with no parent reference.
    #[error("namespace '{namespace}', item row {row}: {kind} requires a parent")]
    MissingParent {
        namespace: String,
        row: usize,
        kind: ItemKind,
    },

    /// A signature on an item kind that is not callable.
    #[error("namespace '{namespace}', item row {row}: {kind} cannot have a signature")]
    UnexpectedSignature {
        namespace: String,
        row: usize,
        kind: ItemKind,
    },

    /// The same namespace key declared twice.
    #[error("duplicate namespace '{0}'")]
    DuplicateNamespace(String),

    /// The script form does not have the expected statements.
    #[error("script line {line}: {reason}")]
    Script { line: usize, reason: String },

    /// Binary snapshot could not be encoded or decoded.
    #[error("snapshot: {0}")]
    Snapshot(#[from] postcard::Error),
}

fn namespace_suffix(namespace: Option<&str>) -> String {
    namespace.map_or_else(String::new, |ns| format!(" in namespace '{}'", ns))
}

impl IndexError {
    pub(crate) fn json(source: serde_json::Error) -> Self {
        Self::Json {
            namespace: None,
            source,
        }
    }

    pub(crate) fn script(line: usize, reason: impl Into<String>) -> Self {
        Self::Script {
            line,
            reason: reason.into(),
        }
    }
}
