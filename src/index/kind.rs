//! Item kind tags used by the positional wire format.

use std::fmt;

/// The kind of a documented item.
///
/// Discriminants are the integer tags the index generator writes into the
/// first column of every item row and every `paths` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ItemKind {
    Module = 0,
    ExternCrate = 1,
    Import = 2,
    Struct = 3,
    Enum = 4,
    Function = 5,
    Typedef = 6,
    Static = 7,
    Trait = 8,
    Impl = 9,
    TyMethod = 10,
    Method = 11,
    StructField = 12,
    Variant = 13,
    Macro = 14,
    Primitive = 15,
    AssociatedType = 16,
    Constant = 17,
    AssociatedConst = 18,
}

impl ItemKind {
    /// All recognized kinds, in tag order.
    pub const ALL: [Self; 19] = [
        Self::Module,
        Self::ExternCrate,
        Self::Import,
        Self::Struct,
        Self::Enum,
        Self::Function,
        Self::Typedef,
        Self::Static,
        Self::Trait,
        Self::Impl,
        Self::TyMethod,
        Self::Method,
        Self::StructField,
        Self::Variant,
        Self::Macro,
        Self::Primitive,
        Self::AssociatedType,
        Self::Constant,
        Self::AssociatedConst,
    ];

    /// Look up a kind by its wire tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.get(usize::from(tag)).copied()
    }

    /// The wire tag of this kind.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Short name as used in documentation URLs (`fn`, `enum`, `variant`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Module => "mod",
            Self::ExternCrate => "externcrate",
            Self::Import => "import",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Function => "fn",
            Self::Typedef => "type",
            Self::Static => "static",
            Self::Trait => "trait",
            Self::Impl => "impl",
            Self::TyMethod => "tymethod",
            Self::Method => "method",
            Self::StructField => "structfield",
            Self::Variant => "variant",
            Self::Macro => "macro",
            Self::Primitive => "primitive",
            Self::AssociatedType => "associatedtype",
            Self::Constant => "constant",
            Self::AssociatedConst => "associatedconst",
        }
    }

    /// Whether items of this kind may carry a function signature.
    pub const fn is_callable(self) -> bool {
        matches!(self, Self::Function | Self::TyMethod | Self::Method)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for ItemKind {
    type Error = u8;

    fn try_from(tag: u8) -> std::result::Result<Self, Self::Error> {
        Self::from_tag(tag).ok_or(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[test]
    fn test_tags_match_table_position() {
        for (position, kind) in ItemKind::ALL.iter().enumerate() {
            check!(usize::from(kind.tag()) == position);
        }
    }

    #[rstest]
    #[case(0, ItemKind::Module, "mod")]
    #[case(4, ItemKind::Enum, "enum")]
    #[case(5, ItemKind::Function, "fn")]
    #[case(11, ItemKind::Method, "method")]
    #[case(13, ItemKind::Variant, "variant")]
    fn test_known_tags(#[case] tag: u8, #[case] kind: ItemKind, #[case] name: &str) {
        check!(ItemKind::from_tag(tag) == Some(kind));
        check!(kind.to_string() == name);
    }

    #[rstest]
    #[case(19)]
    #[case(42)]
    #[case(255)]
    fn test_unknown_tags_rejected(#[case] tag: u8) {
        check!(ItemKind::from_tag(tag).is_none());
        check!(ItemKind::try_from(tag) == Err(tag));
    }

    #[test]
    fn test_callable_kinds() {
        let callable: Vec<_> = ItemKind::ALL
            .into_iter()
            .filter(|kind| kind.is_callable())
            .collect();
        check!(callable == [ItemKind::Function, ItemKind::TyMethod, ItemKind::Method]);
    }
}
