//! Per-kind literal notation.
//!
//! A [`LiteralTable`] holds one prefix/suffix pair per [`ValueKind`]. The encoder looks the pair
//! up by kind and wraps the value's text form with it; a profile changes notation by supplying
//! a different table, never by changing the dispatch.

use strum::{EnumCount, IntoEnumIterator};

use crate::metadata::typesystem::ValueKind;

/// The prefix and suffix wrapped around the text form of a value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Affix {
    /// Text emitted before the value
    pub prefix: String,
    /// Text emitted after the value
    pub suffix: String,
}

impl Affix {
    /// Create a new prefix/suffix pair
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Affix {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

/// Literal notation for every [`ValueKind`].
///
/// # Examples
///
/// ```rust
/// use cilreflect::{metadata::typesystem::ValueKind, render::LiteralTable};
///
/// let table = LiteralTable::c_family().with(ValueKind::Int64, "", "i64");
/// assert_eq!(table.wrap(ValueKind::Int64, "42"), "42i64");
/// assert_eq!(table.wrap(ValueKind::String, "Bob"), "\"Bob\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralTable {
    entries: Vec<Affix>,
}

impl LiteralTable {
    /// A table that leaves every kind unadorned
    #[must_use]
    pub fn plain() -> Self {
        LiteralTable {
            entries: vec![Affix::default(); ValueKind::COUNT],
        }
    }

    /// The C-family notation: `'c'`, `1m`, `1d`, `1L`, `1f`, `"s"`, `1U`, `1UL`, `typeof(T)`
    #[must_use]
    pub fn c_family() -> Self {
        Self::from_fn(|kind| match kind {
            ValueKind::Char => Affix::new("'", "'"),
            ValueKind::Decimal => Affix::new("", "m"),
            ValueKind::Double => Affix::new("", "d"),
            ValueKind::Int64 => Affix::new("", "L"),
            ValueKind::Single => Affix::new("", "f"),
            ValueKind::String => Affix::new("\"", "\""),
            ValueKind::UInt32 => Affix::new("", "U"),
            ValueKind::UInt64 => Affix::new("", "UL"),
            ValueKind::Object => Affix::new("typeof(", ")"),
            ValueKind::Other => Affix::default(),
        })
    }

    /// The Basic-family notation: `"c"c`, `1D`, `1R`, `1L`, `1F`, `"s"`, `1UI`, `1UL`, `GetType(T)`
    #[must_use]
    pub fn basic_family() -> Self {
        Self::from_fn(|kind| match kind {
            ValueKind::Char => Affix::new("\"", "\"c"),
            ValueKind::Decimal => Affix::new("", "D"),
            ValueKind::Double => Affix::new("", "R"),
            ValueKind::Int64 => Affix::new("", "L"),
            ValueKind::Single => Affix::new("", "F"),
            ValueKind::String => Affix::new("\"", "\""),
            ValueKind::UInt32 => Affix::new("", "UI"),
            ValueKind::UInt64 => Affix::new("", "UL"),
            ValueKind::Object => Affix::new("GetType(", ")"),
            ValueKind::Other => Affix::default(),
        })
    }

    /// Build a table from a total mapping of kinds to affixes
    ///
    /// ## Arguments
    /// * `f` - Called once per kind, in declaration order
    pub fn from_fn(f: impl Fn(ValueKind) -> Affix) -> Self {
        LiteralTable {
            entries: ValueKind::iter().map(f).collect(),
        }
    }

    /// Replace the notation of a single kind
    ///
    /// ## Arguments
    /// * `kind`   - The kind to override
    /// * `prefix` - Text emitted before the value
    /// * `suffix` - Text emitted after the value
    #[must_use]
    pub fn with(mut self, kind: ValueKind, prefix: &str, suffix: &str) -> Self {
        self.entries[kind.index()] = Affix::new(prefix, suffix);
        self
    }

    /// The notation of a kind
    #[must_use]
    pub fn get(&self, kind: ValueKind) -> &Affix {
        &self.entries[kind.index()]
    }

    /// Wrap the text form of a value of the given kind
    #[must_use]
    pub fn wrap(&self, kind: ValueKind, text: &str) -> String {
        let affix = self.get(kind);
        format!("{}{}{}", affix.prefix, text, affix.suffix)
    }
}

impl Default for LiteralTable {
    fn default() -> Self {
        Self::c_family()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_family_notation() {
        let table = LiteralTable::c_family();
        assert_eq!(table.wrap(ValueKind::Char, "x"), "'x'");
        assert_eq!(table.wrap(ValueKind::Decimal, "1.5"), "1.5m");
        assert_eq!(table.wrap(ValueKind::Double, "2.5"), "2.5d");
        assert_eq!(table.wrap(ValueKind::Int64, "42"), "42L");
        assert_eq!(table.wrap(ValueKind::Single, "0.5"), "0.5f");
        assert_eq!(table.wrap(ValueKind::String, "Bob"), "\"Bob\"");
        assert_eq!(table.wrap(ValueKind::UInt32, "7"), "7U");
        assert_eq!(table.wrap(ValueKind::UInt64, "7"), "7UL");
        assert_eq!(
            table.wrap(ValueKind::Object, "System.String"),
            "typeof(System.String)"
        );
        assert_eq!(table.wrap(ValueKind::Other, "13"), "13");
    }

    #[test]
    fn test_basic_family_notation() {
        let table = LiteralTable::basic_family();
        assert_eq!(table.wrap(ValueKind::Char, "x"), "\"x\"c");
        assert_eq!(table.wrap(ValueKind::Decimal, "1.5"), "1.5D");
        assert_eq!(table.wrap(ValueKind::Double, "2.5"), "2.5R");
        assert_eq!(table.wrap(ValueKind::Single, "0.5"), "0.5F");
        assert_eq!(table.wrap(ValueKind::UInt32, "7"), "7UI");
        assert_eq!(
            table.wrap(ValueKind::Object, "System.String"),
            "GetType(System.String)"
        );
    }

    #[test]
    fn test_override_single_kind() {
        let table = LiteralTable::c_family().with(ValueKind::UInt32, "", "u");
        assert_eq!(table.wrap(ValueKind::UInt32, "1"), "1u");
        // everything else untouched
        assert_eq!(table.wrap(ValueKind::UInt64, "1"), "1UL");
        assert_ne!(table, LiteralTable::c_family());
    }

    #[test]
    fn test_plain_table() {
        let table = LiteralTable::plain();
        for kind in ValueKind::iter() {
            assert_eq!(table.wrap(kind, "v"), "v");
        }
    }
}
