//! Rendering of 32-bit flag sets as lists of bit names.

use std::borrow::Cow;

/// Printed when no bit is set.
pub const NO_FLAGS: &str = "???";

/// Join the names of the set bits of `flags`, lowest bit first.
///
/// `name_of` is called once per set bit with that bit's value (a power of
/// two) and must not fail.
pub fn format_flags<S, F>(flags: u32, mut name_of: F) -> String
where
    S: AsRef<str>,
    F: FnMut(u32) -> S,
{
    let mut out = String::new();
    let mut first = true;
    for shift in 0..u32::BITS {
        let bit = 1u32 << shift;
        if flags & bit == 0 {
            continue;
        }
        if !first {
            out.push_str(", ");
        }
        out.push_str(name_of(bit).as_ref());
        first = false;
    }
    if first {
        return NO_FLAGS.to_string();
    }
    out
}

/// A closed bit -> name table, as a host compiler's flag enum declares it.
#[derive(Clone, Copy, Debug)]
pub struct FlagTable {
    pub name: &'static str,
    entries: &'static [(u32, &'static str)],
}

impl FlagTable {
    pub const fn new(name: &'static str, entries: &'static [(u32, &'static str)]) -> Self {
        Self { name, entries }
    }

    pub fn entries(&self) -> &'static [(u32, &'static str)] {
        self.entries
    }

    /// Name of a single bit. Bits outside the table print as hex.
    pub fn name_of(&self, bit: u32) -> Cow<'static, str> {
        match self.entries.iter().find(|(value, _)| *value == bit) {
            Some((_, name)) => Cow::Borrowed(*name),
            None => Cow::Owned(format!("{:#x}", bit)),
        }
    }

    /// Bit value for a name.
    pub fn parse(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(value, _)| *value)
    }

    pub fn format(&self, flags: u32) -> String {
        format_flags(flags, |bit| self.name_of(bit))
    }
}

pub const SYMBOL_FLAGS: FlagTable = FlagTable::new(
    "SymbolFlags",
    &[
        (1 << 0, "FunctionScopedVariable"),
        (1 << 1, "BlockScopedVariable"),
        (1 << 2, "Property"),
        (1 << 3, "EnumMember"),
        (1 << 4, "Function"),
        (1 << 5, "Class"),
        (1 << 6, "Interface"),
        (1 << 7, "ConstEnum"),
        (1 << 8, "RegularEnum"),
        (1 << 9, "ValueModule"),
        (1 << 10, "NamespaceModule"),
        (1 << 11, "TypeLiteral"),
        (1 << 12, "ObjectLiteral"),
        (1 << 13, "Method"),
        (1 << 14, "Constructor"),
        (1 << 15, "GetAccessor"),
        (1 << 16, "SetAccessor"),
        (1 << 17, "Signature"),
        (1 << 18, "TypeParameter"),
        (1 << 19, "TypeAlias"),
        (1 << 20, "ExportValue"),
        (1 << 21, "Alias"),
        (1 << 22, "Prototype"),
        (1 << 23, "ExportStar"),
        (1 << 24, "Optional"),
        (1 << 25, "Transient"),
        (1 << 26, "Assignment"),
        (1 << 27, "ModuleExports"),
    ],
);

pub const TYPE_FLAGS: FlagTable = FlagTable::new(
    "TypeFlags",
    &[
        (1 << 0, "Any"),
        (1 << 1, "Unknown"),
        (1 << 2, "String"),
        (1 << 3, "Number"),
        (1 << 4, "Boolean"),
        (1 << 5, "Enum"),
        (1 << 6, "BigInt"),
        (1 << 7, "StringLiteral"),
        (1 << 8, "NumberLiteral"),
        (1 << 9, "BooleanLiteral"),
        (1 << 10, "EnumLiteral"),
        (1 << 11, "BigIntLiteral"),
        (1 << 12, "ESSymbol"),
        (1 << 13, "UniqueESSymbol"),
        (1 << 14, "Void"),
        (1 << 15, "Undefined"),
        (1 << 16, "Null"),
        (1 << 17, "Never"),
        (1 << 18, "TypeParameter"),
        (1 << 19, "Object"),
        (1 << 20, "Union"),
        (1 << 21, "Intersection"),
        (1 << 22, "Index"),
        (1 << 23, "IndexedAccess"),
        (1 << 24, "Conditional"),
        (1 << 25, "Substitution"),
        (1 << 26, "NonPrimitive"),
        (1 << 27, "TemplateLiteral"),
        (1 << 28, "StringMapping"),
    ],
);

pub fn format_symbol_flags(flags: u32) -> String {
    SYMBOL_FLAGS.format(flags)
}

pub fn format_type_flags(flags: u32) -> String {
    TYPE_FLAGS.format(flags)
}

/// Look up a table by its name or a short alias (`symbol`, `type`).
pub fn table_by_name(name: &str) -> Option<FlagTable> {
    match name {
        "symbol" | "SymbolFlags" => Some(SYMBOL_FLAGS),
        "type" | "TypeFlags" => Some(TYPE_FLAGS),
        _ => None,
    }
}
