//! Built-in function and sampling-method signatures.
//!
//! Two independent tables map a name to its overloads. Each overload is
//! self-describing so completion and signature-help collaborators can render
//! it without another lookup. Arity checking only ever looks at the
//! parameter counts.

mod functions;
mod methods;

use std::sync::OnceLock;

use rustc_hash::{FxHashMap, FxHashSet};

/// One positional parameter of an overload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParameterInfo {
    pub name: &'static str,
    /// How the parameter is shown in signature help, e.g. `v: double[]`.
    pub display_text: &'static str,
    pub description: &'static str,
}

/// One overload of a built-in function or method.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MethodSignatureInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [ParameterInfo],
    pub return_type: &'static str,
}

impl MethodSignatureInfo {
    pub const fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// `name(p1, p2): return_type`
    pub fn label(&self) -> String {
        let params: Vec<&str> = self.parameters.iter().map(|p| p.display_text).collect();
        format!("{}({}): {}", self.name, params.join(", "), self.return_type)
    }
}

/// Source form of a table: key followed by the overloads stored under it.
pub type SignatureEntries = &'static [(&'static str, &'static [MethodSignatureInfo])];

/// Name → overloads lookup built from a static entry list.
pub struct SignatureTable {
    entries: SignatureEntries,
    by_name: FxHashMap<&'static str, &'static [MethodSignatureInfo]>,
}

impl SignatureTable {
    fn from_entries(entries: SignatureEntries) -> Self {
        let mut by_name = FxHashMap::default();
        by_name.reserve(entries.len());
        for &(key, overloads) in entries {
            by_name.insert(key, overloads);
        }
        SignatureTable { entries, by_name }
    }

    /// Case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&'static [MethodSignatureInfo]> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Parameter counts across every overload of `name`.
    pub fn parameter_counts(&self, name: &str) -> Option<FxHashSet<usize>> {
        self.get(name)
            .map(|overloads| overloads.iter().map(MethodSignatureInfo::arity).collect())
    }

    /// Raw `(key, overloads)` pairs in declaration order.
    pub fn entries(&self) -> SignatureEntries {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

static FUNCTIONS: OnceLock<SignatureTable> = OnceLock::new();
static METHODS: OnceLock<SignatureTable> = OnceLock::new();

/// Built-in free functions (`avg`, `max`, `time`, ...).
pub fn functions() -> &'static SignatureTable {
    FUNCTIONS.get_or_init(|| SignatureTable::from_entries(functions::ENTRIES))
}

/// Methods callable on sampling variables (`GetSample`, `Count`, ...).
pub fn methods() -> &'static SignatureTable {
    METHODS.get_or_init(|| SignatureTable::from_entries(methods::ENTRIES))
}
