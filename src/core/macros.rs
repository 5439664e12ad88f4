//! Macro-definition registry.
//!
//! Build-configuration macros are named boolean flags queried by exact name.
//! The registry is passed explicitly as a capability rather than read from
//! ambient global state, so the resolver stays a pure function of
//! (base list, registry).

use std::collections::BTreeSet;

/// A read-only oracle answering whether a build-configuration macro is
/// defined for the current invocation.
///
/// The answer must be stable for the duration of one resolver run.
pub trait MacroRegistry {
    /// Check whether the named macro is defined. Exact-name match only.
    fn is_defined(&self, symbol: &str) -> bool;
}

impl<T: MacroRegistry + ?Sized> MacroRegistry for &T {
    fn is_defined(&self, symbol: &str) -> bool {
        (**self).is_defined(symbol)
    }
}

/// A set of defined macro names.
///
/// The default (empty) set answers false for every query, which is the
/// behavior expected when no build configuration is supplied at all.
/// Defining the same symbol twice is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroSet {
    defines: BTreeSet<String>,
}

impl MacroSet {
    /// Create an empty macro set (nothing defined).
    pub fn new() -> Self {
        MacroSet::default()
    }

    /// Mark a macro as defined.
    pub fn define(&mut self, symbol: impl Into<String>) {
        self.defines.insert(symbol.into());
    }

    /// Number of defined macros.
    pub fn len(&self) -> usize {
        self.defines.len()
    }

    /// Check if nothing is defined.
    pub fn is_empty(&self) -> bool {
        self.defines.is_empty()
    }
}

impl MacroRegistry for MacroSet {
    fn is_defined(&self, symbol: &str) -> bool {
        self.defines.contains(symbol)
    }
}

impl<S: Into<String>> FromIterator<S> for MacroSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        MacroSet {
            defines: iter.into_iter().map(Into::into).collect(),
        }
    }
}
