//! The RTL library definition and its resolver.
//!
//! The base file list is fixed and compiled in. Its order matters: the
//! downstream tool elaborates units in registration order, so dependencies
//! (packages, common blocks) come before the register and adapter units
//! that use them.

use crate::core::macros::MacroRegistry;
use crate::core::manifest::{Manifest, ManifestBuilder};
use crate::core::source_file::SourceFile;

/// Macro that signals a caller-supplied backdoor implementation.
pub const BACKDOOR_MACRO: &str = "RGGEN_ENABLE_BACKDOOR";

/// Stub backdoor-access unit, registered only when [`BACKDOOR_MACRO`] is
/// not defined.
pub const BACKDOOR_DUMMY: SourceFile = SourceFile::new("rggen_backdoor_dummy");

/// Every unconditional unit of the runtime RTL library, in elaboration order.
pub const BASE_FILES: [SourceFile; 22] = [
    SourceFile::new("rggen_rtl"),
    SourceFile::new("rggen_or_reducer"),
    SourceFile::new("rggen_mux"),
    SourceFile::new("rggen_bit_field"),
    SourceFile::new("rggen_bit_field_w01trg"),
    SourceFile::new("rggen_address_decoder"),
    SourceFile::new("rggen_register_common"),
    SourceFile::new("rggen_default_register"),
    SourceFile::new("rggen_indirect_register"),
    SourceFile::new("rggen_external_register"),
    SourceFile::new("rggen_maskable_register"),
    SourceFile::new("rggen_adapter_common"),
    SourceFile::new("rggen_apb_adapter"),
    SourceFile::new("rggen_apb_bridge"),
    SourceFile::new("rggen_axi4lite_skid_buffer"),
    SourceFile::new("rggen_axi4lite_adapter"),
    SourceFile::new("rggen_axi4lite_bridge"),
    SourceFile::new("rggen_avalon_adapter"),
    SourceFile::new("rggen_avalon_bridge"),
    SourceFile::new("rggen_wishbone_adapter"),
    SourceFile::new("rggen_wishbone_bridge"),
    SourceFile::new("rggen_native_adapter"),
];

/// Resolve the final ordered manifest for one build invocation.
///
/// Emits every base file in declared order, then appends the backdoor dummy
/// unit when `RGGEN_ENABLE_BACKDOOR` is not defined. The macro registry is
/// queried exactly once.
pub fn resolve(macros: &dyn MacroRegistry) -> Manifest {
    let mut builder = ManifestBuilder::new();
    builder.push_all(BASE_FILES);
    builder.push_if(!macros.is_defined(BACKDOOR_MACRO), BACKDOOR_DUMMY);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::macros::MacroSet;
    use std::cell::Cell;

    /// Registry that counts queries, for verifying the single-query contract.
    struct CountingRegistry {
        defined: bool,
        queries: Cell<usize>,
    }

    impl CountingRegistry {
        fn new(defined: bool) -> Self {
            CountingRegistry {
                defined,
                queries: Cell::new(0),
            }
        }
    }

    impl MacroRegistry for CountingRegistry {
        fn is_defined(&self, symbol: &str) -> bool {
            assert_eq!(symbol, BACKDOOR_MACRO);
            self.queries.set(self.queries.get() + 1);
            self.defined
        }
    }

    #[test]
    fn test_base_files_lead_in_declared_order() {
        let manifest = resolve(&MacroSet::new());
        for (resolved, expected) in manifest.iter().zip(BASE_FILES.iter()) {
            assert_eq!(resolved, expected);
        }
    }

    #[test]
    fn test_dummy_appended_when_backdoor_undefined() {
        let manifest = resolve(&MacroSet::new());
        assert_eq!(manifest.len(), 23);
        assert_eq!(manifest.files().last(), Some(&BACKDOOR_DUMMY));
    }

    #[test]
    fn test_no_dummy_when_backdoor_defined() {
        let mut macros = MacroSet::new();
        macros.define(BACKDOOR_MACRO);

        let manifest = resolve(&macros);
        assert_eq!(manifest.len(), 22);
        assert!(!manifest.contains(BACKDOOR_DUMMY.name()));
    }

    #[test]
    fn test_unrelated_macro_behaves_like_empty_registry() {
        let mut macros = MacroSet::new();
        macros.define("RGGEN_SOME_OTHER_FLAG");

        assert_eq!(resolve(&macros), resolve(&MacroSet::new()));
    }

    #[test]
    fn test_registry_queried_exactly_once() {
        for defined in [false, true] {
            let registry = CountingRegistry::new(defined);
            resolve(&registry);
            assert_eq!(registry.queries.get(), 1);
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let macros = MacroSet::new();
        assert_eq!(resolve(&macros), resolve(&macros));
    }

    #[test]
    fn test_base_list_has_no_duplicates() {
        for (i, file) in BASE_FILES.iter().enumerate() {
            assert!(!BASE_FILES[..i].contains(file), "duplicate: {}", file);
        }
    }
}
