//! Library registration against a downstream tool.

use anyhow::Result;

use crate::core::library;
use crate::core::macros::MacroRegistry;
use crate::core::manifest::Manifest;
use crate::core::sink::RegisterSink;

/// Resolve the RTL library manifest and register every file with the sink,
/// in manifest order.
///
/// Sink failures are propagated unchanged; files registered before the
/// failure stay registered. Returns the resolved manifest.
pub fn register_library(
    macros: &dyn MacroRegistry,
    sink: &mut dyn RegisterSink,
) -> Result<Manifest> {
    let manifest = library::resolve(macros);

    if manifest.contains(library::BACKDOOR_DUMMY.name()) {
        tracing::debug!(
            "{} not defined, registering {}",
            library::BACKDOOR_MACRO,
            library::BACKDOOR_DUMMY
        );
    } else {
        tracing::debug!(
            "{} defined, backdoor implementation supplied externally",
            library::BACKDOOR_MACRO
        );
    }

    for file in manifest.iter() {
        sink.register(*file)?;
    }

    tracing::debug!("registered {} RTL source files", manifest.len());
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::library::{BACKDOOR_DUMMY, BACKDOOR_MACRO, BASE_FILES};
    use crate::core::macros::MacroSet;
    use crate::core::sink::CollectedFiles;
    use crate::core::source_file::SourceFile;

    #[test]
    fn test_registers_full_sequence_without_backdoor() {
        let mut sink = CollectedFiles::new();
        let manifest = register_library(&MacroSet::new(), &mut sink).unwrap();

        assert_eq!(sink.files().len(), 23);
        assert_eq!(sink.files(), manifest.files());
        assert_eq!(sink.files()[..22], BASE_FILES);
        assert_eq!(sink.files()[22], BACKDOOR_DUMMY);
    }

    #[test]
    fn test_registers_base_only_with_backdoor() {
        let macros: MacroSet = [BACKDOOR_MACRO].into_iter().collect();
        let mut sink = CollectedFiles::new();
        register_library(&macros, &mut sink).unwrap();

        assert_eq!(sink.files(), BASE_FILES);
    }

    #[test]
    fn test_two_runs_produce_identical_sequences() {
        let macros = MacroSet::new();

        let mut first = CollectedFiles::new();
        let mut second = CollectedFiles::new();
        register_library(&macros, &mut first).unwrap();
        register_library(&macros, &mut second).unwrap();

        assert_eq!(first.files(), second.files());
    }

    /// Sink that fails partway through, for error-propagation checks.
    struct FailingSink {
        accepted: usize,
        fail_at: usize,
    }

    impl RegisterSink for FailingSink {
        fn register(&mut self, _file: SourceFile) -> Result<()> {
            if self.accepted == self.fail_at {
                anyhow::bail!("registration rejected by tool");
            }
            self.accepted += 1;
            Ok(())
        }
    }

    #[test]
    fn test_sink_error_propagates_unchanged() {
        let mut sink = FailingSink {
            accepted: 0,
            fail_at: 5,
        };
        let err = register_library(&MacroSet::new(), &mut sink).unwrap_err();

        assert_eq!(err.to_string(), "registration rejected by tool");
        assert_eq!(sink.accepted, 5);
    }
}
