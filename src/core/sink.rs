//! Registration sink - the downstream tool's intake.
//!
//! The RegisterSink trait models the build/elaboration tool's `register`
//! primitive: a write-only, append-only sink that receives source files in
//! strict sequence. How duplicates or unknown files are handled is the
//! sink's concern, not the resolver's.

use anyhow::Result;
use thiserror::Error;

use crate::core::source_file::SourceFile;

/// A destination for source-file registrations.
pub trait RegisterSink {
    /// Register one source file for inclusion in the current library target.
    ///
    /// Calls arrive in the caller's required elaboration order; the sink
    /// must not reorder them.
    fn register(&mut self, file: SourceFile) -> Result<()>;
}

/// A source file was registered more than once with the same sink.
#[derive(Debug, Error)]
#[error("source file `{0}` registered twice")]
pub struct DuplicateRegistration(pub String);

/// A sink that collects registrations in call order.
///
/// Used by the CLI to print the resolved list, and by tests to observe the
/// exact call sequence. Rejects duplicate registration.
#[derive(Debug, Default)]
pub struct CollectedFiles {
    files: Vec<SourceFile>,
}

impl CollectedFiles {
    /// Create an empty sink.
    pub fn new() -> Self {
        CollectedFiles::default()
    }

    /// The files registered so far, in call order.
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Consume the sink, yielding the collected files.
    pub fn into_files(self) -> Vec<SourceFile> {
        self.files
    }
}

impl RegisterSink for CollectedFiles {
    fn register(&mut self, file: SourceFile) -> Result<()> {
        if self.files.contains(&file) {
            return Err(DuplicateRegistration(file.name().to_string()).into());
        }
        self.files.push(file);
        Ok(())
    }
}
