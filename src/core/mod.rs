//! Core data structures for the RTL library manifest.
//!
//! This module contains the foundational types:
//! - Source-file identifiers and the ordered manifest
//! - The macro-definition registry (build-configuration flags)
//! - The registration sink consumed by the downstream tool
//! - The fixed library definition and its resolver

pub mod library;
pub mod macros;
pub mod manifest;
pub mod sink;
pub mod source_file;

pub use library::{resolve, BACKDOOR_DUMMY, BACKDOOR_MACRO, BASE_FILES};
pub use macros::{MacroRegistry, MacroSet};
pub use manifest::{Manifest, ManifestBuilder};
pub use sink::{CollectedFiles, DuplicateRegistration, RegisterSink};
pub use source_file::SourceFile;
