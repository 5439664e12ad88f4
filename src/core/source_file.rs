//! Source-file identifiers.
//!
//! A SourceFile names one VHDL unit by its logical name. The file's content
//! is opaque to this crate; only the name and its on-disk spelling matter.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// The file extension used by every unit in the RTL library.
pub const VHDL_EXTENSION: &str = "vhd";

/// A single VHDL unit in the RTL library, identified by logical name.
///
/// All known units are compiled into the crate, so the name is a static
/// string and copies are free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SourceFile {
    name: &'static str,
}

impl SourceFile {
    /// Create a source-file identifier from a logical unit name.
    pub const fn new(name: &'static str) -> Self {
        SourceFile { name }
    }

    /// The logical unit name, e.g. `rggen_apb_adapter`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The on-disk file name, e.g. `rggen_apb_adapter.vhd`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, VHDL_EXTENSION)
    }

    /// The file path under a caller-supplied base directory.
    pub fn path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(self.file_name())
    }
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
