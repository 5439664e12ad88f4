//! The ordered source-file manifest.
//!
//! A Manifest is the full, ordered list of units to hand to the downstream
//! build/elaboration tool. Declaration order determines library-elaboration
//! order in that tool, so the manifest is never reordered, deduplicated, or
//! sorted. It is constructed once per build invocation and is immutable
//! after hand-off.

use std::slice;

use serde::Serialize;

use crate::core::source_file::SourceFile;

/// An ordered sequence of source files, insertion order significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    files: Vec<SourceFile>,
}

impl Manifest {
    /// The files in registration order.
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Iterate over the files in registration order.
    pub fn iter(&self) -> slice::Iter<'_, SourceFile> {
        self.files.iter()
    }

    /// Number of files in the manifest.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the manifest is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Check whether a unit with the given logical name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|f| f.name() == name)
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a SourceFile;
    type IntoIter = slice::Iter<'a, SourceFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Builder for a Manifest: push fixed entries in order, then optional
/// entries guarded by explicit predicates.
#[derive(Debug, Default)]
pub struct ManifestBuilder {
    files: Vec<SourceFile>,
}

impl ManifestBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        ManifestBuilder { files: Vec::new() }
    }

    /// Append one file unconditionally.
    pub fn push(&mut self, file: SourceFile) -> &mut Self {
        self.files.push(file);
        self
    }

    /// Append every file from an ordered batch, preserving its order.
    pub fn push_all(&mut self, files: impl IntoIterator<Item = SourceFile>) -> &mut Self {
        self.files.extend(files);
        self
    }

    /// Append one file only when the guard holds.
    pub fn push_if(&mut self, condition: bool, file: SourceFile) -> &mut Self {
        if condition {
            self.files.push(file);
        }
        self
    }

    /// Finish building, handing off the ordered manifest.
    pub fn build(self) -> Manifest {
        Manifest { files: self.files }
    }
}
