//! rggen-vhdl-rtl - Source-file manifest for the rggen VHDL runtime RTL library
//!
//! This crate declares the ordered set of VHDL source files that make up the
//! rggen runtime RTL library and registers them, in declaration order, with a
//! downstream build/elaboration tool. When the `RGGEN_ENABLE_BACKDOOR` macro
//! is not defined, a dummy backdoor-access unit is appended so the tool always
//! receives a complete unit set.

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::{
    library::{BACKDOOR_DUMMY, BACKDOOR_MACRO, BASE_FILES},
    macros::{MacroRegistry, MacroSet},
    manifest::{Manifest, ManifestBuilder},
    sink::{CollectedFiles, RegisterSink},
    source_file::SourceFile,
};

pub use crate::ops::register::register_library;
pub use crate::util::config::Config;
