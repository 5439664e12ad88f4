//! High-level operations.

pub mod register;

pub use register::register_library;
