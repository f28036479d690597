//! Infrastructure adapters for Stencil.
//!
//! This crate implements the ports defined in `stencil-core::application::ports`
//! and loads the JSON inputs the core consumes. It contains all I/O.

pub mod filesystem;
pub mod loader;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use loader::{LoadError, load_config, load_registry};
