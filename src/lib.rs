//! Pure string operations in Rust
//!
//! Concatenation, trimming, case conversion, a greeting template, ROT13,
//! box-drawing rectangles, e-mail list splitting, a string type check and a
//! playing-card index lookup. Every operation is a plain function in
//! [`strings`]; the [`registry`] exposes the same operations by name over
//! dynamic [`Value`]s.

pub mod error;
pub mod model;
pub mod registry;
pub mod strings;

// Re-export main types
pub use error::{Result, StringTaskError};
pub use model::{TypeInfo, Value};
pub use registry::{
    CacheConfig, FunctionError, FunctionRegistry, create_registry_with_config,
    create_standard_registry,
};
pub use strings::*;
