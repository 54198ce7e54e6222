//! Value model shared by the function registry and the CLI

#![warn(missing_docs)]

pub mod types;
pub mod value;

pub use types::TypeInfo;
pub use value::Value;
