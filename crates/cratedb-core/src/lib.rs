//! Core data model for mapping between flat result sets and nested
//! documents on a database with native object and array column types.

mod error;
pub use error::Error;

pub mod convert;
pub mod schema;
pub mod stmt;

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
