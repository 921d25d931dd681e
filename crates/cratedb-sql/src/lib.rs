//! DDL statement types and a string serializer for a SQL dialect with
//! native nested object and array column types.

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;
