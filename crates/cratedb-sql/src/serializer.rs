#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

// Fragment serializers
mod column;
mod create_table;
mod drop_table;
mod name;
mod statement;
mod ty;

use crate::stmt::Statement;

use cratedb_core::{Error, Result};

/// Maximum column-tree nesting the serializer will follow before failing
/// fast. Owned column trees cannot cycle, so this only trips on
/// pathological generated input.
const MAX_NESTING_DEPTH: usize = 32;

/// Serializes a statement to a SQL string.
///
/// Serialization is a pure function of the statement: the same input
/// always yields a byte-identical string. The output is a single line
/// with no trailing semicolon.
#[derive(Debug, Default, Clone)]
pub struct Serializer;

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Current column-tree nesting level, bounded by
    /// [`MAX_NESTING_DEPTH`]
    depth: usize,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer
    }

    pub fn serialize(&self, stmt: &Statement) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            depth: 0,
        };

        stmt.to_sql(&mut fmt)?;

        Ok(ret)
    }
}

impl Formatter<'_> {
    fn enter(&mut self, column: &str) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(Error::shape_violation(
                column,
                format!("column tree exceeds the maximum nesting depth of {MAX_NESTING_DEPTH}"),
            ));
        }
        Ok(())
    }

    fn exit(&mut self) {
        self.depth -= 1;
    }
}
