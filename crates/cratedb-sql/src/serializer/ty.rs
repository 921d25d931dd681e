use super::{Formatter, ToSql};

use cratedb_core::{stmt::Type, Error, Result};

/// A scalar type keyword, positioned at the named column for error
/// context.
pub(super) struct Keyword<'a> {
    pub(super) column: &'a str,
    pub(super) ty: &'a Type,
}

impl ToSql for Keyword<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let keyword = match self.ty {
            Type::Boolean => "boolean",
            Type::Byte => "byte",
            Type::Short => "short",
            Type::Integer => "integer",
            Type::Long => "long",
            Type::Float => "float",
            Type::Double => "double",
            Type::String => "string",
            Type::Ip => "ip",
            Type::Timestamp => "timestamp",
            // No single keyword exists in this position.
            Type::Object | Type::Array(_) => {
                return Err(Error::type_mapping(self.column, self.ty))
            }
        };

        fmt!(f, keyword);
        Ok(())
    }
}
