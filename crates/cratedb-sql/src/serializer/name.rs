use super::{Formatter, ToSql};

use crate::stmt;

use cratedb_core::Result;

// Table names are emitted bare; only column identifiers are quoted.
impl ToSql for &stmt::Name {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(&self.0);
        Ok(())
    }
}
