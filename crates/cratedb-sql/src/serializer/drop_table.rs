use super::{Formatter, ToSql};

use crate::stmt;

use cratedb_core::Result;

impl ToSql for &stmt::DropTable {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let name = &self.name;

        if self.if_exists {
            fmt!(f, "drop table if exists " name);
        } else {
            fmt!(f, "drop table " name);
        }
        Ok(())
    }
}
