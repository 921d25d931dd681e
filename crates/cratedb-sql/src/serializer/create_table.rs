use super::{Comma, Formatter, ToSql};

use crate::stmt;

use cratedb_core::Result;

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        if self.columns.is_empty() {
            return Err(anyhow::anyhow!("table `{}` has no columns", self.name).into());
        }

        let name = &self.name;
        let columns = Comma(&self.columns);

        fmt!(f, "create table " name " (" columns ")");
        Ok(())
    }
}
