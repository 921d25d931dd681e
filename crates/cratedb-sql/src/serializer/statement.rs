use super::{Formatter, ToSql};

use crate::stmt::Statement;

use cratedb_core::Result;

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
        }
    }
}
