use super::*;

/// A statement to drop a table.
#[derive(Debug, Clone)]
pub struct DropTable {
    /// Name of the table.
    pub name: Name,

    /// Whether or not to add an `if exists` clause.
    pub if_exists: bool,
}

impl Statement {
    /// Drops a table.
    ///
    /// This function _does not_ add an `if exists` clause.
    pub fn drop_table(table: &TableDefinition) -> Statement {
        DropTable {
            name: Name::from(&table.name[..]),
            if_exists: false,
        }
        .into()
    }

    /// Drops a table if it exists.
    ///
    /// This function _does_ add an `if exists` clause.
    pub fn drop_table_if_exists(table: &TableDefinition) -> Statement {
        DropTable {
            name: Name::from(&table.name[..]),
            if_exists: true,
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Statement {
        Statement::DropTable(value)
    }
}
