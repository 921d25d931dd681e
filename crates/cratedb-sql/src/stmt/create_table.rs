use super::*;

/// A statement to create a table, columns nested as declared.
#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// The table's column tree, in declared order
    pub columns: Vec<Column>,
}

impl Statement {
    /// Creates a table matching the given definition.
    pub fn create_table(table: &TableDefinition) -> Statement {
        CreateTable {
            name: Name::from(&table.name[..]),
            columns: table.columns.clone(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Statement {
        Statement::CreateTable(value)
    }
}
