use super::Column;

/// A named table and its ordered root columns.
///
/// Owned by the caller requesting DDL generation; the compiler only
/// reads it. Column order here determines clause order in the generated
/// statement.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    /// Name of the table
    pub name: String,

    /// The table's root columns, in declared order
    pub columns: Vec<Column>,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> TableDefinition {
        TableDefinition {
            name: name.into(),
            columns,
        }
    }

    /// Columns flagged as part of the primary key.
    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|column| column.primary_key)
    }
}
