use super::stmt::Type;

/// A node in a table's column tree.
///
/// Columns are built once by the schema-derivation layer from an entity's
/// field graph and read-only afterwards; the consuming builder methods
/// below are the only way to set the optional pieces. A column is either
/// a leaf (scalar, scalar array, or schemaless object) or a structural
/// column: an `Object` or `Array(Object)` column carrying child columns
/// in declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column, unique among its siblings.
    pub name: String,

    /// The declared column type. For array columns the element type is
    /// carried inside [`Type::Array`].
    pub ty: Type,

    /// True if the column is part of the table's primary key.
    pub primary_key: bool,

    /// Child columns of a structural column, in declared order. Empty
    /// for leaves, including schemaless `object` columns.
    pub children: Vec<Column>,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: Type) -> Column {
        Column {
            name: name.into(),
            ty,
            primary_key: false,
            children: vec![],
        }
    }

    /// Marks the column as part of the primary key.
    pub fn primary_key(mut self) -> Column {
        self.primary_key = true;
        self
    }

    /// Attaches child columns, making this a structural column.
    pub fn with_children(mut self, children: Vec<Column>) -> Column {
        self.children = children;
        self
    }

    /// True if the column carries child columns.
    pub fn is_structural(&self) -> bool {
        !self.children.is_empty()
    }

    /// The element type, if this is an array column.
    pub fn element(&self) -> Option<&Type> {
        self.ty.element()
    }
}
