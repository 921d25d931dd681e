//! Materializes flat result-set rows into nested [`Document`]s.

use crate::{
    stmt::{Document, DocumentArray, Type, Value},
    Error, Result,
};

/// Converts a typed result set into a sequence of nested documents.
///
/// The converter borrows the column names, the parallel per-column type
/// tags, and the row matrix; none of them are mutated. Produced documents
/// rewrap every nested mapping and sequence, so they share no structure
/// with the input.
///
/// A `Null` cell is omitted from the produced document: the key is
/// simply absent. A row whose width differs from the column metadata
/// aborts the whole batch with an arity-mismatch error.
#[derive(Debug)]
pub struct DocumentConverter<'a> {
    columns: &'a [&'a str],
    types: &'a [Type],
    rows: &'a [Vec<Value>],
}

impl<'a> DocumentConverter<'a> {
    pub fn new(columns: &'a [&'a str], types: &'a [Type], rows: &'a [Vec<Value>]) -> Self {
        DocumentConverter {
            columns,
            types,
            rows,
        }
    }

    /// Materializes every row, in row order. Zero rows yield an empty
    /// sequence.
    pub fn to_documents(&self) -> Result<Vec<Document>> {
        if self.columns.len() != self.types.len() {
            return Err(anyhow::anyhow!(
                "column metadata mismatch: {} names, {} types",
                self.columns.len(),
                self.types.len()
            )
            .into());
        }

        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| self.row_to_document(index, row))
            .collect()
    }

    /// Materializes the first row, or an empty document when the matrix
    /// has no rows.
    pub fn to_document(&self) -> Result<Document> {
        match self.to_documents()?.into_iter().next() {
            Some(document) => Ok(document),
            None => Ok(Document::new()),
        }
    }

    fn row_to_document(&self, index: usize, row: &[Value]) -> Result<Document> {
        if row.len() != self.columns.len() {
            return Err(Error::arity_mismatch(index, self.columns.len(), row.len()));
        }

        let mut document = Document::new();

        for ((column, ty), value) in self.columns.iter().zip(self.types).zip(row) {
            if value.is_null() {
                continue;
            }

            document.insert(*column, convert(column, ty, value)?);
        }

        Ok(document)
    }
}

/// Converts one cell according to its declared type tag.
///
/// Array elements recurse through this same rule with the element tag,
/// so `array(object)` elements are materialized exactly like top-level
/// object cells.
fn convert(column: &str, ty: &Type, value: &Value) -> Result<Value> {
    if value.is_null() {
        return Ok(Value::Null);
    }

    match ty {
        Type::Object => match value {
            Value::Document(document) => Ok(materialize_document(document).into()),
            _ => Err(Error::shape_violation(
                column,
                "declared type `object` but the row value is not a mapping",
            )),
        },
        Type::Array(element) => match value {
            Value::Array(items) => {
                let items: DocumentArray = items
                    .iter()
                    .map(|item| convert(column, element, item))
                    .collect::<Result<_>>()?;
                Ok(items.into())
            }
            _ => Err(Error::shape_violation(
                column,
                format!("declared type `{ty}` but the row value is not a sequence"),
            )),
        },
        _ => Ok(value.clone()),
    }
}

/// Rebuilds a mapping into a document by inferring each value's shape
/// dynamically: object-typed cells carry no sub-schema, so the keys and
/// shapes come from the mapping itself.
fn materialize_document(source: &Document) -> Document {
    source
        .iter()
        .map(|(key, value)| (key.to_owned(), materialize_value(value)))
        .collect()
}

/// Tagged-variant dispatch over a raw value's runtime shape: a mapping
/// becomes a nested document, a sequence becomes a document array, and
/// anything else is copied as a scalar. Shared by every dynamic
/// recursion path.
fn materialize_value(value: &Value) -> Value {
    match value {
        Value::Document(document) => materialize_document(document).into(),
        Value::Array(items) => items
            .iter()
            .map(materialize_value)
            .collect::<DocumentArray>()
            .into(),
        scalar => scalar.clone(),
    }
}
