use super::{ty::Keyword, Comma, Formatter, Ident, ToSql};

use cratedb_core::{schema::Column, stmt::Type, Error, Result};

/// Emits one column clause, recursing into child columns in declared
/// order. No reordering happens at any level; a primary-key column gets
/// its suffix in place.
impl ToSql for &Column {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.enter(&self.name)?;

        let name = Ident(&self.name);

        match &self.ty {
            Type::Object => {
                if self.primary_key {
                    return Err(Error::shape_violation(
                        &self.name,
                        "object column cannot be a primary key",
                    ));
                }

                if self.children.is_empty() {
                    // Schemaless map column
                    fmt!(f, name " object");
                } else {
                    let children = Comma(&self.children);
                    fmt!(f, name " object as (" children ")");
                }
            }
            Type::Array(element) => {
                if self.primary_key {
                    return Err(Error::shape_violation(
                        &self.name,
                        "array column cannot be a primary key",
                    ));
                }

                match &**element {
                    Type::Object => {
                        if self.children.is_empty() {
                            fmt!(f, name " array(object)");
                        } else {
                            let children = Comma(&self.children);
                            fmt!(f, name " array(object as (" children "))");
                        }
                    }
                    element => {
                        if self.is_structural() {
                            return Err(Error::shape_violation(
                                &self.name,
                                format!(
                                    "array of `{element}` cannot have child columns"
                                ),
                            ));
                        }

                        let keyword = Keyword {
                            column: &self.name,
                            ty: element,
                        };
                        fmt!(f, name " array(" keyword ")");
                    }
                }
            }
            ty => {
                if self.is_structural() {
                    return Err(Error::shape_violation(
                        &self.name,
                        format!("column of type `{ty}` cannot have child columns"),
                    ));
                }

                let keyword = Keyword {
                    column: &self.name,
                    ty,
                };
                fmt!(f, name " " keyword);

                if self.primary_key {
                    fmt!(f, " primary key");
                }
            }
        }

        f.exit();
        Ok(())
    }
}
