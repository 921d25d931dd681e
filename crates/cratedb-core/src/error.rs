use crate::stmt::Type;

/// An error raised by document materialization or DDL generation.
///
/// Every variant indicates a defect in the upstream schema derivation or
/// result-set metadata, not a transient condition. Nothing here is
/// retryable; the message carries the offending column, type, or row so
/// the defect can be diagnosed without re-running with tracing.
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    /// A column tree or row value whose structure contradicts its
    /// declared shape.
    ShapeViolation { column: String, message: String },

    /// A type that has no dialect spelling in the position it was used.
    TypeMapping { column: String, ty: Type },

    /// A row whose width differs from the column metadata width.
    ArityMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    Anyhow(anyhow::Error),
}

impl Error {
    /// Creates a shape-violation error for the named column.
    pub fn shape_violation(column: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(ErrorKind::ShapeViolation {
            column: column.into(),
            message: message.into(),
        })
    }

    /// Creates a type-mapping error: `ty` has no dialect keyword in the
    /// position the named column used it.
    pub fn type_mapping(column: impl Into<String>, ty: &Type) -> Error {
        Error::from(ErrorKind::TypeMapping {
            column: column.into(),
            ty: ty.clone(),
        })
    }

    /// Creates an arity-mismatch error for the given row index.
    pub fn arity_mismatch(row: usize, expected: usize, actual: usize) -> Error {
        Error::from(ErrorKind::ArityMismatch {
            row,
            expected,
            actual,
        })
    }

    /// Returns `true` if this error is a shape violation.
    pub fn is_shape_violation(&self) -> bool {
        matches!(self.kind, ErrorKind::ShapeViolation { .. })
    }

    /// Returns `true` if this error is a type-mapping error.
    pub fn is_type_mapping(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeMapping { .. })
    }

    /// Returns `true` if this error is an arity mismatch.
    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::ArityMismatch { .. })
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ErrorKind::ShapeViolation { column, message } => {
                write!(f, "shape violation: column `{column}`: {message}")
            }
            ErrorKind::TypeMapping { column, ty } => {
                write!(f, "unsupported type: column `{column}` has type `{ty}`")
            }
            ErrorKind::ArityMismatch {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "arity mismatch: row {row} has {actual} values, expected {expected}"
                )
            }
            ErrorKind::Anyhow(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { kind }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_violation_display() {
        let err = Error::shape_violation("objects", "array column cannot be a primary key");
        assert_eq!(
            err.to_string(),
            "shape violation: column `objects`: array column cannot be a primary key"
        );
        assert!(err.is_shape_violation());
    }

    #[test]
    fn type_mapping_display() {
        let ty = Type::array(Type::array(Type::Integer));
        let err = Error::type_mapping("matrix", &ty);
        assert_eq!(
            err.to_string(),
            "unsupported type: column `matrix` has type `array(array(integer))`"
        );
        assert!(err.is_type_mapping());
    }

    #[test]
    fn arity_mismatch_display() {
        let err = Error::arity_mismatch(3, 4, 2);
        assert_eq!(
            err.to_string(),
            "arity mismatch: row 3 has 2 values, expected 4"
        );
        assert!(err.is_arity_mismatch());
    }

    #[test]
    fn anyhow_bridge() {
        let err: Error = anyhow::anyhow!("something failed").into();
        assert_eq!(err.to_string(), "something failed");
    }
}
