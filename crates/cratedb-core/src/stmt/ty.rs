use std::fmt;

/// A column data type.
///
/// This is a closed taxonomy: every scalar variant maps to exactly one
/// dialect keyword of the same lower-case spelling, `Object` tags a
/// schemaless key-value mapping, and `Array` carries its element type by
/// construction so an array tag can never lack one. `Array(Object)` is
/// valid and represents a collection of sub-documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Boolean,

    /// Signed 8-bit integer
    Byte,

    /// Signed 16-bit integer
    Short,

    /// Signed 32-bit integer
    Integer,

    /// Signed 64-bit integer
    Long,

    /// 32-bit floating point
    Float,

    /// 64-bit floating point
    Double,

    /// Text value
    String,

    /// IP address, stored as text
    Ip,

    /// Millisecond-precision timestamp
    Timestamp,

    /// A key-value mapping with no fixed sub-schema
    Object,

    /// An ordered collection of a single element type
    Array(Box<Type>),
}

impl Type {
    /// Returns an array type with the given element type.
    pub fn array(element: Type) -> Type {
        Type::Array(Box::new(element))
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(self, Type::Object | Type::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Type::Object)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array(_))
    }

    /// The element type, if this is an array type.
    pub fn element(&self) -> Option<&Type> {
        match self {
            Type::Array(element) => Some(element),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => write!(f, "boolean"),
            Type::Byte => write!(f, "byte"),
            Type::Short => write!(f, "short"),
            Type::Integer => write!(f, "integer"),
            Type::Long => write!(f, "long"),
            Type::Float => write!(f, "float"),
            Type::Double => write!(f, "double"),
            Type::String => write!(f, "string"),
            Type::Ip => write!(f, "ip"),
            Type::Timestamp => write!(f, "timestamp"),
            Type::Object => write!(f, "object"),
            Type::Array(element) => write!(f, "array({element})"),
        }
    }
}
