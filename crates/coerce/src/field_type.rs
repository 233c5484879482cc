//! Field type enumeration
//!
//! Names the semantic type a mapped attribute is declared with. The
//! registry is keyed by it.

/// The declared type of a mapped field
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldType {
    /// Calendar date, stored as UTC midnight
    Date,
    /// Instant, stored as UTC timestamp
    Time,
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Integer,
    /// 64-bit float
    Float,
    /// Boolean
    Boolean,
    /// Ordered sequence of values
    Array,
    /// Raw bytes
    Binary,
    /// Embedded document
    Document,
    /// Application-defined type registered by name
    Custom(String),
}

impl FieldType {
    /// All built-in field types (for iteration)
    pub const BUILTIN: [FieldType; 9] = [
        FieldType::Date,
        FieldType::Time,
        FieldType::String,
        FieldType::Integer,
        FieldType::Float,
        FieldType::Boolean,
        FieldType::Array,
        FieldType::Binary,
        FieldType::Document,
    ];

    /// Display name
    pub fn name(&self) -> &str {
        match self {
            FieldType::Date => "Date",
            FieldType::Time => "Time",
            FieldType::String => "String",
            FieldType::Integer => "Integer",
            FieldType::Float => "Float",
            FieldType::Boolean => "Boolean",
            FieldType::Array => "Array",
            FieldType::Binary => "Binary",
            FieldType::Document => "Document",
            FieldType::Custom(name) => name,
        }
    }

    /// True for application-defined types
    pub fn is_custom(&self) -> bool {
        matches!(self, FieldType::Custom(_))
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
