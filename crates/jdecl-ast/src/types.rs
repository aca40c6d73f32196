//! Resolved type references and constant values.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 9] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Void,
    ];

    /// Source-language keyword (`int`, `boolean`, ...).
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Void => "void",
        }
    }

    /// One-letter type signature (`I` for int, `J` for long, ...).
    pub fn signature_char(self) -> char {
        match self {
            PrimitiveKind::Boolean => 'Z',
            PrimitiveKind::Byte => 'B',
            PrimitiveKind::Char => 'C',
            PrimitiveKind::Short => 'S',
            PrimitiveKind::Int => 'I',
            PrimitiveKind::Long => 'J',
            PrimitiveKind::Float => 'F',
            PrimitiveKind::Double => 'D',
            PrimitiveKind::Void => 'V',
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved type as seen at a declaration site.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TypeRef {
    Primitive(PrimitiveKind),
    /// A class or interface type. Nested types use `$` in the qualified name.
    Declared {
        qualified_name: String,
        #[serde(default)]
        is_interface: bool,
    },
    Array(Box<TypeRef>),
    TypeVariable(String),
}

impl TypeRef {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        TypeRef::Primitive(kind)
    }

    pub fn void() -> Self {
        TypeRef::Primitive(PrimitiveKind::Void)
    }

    pub fn int() -> Self {
        TypeRef::Primitive(PrimitiveKind::Int)
    }

    pub fn long() -> Self {
        TypeRef::Primitive(PrimitiveKind::Long)
    }

    pub fn boolean() -> Self {
        TypeRef::Primitive(PrimitiveKind::Boolean)
    }

    pub fn class(qualified_name: impl Into<String>) -> Self {
        TypeRef::Declared {
            qualified_name: qualified_name.into(),
            is_interface: false,
        }
    }

    pub fn interface(qualified_name: impl Into<String>) -> Self {
        TypeRef::Declared {
            qualified_name: qualified_name.into(),
            is_interface: true,
        }
    }

    pub fn string() -> Self {
        Self::class("java.lang.String")
    }

    pub fn object() -> Self {
        Self::class("java.lang.Object")
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(kind) if *kind != PrimitiveKind::Void)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Primitive(PrimitiveKind::Void))
    }

    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            TypeRef::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    /// `boolean` or its wrapper class.
    pub fn is_boolean(&self) -> bool {
        match self {
            TypeRef::Primitive(kind) => *kind == PrimitiveKind::Boolean,
            TypeRef::Declared { qualified_name, .. } => qualified_name == "java.lang.Boolean",
            _ => false,
        }
    }

    /// Name without package or enclosing types (`String`, `int`, `Foo[]`).
    pub fn simple_name(&self) -> String {
        match self {
            TypeRef::Primitive(kind) => kind.name().to_string(),
            TypeRef::Declared { qualified_name, .. } => simple_name_of(qualified_name).to_string(),
            TypeRef::Array(element) => format!("{}[]", element.simple_name()),
            TypeRef::TypeVariable(name) => name.clone(),
        }
    }

    /// Name with `$` nesting kept (`com.example.Outer$Inner`), the form the
    /// naming collaborator maps to target names.
    pub fn binary_name(&self) -> String {
        match self {
            TypeRef::Declared { qualified_name, .. } => qualified_name.clone(),
            TypeRef::Array(element) => format!("{}[]", element.binary_name()),
            _ => self.qualified_name(),
        }
    }

    /// Fully qualified source name (`java.lang.String`, `int`, `int[]`).
    pub fn qualified_name(&self) -> String {
        match self {
            TypeRef::Primitive(kind) => kind.name().to_string(),
            TypeRef::Declared { qualified_name, .. } => qualified_name.replace('$', "."),
            TypeRef::Array(element) => format!("{}[]", element.qualified_name()),
            TypeRef::TypeVariable(name) => name.clone(),
        }
    }
}

/// Last segment of a qualified name, after both package dots and `$` nesting.
pub fn simple_name_of(qualified_name: &str) -> &str {
    let after_dot = qualified_name
        .rsplit_once('.')
        .map_or(qualified_name, |(_, tail)| tail);
    after_dot.rsplit_once('$').map_or(after_dot, |(_, tail)| tail)
}

/// Compile-time constant value of a field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstantValue {
    Boolean(bool),
    Byte(i8),
    Char(char),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl ConstantValue {
    pub fn is_primitive(&self) -> bool {
        !matches!(self, ConstantValue::String(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_names() {
        assert_eq!(TypeRef::string().simple_name(), "String");
        assert_eq!(TypeRef::class("com.example.Outer$Inner").simple_name(), "Inner");
        assert_eq!(TypeRef::array(TypeRef::int()).simple_name(), "int[]");
        assert_eq!(
            TypeRef::class("com.example.Outer$Inner").qualified_name(),
            "com.example.Outer.Inner"
        );
    }

    #[test]
    fn test_signature_chars() {
        let sigs: String = PrimitiveKind::ALL
            .iter()
            .map(|kind| kind.signature_char())
            .collect();
        assert_eq!(sigs, "ZBCSIJFDV");
        assert_eq!(PrimitiveKind::from_name("long"), Some(PrimitiveKind::Long));
        assert_eq!(PrimitiveKind::from_name("Long"), None);
    }

    #[test]
    fn test_void_is_not_a_primitive_value() {
        assert!(TypeRef::int().is_primitive());
        assert!(!TypeRef::void().is_primitive());
        assert!(TypeRef::void().is_void());
        assert!(TypeRef::class("java.lang.Boolean").is_boolean());
    }
}
