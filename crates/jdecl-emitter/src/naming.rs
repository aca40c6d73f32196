//! Target-notation naming: type names, selectors and variable names.
//!
//! The emitter never computes identifiers itself; it asks a [`NameResolver`].
//! [`NameTable`] is the default resolver, producing j2objc-style names:
//!
//! | Source                       | Target                       |
//! |------------------------------|------------------------------|
//! | `com.example.Foo`            | `ComExampleFoo`              |
//! | `com.example.Outer$Inner`    | `ComExampleOuter_Inner`      |
//! | `void put(int k, String v)`  | `putWithInt:withNSString:`   |
//! | field `count`                | `count_`                     |

use jdecl_ast::{MethodDecl, PrimitiveKind, TypeRef};
use jdecl_common::DeclarationOptions;
use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};

/// Selector prefix for constructors.
pub const CONSTRUCTOR_SELECTOR: &str = "init";

/// Method names that clash with root-object or runtime selectors.
static RESERVED_METHOD_NAMES: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "alloc",
        "autorelease",
        "class",
        "copy",
        "dealloc",
        "description",
        "hash",
        "init",
        "isEqual",
        "mutableCopy",
        "new",
        "release",
        "retain",
        "retainCount",
        "self",
        "superclass",
        "zone",
    ]
    .into_iter()
    .collect()
});

/// C, Objective-C and runtime identifiers that cannot name a variable.
static RESERVED_VARIABLE_NAMES: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "auto", "break", "bycopy", "byref", "case", "char", "const", "default", "do", "double",
        "else", "enum", "extern", "float", "for", "goto", "id", "if", "in", "inline", "inout",
        "int", "long", "nil", "oneway", "out", "register", "restrict", "return", "self",
        "short", "signed", "sizeof", "static", "struct", "super", "switch", "typedef", "union",
        "unsigned", "void", "volatile", "while", "BOOL", "Class", "FALSE", "NO", "NULL", "SEL",
        "TRUE", "YES",
    ]
    .into_iter()
    .collect()
});

pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `com.example.util` -> `ComExampleUtil`.
pub fn camel_case_package(package: &str) -> String {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(|segment| capitalize(&segment.replace('_', "")))
        .collect()
}

fn split_qualified_name(qualified_name: &str) -> (&str, &str) {
    qualified_name.rsplit_once('.').unwrap_or(("", qualified_name))
}

/// Camel-cased package followed by the `_`-joined nesting path, with no prefix mapping.
pub fn camel_case_qualified_name(qualified_name: &str) -> String {
    let (package, nested) = split_qualified_name(qualified_name);
    format!("{}{}", camel_case_package(package), nested.replace('$', "_"))
}

/// Language-level type names of the target runtime (`jint`, `jboolean`, ...).
pub fn primitive_target_name(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Boolean => "jboolean",
        PrimitiveKind::Byte => "jbyte",
        PrimitiveKind::Char => "jchar",
        PrimitiveKind::Short => "jshort",
        PrimitiveKind::Int => "jint",
        PrimitiveKind::Long => "jlong",
        PrimitiveKind::Float => "jfloat",
        PrimitiveKind::Double => "jdouble",
        PrimitiveKind::Void => "void",
    }
}

/// Naming service consumed by the declaration emitter.
pub trait NameResolver: Sync {
    /// Full selector, including one `:` per parameter.
    fn selector(&self, method: &MethodDecl, is_constructor: bool) -> String;

    /// Instance-variable name of a field (`count` -> `count_`).
    fn variable_name(&self, field_name: &str) -> String;

    /// Type as written in a C-family declaration; object types carry their `*`.
    fn target_type(&self, ty: &TypeRef) -> String;

    /// Target name of a declared type.
    fn full_type_name(&self, qualified_name: &str) -> String;

    /// Field or constant name with reserved words mangled.
    fn variable_base_name(&self, name: &str) -> String {
        if RESERVED_VARIABLE_NAMES.contains(name) {
            format!("{name}_")
        } else {
            name.to_string()
        }
    }

    fn parameter_name(&self, name: &str) -> String {
        self.variable_base_name(name)
    }

    fn static_accessor_name(&self, field_name: &str) -> String {
        self.variable_base_name(field_name)
    }

    /// Native enum type backing an enum class.
    fn native_enum_name(&self, type_name: &str) -> String {
        format!("{type_name}_Enum")
    }

    /// Storage type of a volatile field: primitives keep their name, objects are `id`.
    fn primitive_target_type(&self, ty: &TypeRef) -> &'static str {
        match ty {
            TypeRef::Primitive(kind) => primitive_target_name(*kind),
            _ => "id",
        }
    }

    /// Type in the module-signature notation (`int`, `string`, `foo array`).
    fn signature_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(kind) => match kind {
                PrimitiveKind::Boolean => "bool",
                PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Int => "int",
                PrimitiveKind::Char => "char",
                PrimitiveKind::Long => "int64",
                PrimitiveKind::Float | PrimitiveKind::Double => "float",
                PrimitiveKind::Void => "unit",
            }
            .to_string(),
            TypeRef::Declared { qualified_name, .. } if qualified_name == "java.lang.String" => {
                "string".to_string()
            }
            TypeRef::Declared { .. } => ty.simple_name().to_lowercase(),
            TypeRef::Array(element) => format!("{} array", self.signature_type(element)),
            TypeRef::TypeVariable(name) => format!("'{name}"),
        }
    }
}

/// Default [`NameResolver`].
#[derive(Debug, Default, Clone)]
pub struct NameTable {
    prefixes: FxHashMap<String, String>,
}

impl NameTable {
    pub fn new(options: &DeclarationOptions) -> Self {
        let prefixes = options
            .prefixes
            .iter()
            .map(|(package, prefix)| (package.clone(), prefix.clone()))
            .collect();
        NameTable { prefixes }
    }

    pub fn package_prefix(&self, package: &str) -> String {
        match self.prefixes.get(package) {
            Some(prefix) => prefix.clone(),
            None => camel_case_package(package),
        }
    }

    fn special_type_name(qualified_name: &str) -> Option<&'static str> {
        match qualified_name {
            "java.lang.Object" => Some("NSObject"),
            "java.lang.String" => Some("NSString"),
            "java.lang.Cloneable" => Some("NSCopying"),
            _ => None,
        }
    }

    /// Selector keyword contributed by a parameter type.
    fn parameter_keyword(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(kind) => capitalize(kind.name()),
            TypeRef::Declared { qualified_name, .. } if qualified_name == "java.lang.Object" => {
                "Id".to_string()
            }
            TypeRef::Declared { qualified_name, .. } => self.full_type_name(qualified_name),
            TypeRef::Array(element) => format!("{}Array", self.parameter_keyword(element)),
            TypeRef::TypeVariable(_) => "Id".to_string(),
        }
    }

    fn array_type_name(element: &TypeRef) -> String {
        match element {
            TypeRef::Primitive(kind) => format!("IOS{}Array", capitalize(kind.name())),
            _ => "IOSObjectArray".to_string(),
        }
    }

    /// Selectors inherited from the root object class.
    fn object_method_selector(method: &MethodDecl) -> Option<&'static str> {
        match (method.name.as_str(), method.parameters.as_slice()) {
            ("hashCode", []) => Some("hash"),
            ("toString", []) => Some("description"),
            ("equals", [param]) if param.ty == TypeRef::object() => Some("isEqual:"),
            _ => None,
        }
    }
}

impl NameResolver for NameTable {
    fn selector(&self, method: &MethodDecl, is_constructor: bool) -> String {
        if !is_constructor && let Some(selector) = Self::object_method_selector(method) {
            return selector.to_string();
        }

        let mut selector = if is_constructor {
            CONSTRUCTOR_SELECTOR.to_string()
        } else if RESERVED_METHOD_NAMES.contains(method.name.as_str()) {
            format!("{}__", method.name)
        } else {
            method.name.clone()
        };

        for (index, param) in method.parameters.iter().enumerate() {
            selector.push_str(if index == 0 { "With" } else { "with" });
            selector.push_str(&self.parameter_keyword(&param.ty));
            selector.push(':');
        }
        selector
    }

    fn variable_name(&self, field_name: &str) -> String {
        format!("{}_", self.variable_base_name(field_name))
    }

    fn target_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(kind) => primitive_target_name(*kind).to_string(),
            TypeRef::Declared { qualified_name, .. } if qualified_name == "java.lang.Object" => {
                "id".to_string()
            }
            TypeRef::Declared {
                qualified_name,
                is_interface: true,
            } => format!("id<{}>", self.full_type_name(qualified_name)),
            TypeRef::Declared { qualified_name, .. } => {
                format!("{} *", self.full_type_name(qualified_name))
            }
            TypeRef::Array(element) => format!("{} *", Self::array_type_name(element)),
            TypeRef::TypeVariable(_) => "id".to_string(),
        }
    }

    fn full_type_name(&self, qualified_name: &str) -> String {
        if let Some(special) = Self::special_type_name(qualified_name) {
            return special.to_string();
        }
        let (package, nested) = split_qualified_name(qualified_name);
        format!("{}{}", self.package_prefix(package), nested.replace('$', "_"))
    }
}
