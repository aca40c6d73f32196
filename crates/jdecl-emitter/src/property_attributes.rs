//! Property attribute synthesis.
//!
//! A field carrying a property directive becomes an `@property` line. The
//! directive's explicit attributes are merged with facts inferred from the
//! type: accessor selectors, atomicity, `class` for static storage, and one
//! nullability token.

use crate::naming::{NameResolver, capitalize};
use indexmap::IndexSet;
use jdecl_ast::{FieldDecl, FieldFragment, MethodDecl, PropertyDirective, TypeDecl, TypeRef};
use jdecl_common::diagnostics::diagnostic_messages;
use jdecl_common::{DeclarationOptions, DiagnosticMessage};

/// Canonical print order. Unknown tokens sort after these, in insertion order.
const ATTRIBUTE_RANK: &[&str] = &[
    "class",
    "nonatomic",
    "atomic",
    "readonly",
    "readwrite",
    "assign",
    "copy",
    "retain",
    "strong",
    "weak",
    "unsafe_unretained",
    "nullable",
    "nonnull",
    "null_resettable",
    "null_unspecified",
    "getter",
    "setter",
];

fn attribute_rank(attribute: &str) -> usize {
    let key = attribute
        .split_once('=')
        .map_or(attribute, |(key, _)| key)
        .trim();
    ATTRIBUTE_RANK
        .iter()
        .position(|known| *known == key)
        .unwrap_or(ATTRIBUTE_RANK.len())
}

/// Ordered, duplicate-free working set of attribute tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyAttributeSet {
    attributes: IndexSet<String>,
}

impl PropertyAttributeSet {
    pub fn from_directive(directive: &PropertyDirective) -> Self {
        PropertyAttributeSet {
            attributes: directive
                .attributes
                .iter()
                .map(|attr| attr.trim().to_string())
                .filter(|attr| !attr.is_empty())
                .collect(),
        }
    }

    pub fn insert(&mut self, attribute: impl Into<String>) -> bool {
        self.attributes.insert(attribute.into())
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.attributes.contains(attribute)
    }

    /// Removes every `key=...` token.
    pub fn remove_named(&mut self, key: &str) {
        self.attributes.retain(|attr| {
            attr.split_once('=')
                .is_none_or(|(name, _)| name.trim() != key)
        });
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(String::as_str)
    }

    /// Comma separated, in canonical order.
    pub fn to_attribute_string(&self) -> String {
        let mut sorted: Vec<&str> = self.iter().collect();
        sorted.sort_by_key(|attr| attribute_rank(attr));
        sorted.join(", ")
    }
}

/// Getter lookup: `name()`, else `isName()` for booleans or `getName()`.
pub fn find_getter<'a>(decl: &'a TypeDecl, property_name: &str, ty: &TypeRef) -> Option<&'a MethodDecl> {
    decl.find_method(property_name, &[]).or_else(|| {
        let prefix = if ty.is_boolean() { "is" } else { "get" };
        decl.find_method(&format!("{prefix}{}", capitalize(property_name)), &[])
    })
}

/// Setter lookup: `setName(T)` where `T` is the property's type.
pub fn find_setter<'a>(decl: &'a TypeDecl, property_name: &str, ty: &TypeRef) -> Option<&'a MethodDecl> {
    let qualified = ty.qualified_name();
    decl.find_method(
        &format!("set{}", capitalize(property_name)),
        &[qualified.as_str()],
    )
}

/// Result of merging a directive with inferred facts.
#[derive(Debug)]
pub struct SynthesizedProperty {
    pub name: String,
    pub attributes: PropertyAttributeSet,
    /// Configuration errors; the property is still emitted.
    pub errors: Vec<DiagnosticMessage>,
}

pub fn synthesize_property(
    decl: &TypeDecl,
    field: &FieldDecl,
    fragment: &FieldFragment,
    directive: &PropertyDirective,
    resolver: &dyn NameResolver,
    options: &DeclarationOptions,
) -> SynthesizedProperty {
    let ty = &fragment.declared_type;
    let name = resolver.variable_base_name(&fragment.name);
    let mut attributes = PropertyAttributeSet::from_directive(directive);
    let mut errors = Vec::new();

    if let Some(getter) = find_getter(decl, &name, ty) {
        attributes.remove_named("getter");
        attributes.insert(format!("getter={}", resolver.selector(getter, false)));
        if !getter.info.is_synchronized() {
            attributes.insert("nonatomic");
        }
    }
    if let Some(setter) = find_setter(decl, &name, ty) {
        attributes.remove_named("setter");
        attributes.insert(format!("setter={}", resolver.selector(setter, false)));
        if !setter.info.is_synchronized() {
            attributes.insert("nonatomic");
        }
    }

    if field.info.is_static() {
        attributes.insert("class");
    } else if attributes.contains("class") {
        errors.push(diagnostic_messages::ONLY_STATIC_FIELDS_CAN_BE_CLASS_PROPERTIES);
    }
    if attributes.contains("class") && !options.static_accessor_methods() {
        errors.push(diagnostic_messages::CLASS_PROPERTIES_REQUIRE_STATIC_ACCESSORS);
    }

    if options.nullability() && !ty.is_primitive() {
        if field.info.annotations.iter().any(|a| a.is_nullable()) {
            attributes.insert("nullable");
        } else if field.info.annotations.iter().any(|a| a.is_nonnull()) {
            attributes.insert("nonnull");
        } else if !attributes.contains("null_unspecified") {
            attributes.insert("null_resettable");
        }
    }

    SynthesizedProperty {
        name,
        attributes,
        errors,
    }
}
