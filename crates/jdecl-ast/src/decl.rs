//! Type and member declarations.

use crate::modifiers::{Annotation, Availability, MemberInfo, ModifierFlags, Visibility};
use crate::types::{ConstantValue, TypeRef, simple_name_of};
use jdecl_common::SourceLocation;
use serde::{Deserialize, Serialize};

/// Name carried by constructors; matches the source language's internal name.
pub const CONSTRUCTOR_NAME: &str = "<init>";

fn default_true() -> bool {
    true
}

fn default_void() -> TypeRef {
    TypeRef::void()
}

/// Builder-style setters for the `info: MemberInfo` every member carries.
macro_rules! impl_member_info_builders {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                pub fn with_visibility(mut self, visibility: Visibility) -> Self {
                    self.info.visibility = visibility;
                    self
                }

                pub fn with_flags(mut self, flags: ModifierFlags) -> Self {
                    self.info.flags |= flags;
                    self
                }

                pub fn with_annotation(mut self, name: &str) -> Self {
                    self.info.annotations.push(Annotation::new(name));
                    self
                }

                pub fn with_doc(mut self, doc: &str) -> Self {
                    self.info.doc_comment = Some(doc.to_string());
                    self
                }

                pub fn unavailable(mut self) -> Self {
                    self.info.availability = Availability::Unavailable;
                    self
                }

                pub fn private_declaration(mut self) -> Self {
                    self.info.has_private_declaration = true;
                    self
                }

                pub fn at(mut self, location: SourceLocation) -> Self {
                    self.info.location = location;
                    self
                }
            }
        )*
    };
}

/// Explicit `@Property` directive on a field declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyDirective {
    /// Attribute tokens as written (`readonly`, `copy`, `getter=isOn`, ...).
    pub attributes: Vec<String>,
}

impl PropertyDirective {
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyDirective {
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }
}

/// One declarator of a field declaration (`int a, b;` has two fragments).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFragment {
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: TypeRef,
    #[serde(default)]
    pub constant_value: Option<ConstantValue>,
    #[serde(default)]
    pub is_synthetic: bool,
    #[serde(default)]
    pub location: SourceLocation,
}

impl FieldFragment {
    pub fn new(name: impl Into<String>, declared_type: TypeRef) -> Self {
        FieldFragment {
            name: name.into(),
            declared_type,
            constant_value: None,
            is_synthetic: false,
            location: SourceLocation::default(),
        }
    }

    pub fn with_constant(mut self, value: ConstantValue) -> Self {
        self.constant_value = Some(value);
        self
    }

    pub fn synthetic(mut self) -> Self {
        self.is_synthetic = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDecl {
    #[serde(flatten)]
    pub info: MemberInfo,
    pub fragments: Vec<FieldFragment>,
    #[serde(default)]
    pub is_weak_reference: bool,
    #[serde(default)]
    pub is_retained_with: bool,
    #[serde(default)]
    pub property: Option<PropertyDirective>,
}

impl FieldDecl {
    /// A single-fragment field declaration.
    pub fn new(name: impl Into<String>, declared_type: TypeRef) -> Self {
        Self::with_fragments(vec![FieldFragment::new(name, declared_type)])
    }

    pub fn with_fragments(fragments: Vec<FieldFragment>) -> Self {
        FieldDecl {
            info: MemberInfo::default(),
            fragments,
            is_weak_reference: false,
            is_retained_with: false,
            property: None,
        }
    }

    pub fn with_constant(mut self, value: ConstantValue) -> Self {
        if let Some(fragment) = self.fragments.first_mut() {
            fragment.constant_value = Some(value);
        }
        self
    }

    pub fn with_property(mut self, property: PropertyDirective) -> Self {
        self.property = Some(property);
        self
    }

    pub fn weak(mut self) -> Self {
        self.is_weak_reference = true;
        self
    }

    pub fn retained_with(mut self) -> Self {
        self.is_retained_with = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Parameter {
            name: name.into(),
            ty,
            annotations: Vec::new(),
        }
    }
}

/// A method or constructor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDecl {
    #[serde(flatten)]
    pub info: MemberInfo,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default = "default_void")]
    pub return_type: TypeRef,
    /// False for methods that only exist in the implementation.
    #[serde(default = "default_true")]
    pub has_declaration: bool,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>) -> Self {
        MethodDecl {
            info: MemberInfo::default(),
            name: name.into(),
            parameters: Vec::new(),
            return_type: TypeRef::void(),
            has_declaration: true,
        }
    }

    pub fn constructor() -> Self {
        Self::new(CONSTRUCTOR_NAME)
    }

    pub fn with_param(mut self, name: &str, ty: TypeRef) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    pub fn returning(mut self, ty: TypeRef) -> Self {
        self.return_type = ty;
        self
    }

    pub fn without_declaration(mut self) -> Self {
        self.has_declaration = false;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumConstantDecl {
    #[serde(flatten)]
    pub info: MemberInfo,
    pub name: String,
}

impl EnumConstantDecl {
    pub fn new(name: impl Into<String>) -> Self {
        EnumConstantDecl {
            info: MemberInfo {
                visibility: Visibility::Public,
                flags: ModifierFlags::STATIC | ModifierFlags::FINAL,
                ..MemberInfo::default()
            },
            name: name.into(),
        }
    }
}

/// A free C function generated for the type (e.g. static method trampolines).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDecl {
    #[serde(flatten)]
    pub info: MemberInfo,
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default = "default_void")]
    pub return_type: TypeRef,
    #[serde(default)]
    pub returns_retained: bool,
}

impl FunctionDecl {
    pub fn new(name: impl Into<String>) -> Self {
        FunctionDecl {
            info: MemberInfo::default(),
            name: name.into(),
            parameters: Vec::new(),
            return_type: TypeRef::void(),
            returns_retained: false,
        }
    }

    pub fn with_param(mut self, name: &str, ty: TypeRef) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    pub fn returning(mut self, ty: TypeRef) -> Self {
        self.return_type = ty;
        self
    }
}

/// Verbatim native code attached to the type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeDecl {
    #[serde(flatten)]
    pub info: MemberInfo,
    #[serde(default)]
    pub header_code: Option<String>,
    #[serde(default)]
    pub is_outer: bool,
}

impl NativeDecl {
    pub fn new(header_code: impl Into<String>) -> Self {
        NativeDecl {
            info: MemberInfo::default(),
            header_code: Some(header_code.into()),
            is_outer: false,
        }
    }

    pub fn outer(mut self) -> Self {
        self.is_outer = true;
        self
    }
}

impl_member_info_builders!(FieldDecl, MethodDecl, EnumConstantDecl, FunctionDecl, NativeDecl);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(MethodDecl),
    EnumConstant(EnumConstantDecl),
    #[serde(rename = "function")]
    FreeFunction(FunctionDecl),
    #[serde(rename = "native")]
    NativeBlock(NativeDecl),
}

impl Member {
    pub fn info(&self) -> &MemberInfo {
        match self {
            Member::Field(field) => &field.info,
            Member::Method(method) | Member::Constructor(method) => &method.info,
            Member::EnumConstant(constant) => &constant.info,
            Member::FreeFunction(function) => &function.info,
            Member::NativeBlock(native) => &native.info,
        }
    }

    pub fn is_static(&self) -> bool {
        self.info().is_static()
    }

    pub fn is_constructor(&self) -> bool {
        matches!(self, Member::Constructor(_))
    }

    /// Methods and constructors.
    pub fn as_callable(&self) -> Option<&MethodDecl> {
        match self {
            Member::Method(method) | Member::Constructor(method) => Some(method),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&FieldDecl> {
        match self {
            Member::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_enum_constant(&self) -> Option<&EnumConstantDecl> {
        match self {
            Member::EnumConstant(constant) => Some(constant),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Member::Field(_) => "field",
            Member::Method(_) => "method",
            Member::Constructor(_) => "constructor",
            Member::EnumConstant(_) => "enum constant",
            Member::FreeFunction(_) => "function",
            Member::NativeBlock(_) => "native block",
        }
    }
}

impl From<FieldDecl> for Member {
    fn from(field: FieldDecl) -> Self {
        Member::Field(field)
    }
}

impl From<EnumConstantDecl> for Member {
    fn from(constant: EnumConstantDecl) -> Self {
        Member::EnumConstant(constant)
    }
}

impl From<FunctionDecl> for Member {
    fn from(function: FunctionDecl) -> Self {
        Member::FreeFunction(function)
    }
}

impl From<NativeDecl> for Member {
    fn from(native: NativeDecl) -> Self {
        Member::NativeBlock(native)
    }
}

impl From<MethodDecl> for Member {
    /// Constructors are recognized by their reserved name.
    fn from(method: MethodDecl) -> Self {
        if method.name == CONSTRUCTOR_NAME {
            Member::Constructor(method)
        } else {
            Member::Method(method)
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
}

/// One resolved source type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeDecl {
    pub kind: TypeKind,
    /// Dotted package plus `$`-separated nesting, e.g. `com.example.Outer$Inner`.
    pub qualified_name: String,
    pub members: Vec<Member>,
    pub visibility: Visibility,
    pub flags: ModifierFlags,
    pub annotations: Vec<Annotation>,
    pub doc_comment: Option<String>,
    pub declared_supertype: Option<TypeRef>,
    pub declared_interfaces: Vec<TypeRef>,
    pub is_top_level: bool,
    pub is_anonymous: bool,
    pub is_package_info: bool,
    /// The type itself is hidden from the public header.
    pub has_private_declaration: bool,
    /// Unreachable class kept only for its constants.
    pub is_dead_class: bool,
    /// The type has class-initialization statements.
    pub has_class_initializer: bool,
    /// Annotation type retained at runtime.
    pub is_runtime_annotation: bool,
    pub parameters_nonnull_by_default: bool,
    pub location: SourceLocation,
}

impl TypeDecl {
    pub fn new(kind: TypeKind, qualified_name: impl Into<String>) -> Self {
        TypeDecl {
            kind,
            qualified_name: qualified_name.into(),
            visibility: Visibility::Public,
            is_top_level: true,
            ..TypeDecl::default()
        }
    }

    pub fn class(qualified_name: impl Into<String>) -> Self {
        Self::new(TypeKind::Class, qualified_name)
    }

    pub fn interface(qualified_name: impl Into<String>) -> Self {
        Self::new(TypeKind::Interface, qualified_name)
    }

    pub fn enumeration(qualified_name: impl Into<String>) -> Self {
        Self::new(TypeKind::Enum, qualified_name)
    }

    pub fn annotation(qualified_name: impl Into<String>) -> Self {
        Self::new(TypeKind::Annotation, qualified_name)
    }

    pub fn with_member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn with_interface(mut self, ty: TypeRef) -> Self {
        self.declared_interfaces.push(ty);
        self
    }

    pub fn with_supertype(mut self, ty: TypeRef) -> Self {
        self.declared_supertype = Some(ty);
        self
    }

    pub fn simple_name(&self) -> &str {
        simple_name_of(&self.qualified_name)
    }

    /// Package part of the qualified name; empty for the default package.
    pub fn package_name(&self) -> &str {
        self.qualified_name
            .rsplit_once('.')
            .map_or("", |(package, _)| package)
    }

    /// Interfaces and annotation types become protocols.
    pub fn is_interface(&self) -> bool {
        matches!(self.kind, TypeKind::Interface | TypeKind::Annotation)
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    pub fn is_annotation(&self) -> bool {
        self.kind == TypeKind::Annotation
    }

    pub fn is_deprecated(&self) -> bool {
        crate::modifiers::has_deprecated(&self.annotations)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(Member::as_field)
    }

    /// Methods, not constructors.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|member| match member {
            Member::Method(method) => Some(method),
            _ => None,
        })
    }

    pub fn enum_constants(&self) -> impl Iterator<Item = &EnumConstantDecl> {
        self.members.iter().filter_map(Member::as_enum_constant)
    }

    /// First method with the given name and parameter types (by qualified name).
    pub fn find_method(&self, name: &str, parameter_types: &[&str]) -> Option<&MethodDecl> {
        self.methods().find(|method| {
            method.name == name
                && method.parameters.len() == parameter_types.len()
                && method
                    .parameters
                    .iter()
                    .zip(parameter_types)
                    .all(|(param, expected)| param.ty.qualified_name() == *expected)
        })
    }
}
