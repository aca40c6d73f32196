//! Member classification.
//!
//! Splits a type's members into the buckets the declaration emitter prints
//! from (instance fields, static fields, inner and outer declarations) and
//! answers whether the type needs a companion class.

use jdecl_ast::{FieldDecl, FieldFragment, Member, TypeDecl};
use jdecl_common::DeclarationOptions;

/// Which header a declaration emitter is producing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EmitPass {
    /// The public header, shared with every client of the type.
    #[default]
    Public,
    /// Declarations only visible to the type's own implementation.
    Private,
}

impl EmitPass {
    pub fn prints_private_declarations(self) -> bool {
        self == EmitPass::Private
    }
}

impl std::fmt::Display for EmitPass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmitPass::Public => f.write_str("public"),
            EmitPass::Private => f.write_str("private"),
        }
    }
}

/// One fragment of a field declaration.
#[derive(Copy, Clone, Debug)]
pub struct FieldRef<'a> {
    pub field: &'a FieldDecl,
    pub fragment: &'a FieldFragment,
    /// Index of the declaring member; fragments sharing it came from one declaration.
    pub declaration_index: usize,
}

impl<'a> FieldRef<'a> {
    pub fn is_static(&self) -> bool {
        is_global_field(self.field, self.fragment)
    }

    pub fn is_same_declaration(&self, other: &FieldRef<'_>) -> bool {
        self.declaration_index == other.declaration_index
    }
}

/// Static storage: explicitly static, or a final primitive (treated as a constant).
pub fn is_global_field(field: &FieldDecl, fragment: &FieldFragment) -> bool {
    field.info.is_static() || (field.info.is_final() && fragment.declared_type.is_primitive())
}

/// Every fragment of every field of the type, in declaration order, ignoring the pass.
pub fn all_field_fragments(decl: &TypeDecl) -> Vec<FieldRef<'_>> {
    decl.members
        .iter()
        .enumerate()
        .filter_map(|(index, member)| member.as_field().map(|field| (index, field)))
        .flat_map(|(declaration_index, field)| {
            field.fragments.iter().map(move |fragment| FieldRef {
                field,
                fragment,
                declaration_index,
            })
        })
        .collect()
}

/// Whether `member` belongs to the header produced by `pass`.
pub fn is_visible_in_pass(decl: &TypeDecl, member: &Member, pass: EmitPass) -> bool {
    if let Some(callable) = member.as_callable()
        && !callable.has_declaration
    {
        return false;
    }
    let is_private = member.info().has_private_declaration || decl.has_private_declaration;
    is_private == pass.prints_private_declarations()
}

fn is_inner_declaration(member: &Member) -> bool {
    match member {
        Member::Method(_) | Member::Constructor(_) => true,
        Member::NativeBlock(native) => !native.is_outer,
        _ => false,
    }
}

fn is_outer_declaration(member: &Member) -> bool {
    match member {
        Member::FreeFunction(_) => true,
        Member::NativeBlock(native) => native.is_outer,
        _ => false,
    }
}

/// Members of one type, bucketed for one pass.
#[derive(Debug, Default)]
pub struct MemberClassification<'a> {
    pub instance_fields: Vec<FieldRef<'a>>,
    pub static_fields: Vec<FieldRef<'a>>,
    /// Methods, constructors and inline native blocks, in declaration order.
    pub inner_declarations: Vec<&'a Member>,
    /// Free functions and outer native blocks, in declaration order.
    pub outer_declarations: Vec<&'a Member>,
    pub needs_companion: bool,
    pub needs_public_companion: bool,
}

fn has_static_accessor_methods(decl: &TypeDecl, options: &DeclarationOptions) -> bool {
    options.static_accessor_methods()
        && decl
            .fields()
            .any(|field| field.info.is_static() && !field.info.has_private_declaration)
}

fn has_static_methods(decl: &TypeDecl) -> bool {
    decl.methods().any(|method| method.info.is_static())
}

/// Whether the public header must declare a companion class for the type.
pub fn needs_public_companion(decl: &TypeDecl, options: &DeclarationOptions) -> bool {
    if decl.has_private_declaration {
        return false;
    }
    decl.has_class_initializer
        || has_static_accessor_methods(decl, options)
        || decl.is_runtime_annotation
        || has_static_methods(decl)
}

/// Whether the type needs a companion class in either header.
pub fn needs_companion(decl: &TypeDecl, options: &DeclarationOptions) -> bool {
    needs_public_companion(decl, options)
        || decl.members.iter().any(|member| {
            member
                .as_callable()
                .is_some_and(|callable| !callable.info.is_abstract())
        })
}

pub fn classify<'a>(
    decl: &'a TypeDecl,
    pass: EmitPass,
    options: &DeclarationOptions,
) -> MemberClassification<'a> {
    let mut classification = MemberClassification {
        needs_companion: needs_companion(decl, options),
        needs_public_companion: needs_public_companion(decl, options),
        ..MemberClassification::default()
    };

    for (declaration_index, member) in decl.members.iter().enumerate() {
        if !is_visible_in_pass(decl, member, pass) {
            continue;
        }
        match member {
            Member::Field(field) => {
                for fragment in &field.fragments {
                    let field_ref = FieldRef {
                        field,
                        fragment,
                        declaration_index,
                    };
                    if field_ref.is_static() {
                        classification.static_fields.push(field_ref);
                    } else {
                        classification.instance_fields.push(field_ref);
                    }
                }
            }
            _ if is_inner_declaration(member) => classification.inner_declarations.push(member),
            _ if is_outer_declaration(member) => classification.outer_declarations.push(member),
            _ => {}
        }
    }

    tracing::trace!(
        type_name = %decl.qualified_name,
        %pass,
        instance_fields = classification.instance_fields.len(),
        static_fields = classification.static_fields.len(),
        inner = classification.inner_declarations.len(),
        outer = classification.outer_declarations.len(),
        "classified members"
    );
    classification
}

#[cfg(test)]
mod tests {
    use super::*;
    use jdecl_ast::{FieldDecl, MethodDecl, ModifierFlags, TypeRef};

    #[test]
    fn test_final_primitive_is_global() {
        let field = FieldDecl::new("LIMIT", TypeRef::int()).with_flags(ModifierFlags::FINAL);
        assert!(is_global_field(&field, &field.fragments[0]));

        let object = FieldDecl::new("name", TypeRef::string()).with_flags(ModifierFlags::FINAL);
        assert!(!is_global_field(&object, &object.fragments[0]));
    }

    #[test]
    fn test_methods_without_declaration_are_hidden() {
        let decl = TypeDecl::class("com.example.Foo")
            .with_member(MethodDecl::new("helper").without_declaration());
        assert!(!is_visible_in_pass(&decl, &decl.members[0], EmitPass::Public));
        assert!(!is_visible_in_pass(&decl, &decl.members[0], EmitPass::Private));
    }
}
