use jdecl_ast::{
    FieldDecl, FieldFragment, FunctionDecl, MethodDecl, ModifierFlags, NativeDecl, TypeDecl,
    TypeRef, Visibility,
};
use jdecl_common::DeclarationOptions;
use jdecl_emitter::classifier::{needs_companion, needs_public_companion};
use jdecl_emitter::{EmitPass, classify};

fn field_names(fields: &[jdecl_emitter::FieldRef<'_>]) -> Vec<String> {
    fields.iter().map(|f| f.fragment.name.clone()).collect()
}

#[test]
fn test_static_and_final_primitive_fields_are_static() {
    let decl = TypeDecl::class("com.example.Config")
        .with_member(FieldDecl::new("count", TypeRef::int()))
        .with_member(FieldDecl::new("LIMIT", TypeRef::int()).with_flags(ModifierFlags::FINAL))
        .with_member(FieldDecl::new("name", TypeRef::string()).with_flags(ModifierFlags::FINAL))
        .with_member(
            FieldDecl::new("shared", TypeRef::string()).with_flags(ModifierFlags::STATIC),
        );

    let members = classify(&decl, EmitPass::Public, &DeclarationOptions::default());
    assert_eq!(field_names(&members.instance_fields), vec!["count", "name"]);
    assert_eq!(field_names(&members.static_fields), vec!["LIMIT", "shared"]);
}

#[test]
fn test_fragments_keep_their_declaration() {
    let decl = TypeDecl::class("com.example.Pair").with_member(FieldDecl::with_fragments(vec![
        FieldFragment::new("left", TypeRef::int()),
        FieldFragment::new("right", TypeRef::int()),
    ]));

    let members = classify(&decl, EmitPass::Public, &DeclarationOptions::default());
    assert_eq!(members.instance_fields.len(), 2);
    assert!(members.instance_fields[0].is_same_declaration(&members.instance_fields[1]));
}

#[test]
fn test_inner_and_outer_declarations() {
    let decl = TypeDecl::class("com.example.Mixed")
        .with_member(MethodDecl::new("run"))
        .with_member(MethodDecl::constructor())
        .with_member(NativeDecl::new("// inline"))
        .with_member(NativeDecl::new("// outer").outer())
        .with_member(FunctionDecl::new("ComExampleMixed_helper"));

    let members = classify(&decl, EmitPass::Public, &DeclarationOptions::default());
    let inner: Vec<&str> = members
        .inner_declarations
        .iter()
        .map(|member| member.kind_name())
        .collect();
    let outer: Vec<&str> = members
        .outer_declarations
        .iter()
        .map(|member| member.kind_name())
        .collect();
    assert_eq!(inner, vec!["method", "constructor", "native block"]);
    assert_eq!(outer, vec!["native block", "function"]);
}

#[test]
fn test_passes_split_on_private_declaration() {
    let decl = TypeDecl::class("com.example.Split")
        .with_member(MethodDecl::new("visible").with_visibility(Visibility::Public))
        .with_member(MethodDecl::new("hidden").private_declaration())
        .with_member(MethodDecl::new("implementationOnly").without_declaration());

    let options = DeclarationOptions::default();
    let public = classify(&decl, EmitPass::Public, &options);
    let private = classify(&decl, EmitPass::Private, &options);

    let names = |members: &jdecl_emitter::MemberClassification<'_>| -> Vec<String> {
        members
            .inner_declarations
            .iter()
            .filter_map(|m| m.as_callable().map(|c| c.name.clone()))
            .collect()
    };
    assert_eq!(names(&public), vec!["visible"]);
    assert_eq!(names(&private), vec!["hidden"]);
}

#[test]
fn test_private_type_members_all_go_to_private_pass() {
    let mut decl = TypeDecl::class("com.example.Secret").with_member(MethodDecl::new("run"));
    decl.has_private_declaration = true;

    let options = DeclarationOptions::default();
    assert!(classify(&decl, EmitPass::Public, &options).inner_declarations.is_empty());
    assert_eq!(classify(&decl, EmitPass::Private, &options).inner_declarations.len(), 1);
}

#[test]
fn test_public_companion_triggers() {
    let options = DeclarationOptions::default();

    let plain = TypeDecl::interface("com.example.Plain")
        .with_member(MethodDecl::new("run").with_flags(ModifierFlags::ABSTRACT));
    assert!(!needs_public_companion(&plain, &options));
    assert!(!needs_companion(&plain, &options));

    let with_static_method = TypeDecl::interface("com.example.Factory")
        .with_member(MethodDecl::new("create").with_flags(ModifierFlags::STATIC));
    assert!(needs_public_companion(&with_static_method, &options));

    let mut with_initializer = TypeDecl::interface("com.example.Init");
    with_initializer.has_class_initializer = true;
    assert!(needs_public_companion(&with_initializer, &options));

    let mut annotation = TypeDecl::annotation("com.example.Runtime");
    annotation.is_runtime_annotation = true;
    assert!(needs_public_companion(&annotation, &options));
}

#[test]
fn test_static_fields_need_companion_only_with_accessors() {
    let decl = TypeDecl::interface("com.example.Constants").with_member(
        FieldDecl::new("NAME", TypeRef::string())
            .with_flags(ModifierFlags::STATIC | ModifierFlags::FINAL),
    );

    assert!(!needs_public_companion(&decl, &DeclarationOptions::default()));

    let accessors = DeclarationOptions {
        static_accessor_methods: true,
        ..DeclarationOptions::default()
    };
    assert!(needs_public_companion(&decl, &accessors));

    let hidden = TypeDecl::interface("com.example.Hidden").with_member(
        FieldDecl::new("NAME", TypeRef::string())
            .with_flags(ModifierFlags::STATIC)
            .private_declaration(),
    );
    assert!(!needs_public_companion(&hidden, &accessors));
}

#[test]
fn test_default_methods_need_private_companion() {
    let options = DeclarationOptions::default();
    let decl = TypeDecl::interface("com.example.Greeter")
        .with_member(MethodDecl::new("greet").returning(TypeRef::string()));
    assert!(!needs_public_companion(&decl, &options));
    assert!(needs_companion(&decl, &options));
}

#[test]
fn test_private_type_never_needs_public_companion() {
    let mut decl = TypeDecl::interface("com.example.Internal")
        .with_member(MethodDecl::new("create").with_flags(ModifierFlags::STATIC));
    decl.has_private_declaration = true;
    let options = DeclarationOptions::default();
    assert!(!needs_public_companion(&decl, &options));
    assert!(needs_companion(&decl, &options));
}
