//! End-to-end tests of the facade: JSON input through parallel batch synthesis.

use jdecl::ast::{FieldDecl, MethodDecl, PropertyDirective, Visibility};
use jdecl::{
    DeclarationOptions, DiagnosticCollector, EmitContext, EmitPass, JavadocRenderer, NameTable,
    TranslationInput, TypeDecl, TypeRef, emit_declaration, generate_declarations,
    join_declarations,
};

fn batch(count: usize) -> Vec<TypeDecl> {
    (0..count)
        .map(|index| {
            TypeDecl::class(format!("com.example.batch.Item{index}"))
                .with_member(
                    FieldDecl::new("value", TypeRef::int()).with_visibility(Visibility::Private),
                )
                .with_member(
                    MethodDecl::new("value")
                        .with_visibility(Visibility::Public)
                        .returning(TypeRef::int()),
                )
        })
        .collect()
}

#[test]
fn test_batch_preserves_input_order_and_matches_sequential() {
    let types = batch(64);
    let options = DeclarationOptions::default();
    let names = NameTable::new(&options);
    let sink = DiagnosticCollector::new();
    let ctx = EmitContext {
        resolver: &names,
        sink: &sink,
        docs: &JavadocRenderer,
        options: &options,
    };

    let parallel = generate_declarations(&types, EmitPass::Public, ctx);
    assert_eq!(parallel.len(), types.len());
    for (decl, result) in types.iter().zip(&parallel) {
        let sequential = emit_declaration(decl, EmitPass::Public, ctx).expect("sequential emit");
        assert_eq!(result.as_ref().expect("parallel emit"), &sequential);
    }

    let (output, failures) = join_declarations(parallel);
    assert!(failures.is_empty());
    let first = output.find("module ComExampleBatchItem0 ").expect("first type");
    let last = output.find("module ComExampleBatchItem63 ").expect("last type");
    assert!(first < last);
}

#[test]
fn test_batch_isolates_failures_and_shares_the_sink() {
    let mut types = batch(8);
    types[3] = TypeDecl::class("com.example.batch.Broken").with_member(
        FieldDecl::new("peer", TypeRef::object())
            .with_visibility(Visibility::Public)
            .retained_with(),
    );
    types[5] = TypeDecl::class("com.example.batch.Misconfigured").with_member(
        FieldDecl::new("count", TypeRef::int()).with_property(PropertyDirective::new(["class"])),
    );

    let options = DeclarationOptions {
        static_accessor_methods: true,
        ..DeclarationOptions::default()
    };
    let names = NameTable::new(&options);
    let sink = DiagnosticCollector::new();
    let ctx = EmitContext {
        resolver: &names,
        sink: &sink,
        docs: &JavadocRenderer,
        options: &options,
    };

    let results = generate_declarations(&types, EmitPass::Public, ctx);
    assert!(results[3].is_err());
    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 7);

    let diagnostics = sink.take();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, 1001);

    let (output, failures) = join_declarations(results);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].type_name(), "com.example.batch.Broken");
    assert!(output.contains("module ComExampleBatchMisconfigured"));
}

#[test]
fn test_input_accepts_bare_array() {
    let input = TranslationInput::from_json_str(
        r#"[ { "kind": "interface", "qualifiedName": "com.example.Shape" } ]"#,
    )
    .expect("array input parses");
    assert!(input.options.is_none());
    assert_eq!(input.types.len(), 1);
    assert!(input.types[0].is_interface());
}

#[test]
fn test_input_with_embedded_options() {
    let input = TranslationInput::from_json_str(
        r#"{
            "options": { "swiftFriendly": "true", "prefixes": { "com.example": "CE" } },
            "types": [ { "kind": "enum", "qualifiedName": "com.example.Color",
                         "members": [ { "enumConstant": { "name": "RED" } } ] } ]
        }"#,
    )
    .expect("object input parses");

    let options = input.options.expect("embedded options");
    assert!(options.nullability());
    assert!(options.static_accessor_methods());
    assert_eq!(options.prefixes.get("com.example").map(String::as_str), Some("CE"));
    assert_eq!(input.types[0].enum_constants().count(), 1);
}

#[test]
fn test_input_rejects_malformed_documents() {
    assert!(TranslationInput::from_json_str("42").is_err());
    assert!(TranslationInput::from_json_str(r#"[ { "kind": "struct" } ]"#).is_err());
}
