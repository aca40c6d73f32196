use clap::Parser;
use std::path::Path;
use tempfile::TempDir;

use super::args::CliArgs;
use super::driver::{self, resolve_options};
use crate::input::TranslationInput;

const POINT: &str = r#"{
    "kind": "class",
    "qualifiedName": "com.example.geom.Point",
    "isTopLevel": true,
    "members": [
        { "field": { "visibility": "private",
                     "fragments": [ { "name": "x", "type": { "primitive": "int" } } ] } },
        { "method": { "visibility": "public", "name": "getX",
                      "returnType": { "primitive": "int" } } }
    ]
}"#;

const BROKEN_HOLDER: &str = r#"{
    "kind": "class",
    "qualifiedName": "com.example.Holder",
    "members": [
        { "field": { "visibility": "public", "isRetainedWith": true,
                     "fragments": [ { "name": "peer",
                                      "type": { "declared": { "qualifiedName": "java.lang.Object" } } } ] } }
    ]
}"#;

const CLASS_PROPERTY: &str = r#"{
    "kind": "class",
    "qualifiedName": "com.example.Counter",
    "members": [
        { "field": { "property": { "attributes": ["class"] },
                     "fragments": [ { "name": "count", "type": { "primitive": "int" } } ] } }
    ]
}"#;

fn write_file(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path.display().to_string()
}

fn parse_args(args: &[&str]) -> CliArgs {
    let mut argv = vec!["jdecl"];
    argv.extend_from_slice(args);
    CliArgs::try_parse_from(argv).expect("args parse")
}

#[test]
fn run_emits_types_in_input_order() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_file(
        temp.path(),
        "types.json",
        &format!("[{POINT}, {CLASS_PROPERTY}]"),
    );

    let result = driver::run(&parse_args(&[&input, "--static-accessor-methods"])).expect("run succeeds");
    assert_eq!(result.type_count, 2);
    assert!(result.failures.is_empty());
    let point = result.output.find("module ComExampleGeomPoint").expect("point emitted");
    let counter = result.output.find("module ComExampleCounter").expect("counter emitted");
    assert!(point < counter);
    assert!(result.output.contains("    val x : int\n"));
}

#[test]
fn run_writes_output_file() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_file(temp.path(), "types.json", &format!("[{POINT}]"));
    let out = temp.path().join("include").join("Point.h");
    let out_arg = out.display().to_string();

    let result = driver::run(&parse_args(&[&input, "--out", &out_arg])).expect("run succeeds");
    let written = std::fs::read_to_string(&out).expect("output written");
    assert_eq!(written, result.output);
    assert!(written.starts_with("\nmodule ComExampleGeomPoint : sig\n"));
}

#[test]
fn prefixes_from_embedded_options_and_flags() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_file(
        temp.path(),
        "types.json",
        &format!(r#"{{ "options": {{ "nullability": "true" }}, "types": [{POINT}] }}"#),
    );

    let args = parse_args(&[&input, "--prefix", "com.example.geom=CEG"]);
    let loaded = TranslationInput::load(Path::new(&input)).expect("input loads");
    let options = resolve_options(&args, &loaded).expect("options resolve");
    assert!(options.nullability());
    assert_eq!(options.prefixes.get("com.example.geom").map(String::as_str), Some("CEG"));

    let result = driver::run(&args).expect("run succeeds");
    assert!(result.output.contains("module CEGPoint : sig"));
    assert!(result.output.ends_with("@compatibility_alias ComExampleGeomPoint CEGPoint;\n"));
}

#[test]
fn config_file_replaces_embedded_options() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_file(
        temp.path(),
        "types.json",
        &format!(r#"{{ "options": {{ "nullability": true }}, "types": [{POINT}] }}"#),
    );
    let config = write_file(temp.path(), "jdecl.json", r#"{ "staticAccessorMethods": true }"#);

    let args = parse_args(&[&input, "--config", &config]);
    let loaded = TranslationInput::load(Path::new(&input)).expect("input loads");
    let options = resolve_options(&args, &loaded).expect("options resolve");
    assert!(!options.nullability());
    assert!(options.static_accessor_methods());
}

#[test]
fn invalid_prefix_mapping_is_an_error() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_file(temp.path(), "types.json", "[]");
    let error = driver::run(&parse_args(&[&input, "--prefix", "com.example"])).expect_err("bad mapping");
    assert!(error.to_string().contains("invalid prefix mapping"));
}

#[test]
fn missing_input_reports_path() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("absent.json").display().to_string();
    let error = driver::run(&parse_args(&[&missing])).expect_err("missing input");
    assert!(format!("{error:#}").contains("failed to read input"));
}

#[test]
fn malformed_input_is_an_error() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_file(temp.path(), "types.json", r#"{ "types": 3 }"#);
    let error = driver::run(&parse_args(&[&input])).expect_err("malformed input");
    assert!(format!("{error:#}").contains("failed to parse input"));
}

#[test]
fn failing_type_does_not_stop_the_batch() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_file(
        temp.path(),
        "types.json",
        &format!("[{BROKEN_HOLDER}, {POINT}]"),
    );

    let result = driver::run(&parse_args(&[&input])).expect("run succeeds");
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].type_name(), "com.example.Holder");
    assert!(result.output.contains("module ComExampleGeomPoint"));
    assert!(!result.output.contains("ComExampleHolder"));
    assert!(result.has_errors());
}

#[test]
fn configuration_errors_are_collected() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_file(temp.path(), "types.json", &format!("[{CLASS_PROPERTY}]"));

    let result = driver::run(&parse_args(&[&input])).expect("run succeeds");
    let codes: Vec<u32> = result.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![1001, 1002]);
    assert!(result.has_errors());
    assert!(result.output.contains("@property (class) jint count;"));
}
