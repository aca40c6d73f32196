use super::reporter::Reporter;
use jdecl_common::diagnostics::diagnostic_messages;
use jdecl_common::{Diagnostic, SourceLocation};
use jdecl_emitter::EmitError;

#[test]
fn formats_diagnostic_without_color() {
    let reporter = Reporter::new(false);
    let diagnostic = Diagnostic::from_message(
        SourceLocation::new("Counter.java", 12, 5),
        &diagnostic_messages::ONLY_STATIC_FIELDS_CAN_BE_CLASS_PROPERTIES,
    );

    assert_eq!(
        reporter.format_diagnostic(&diagnostic),
        "Counter.java:12:5 - error JD1001: Only static fields can be translated to class properties"
    );
}

#[test]
fn renders_diagnostics_one_per_line() {
    let reporter = Reporter::new(false);
    let diagnostics = vec![
        Diagnostic::from_message(
            SourceLocation::in_file("A.java"),
            &diagnostic_messages::ONLY_STATIC_FIELDS_CAN_BE_CLASS_PROPERTIES,
        ),
        Diagnostic::from_message(
            SourceLocation::default(),
            &diagnostic_messages::CLASS_PROPERTIES_REQUIRE_STATIC_ACCESSORS,
        ),
    ];

    let rendered = reporter.render(&diagnostics);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("A.java - error JD1001"));
    assert!(lines[1].starts_with("<unknown> - error JD1002"));
}

#[test]
fn formats_failures_and_summary() {
    let reporter = Reporter::new(false);
    let error = EmitError::invariant(
        "com.example.Holder",
        &SourceLocation::new("Holder.java", 3, 1),
        "retained-with field `peer` must not be public",
    );

    assert_eq!(
        reporter.format_failure(&error),
        "error: Holder.java:3:1: invariant violated in com.example.Holder: retained-with field `peer` must not be public"
    );
    assert_eq!(reporter.format_summary(4, 1, 2), "4 type(s), 1 skipped, 2 error(s)");
}
