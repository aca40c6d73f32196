//! jdecl: header and module-signature declarations for translated Java types.
//!
//! The emitter itself lives in the `jdecl-emitter` crate; this crate is the
//! facade used by the `jdecl` binary: batch synthesis, JSON input loading and
//! tracing setup.

use rayon::prelude::*;

// Model, diagnostics and options
pub use jdecl_ast as ast;
pub use jdecl_ast::{Member, TypeDecl, TypeRef};
pub use jdecl_common::{DeclarationOptions, Diagnostic, DiagnosticCollector, DiagnosticSink};

// Declaration synthesis
pub use jdecl_emitter as emitter;
pub use jdecl_emitter::{
    EmitContext, EmitError, EmitPass, JavadocRenderer, NameResolver, NameTable, emit_declaration,
};

// JSON input of a translation run
pub mod input;
pub use input::TranslationInput;

// Tracing subscriber setup (JDECL_LOG / JDECL_LOG_FORMAT)
pub mod tracing_config;

// Command-line driver and diagnostic reporting
pub mod cli;

/// Synthesizes the declarations of `types` for `pass` in parallel.
///
/// Results are in input order. A type whose input breaks an invariant yields
/// its error without affecting the others.
pub fn generate_declarations(
    types: &[TypeDecl],
    pass: EmitPass,
    ctx: EmitContext<'_>,
) -> Vec<Result<String, EmitError>> {
    let _span = tracing::debug_span!("generate_declarations", types = types.len(), %pass).entered();
    types
        .par_iter()
        .map(|decl| emit_declaration(decl, pass, ctx))
        .collect()
}

/// Concatenated declarations of every type that synthesized, plus the failures.
pub fn join_declarations(results: Vec<Result<String, EmitError>>) -> (String, Vec<EmitError>) {
    let mut output = String::new();
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(text) => output.push_str(&text),
            Err(error) => {
                tracing::warn!(type_name = error.type_name(), %error, "declaration skipped");
                failures.push(error);
            }
        }
    }
    (output, failures)
}
