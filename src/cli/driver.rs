use anyhow::{Context, Result};
use jdecl_common::{DeclarationOptions, Diagnostic, DiagnosticCollector};
use jdecl_emitter::{EmitContext, EmitError, EmitPass, JavadocRenderer, NameTable};

use crate::cli::args::CliArgs;
use crate::input::TranslationInput;
use crate::{generate_declarations, join_declarations};

/// Outcome of one run; nothing has been printed yet.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Declarations of every type that synthesized, in input order.
    pub output: String,
    pub diagnostics: Vec<Diagnostic>,
    pub failures: Vec<EmitError>,
    pub type_count: usize,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty() || self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Options of a run: embedded input options, replaced by `--config`, then flags.
pub fn resolve_options(args: &CliArgs, input: &TranslationInput) -> Result<DeclarationOptions> {
    let mut options = match &args.config {
        Some(path) => DeclarationOptions::load(path)?,
        None => input.options.clone().unwrap_or_default(),
    };

    options.nullability |= args.nullability;
    options.static_accessor_methods |= args.static_accessor_methods;
    options.swift_friendly |= args.swift_friendly;
    options.generate_deprecated_declarations |= args.generate_deprecated_declarations;
    for mapping in &args.prefixes {
        options.add_prefix_mapping(mapping)?;
    }
    Ok(options)
}

/// Synthesizes every type of `input`.
pub fn generate(input: &TranslationInput, pass: EmitPass, options: &DeclarationOptions) -> RunResult {
    let names = NameTable::new(options);
    let sink = DiagnosticCollector::new();
    let ctx = EmitContext {
        resolver: &names,
        sink: &sink,
        docs: &JavadocRenderer,
        options,
    };

    let (output, failures) = join_declarations(generate_declarations(&input.types, pass, ctx));
    RunResult {
        output,
        diagnostics: sink.take(),
        failures,
        type_count: input.types.len(),
    }
}

/// Loads the input, synthesizes it and writes `--out` when given.
pub fn run(args: &CliArgs) -> Result<RunResult> {
    let input = TranslationInput::load(&args.input)?;
    let options = resolve_options(args, &input)?;
    tracing::debug!(?options, pass = ?args.pass, "resolved options");

    let result = generate(&input, args.pass.into(), &options);

    if let Some(out) = &args.out {
        if let Some(parent) = out.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        std::fs::write(out, &result.output)
            .with_context(|| format!("failed to write {}", out.display()))?;
    }

    tracing::debug!(
        types = result.type_count,
        failures = result.failures.len(),
        diagnostics = result.diagnostics.len(),
        "run finished"
    );
    Ok(result)
}
