use colored::Colorize;
use jdecl_common::{Diagnostic, DiagnosticCategory, SourceLocation};
use jdecl_emitter::EmitError;

/// Formats diagnostics and failed types for the terminal.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    /// `File.java:12:5 - error JD1001: message`
    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let mut output = self.format_location(&diagnostic.location);
        output.push_str(" - ");
        output.push_str(&self.format_category(diagnostic.category));
        let code = self.format_code(diagnostic.code);
        if !code.is_empty() {
            output.push(' ');
            output.push_str(&code);
        }
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);
        output
    }

    /// A type whose declaration was abandoned.
    pub fn format_failure(&self, error: &EmitError) -> String {
        format!("{}: {error}", self.format_category(DiagnosticCategory::Error))
    }

    /// One-line summary printed after the diagnostics.
    pub fn format_summary(&self, type_count: usize, failures: usize, errors: usize) -> String {
        let summary = format!(
            "{type_count} type(s), {failures} skipped, {errors} error(s)"
        );
        if self.color && (failures > 0 || errors > 0) {
            summary.red().to_string()
        } else {
            summary
        }
    }

    fn format_location(&self, location: &SourceLocation) -> String {
        let text = location.to_string();
        if self.color {
            text.cyan().to_string()
        } else {
            text
        }
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.to_string();
        if !self.color {
            return label;
        }

        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().bold().to_string(),
        }
    }

    fn format_code(&self, code: u32) -> String {
        if code == 0 {
            return String::new();
        }

        let label = format!("JD{code}");
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }
}
