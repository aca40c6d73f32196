//! Text buffer used by the declaration emitter.

/// Append-only output buffer with newline tracking.
#[derive(Debug, Default)]
pub struct SourceWriter {
    output: String,
    at_line_start: bool,
}

impl SourceWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        SourceWriter {
            output: String::with_capacity(capacity),
            at_line_start: true,
        }
    }

    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.output.push_str(text);
        self.at_line_start = text.ends_with('\n');
    }

    pub fn write_line(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Terminates the current line unless the buffer already sits at the start of one.
    pub fn ensure_line_start(&mut self) {
        if !self.at_line_start {
            self.write_line();
        }
    }

    pub fn is_at_line_start(&self) -> bool {
        self.at_line_start
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }

    pub fn take_output(self) -> String {
        self.output
    }
}
