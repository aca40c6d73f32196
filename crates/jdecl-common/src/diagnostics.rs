use crate::position::SourceLocation;
use std::fmt;
use std::sync::Mutex;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Message => "message",
        };
        f.write_str(text)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage};

    pub const ONLY_STATIC_FIELDS_CAN_BE_CLASS_PROPERTIES: DiagnosticMessage = DiagnosticMessage {
        code: 1001,
        category: DiagnosticCategory::Error,
        message: "Only static fields can be translated to class properties",
    };

    pub const CLASS_PROPERTIES_REQUIRE_STATIC_ACCESSORS: DiagnosticMessage = DiagnosticMessage {
        code: 1002,
        category: DiagnosticCategory::Error,
        message: "Class properties require either a --swift-friendly or --static-accessor-methods flag",
    };

    pub const ALL: &[DiagnosticMessage] = &[
        ONLY_STATIC_FIELDS_CAN_BE_CLASS_PROPERTIES,
        CLASS_PROPERTIES_REQUIRE_STATIC_ACCESSORS,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub location: SourceLocation,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(location: SourceLocation, message: impl Into<String>, code: u32) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            location,
            message_text: message.into(),
        }
    }

    /// Build a diagnostic from one of the predefined messages.
    pub fn from_message(location: SourceLocation, message: &DiagnosticMessage) -> Self {
        Self {
            category: message.category,
            code: message.code,
            location,
            message_text: message.message.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} JD{}: {}",
            self.location, self.category, self.code, self.message_text
        )
    }
}

pub fn get_message_template(code: u32) -> Option<&'static str> {
    diagnostic_messages::ALL
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.message)
}

/// Receives diagnostics produced during synthesis.
///
/// Reporting never aborts synthesis; sinks are shared between types that are
/// synthesized in parallel.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that keeps every reported diagnostic in arrival order.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A panic while holding the lock cannot leave the vector half-written.
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.lock().iter().any(Diagnostic::is_error)
    }

    /// Drain all collected diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}
