//! Diagnostics library for override-consistency reporting
//!
//! This library provides Rust-style diagnostics with:
//! - Multiple severity levels (Error, Warning, Info, Hint)
//! - Class/method identity on every diagnostic
//! - Notes and help text
//! - Colored terminal output
//!
//! Diagnostics here are keyed by declaration identity (class name plus
//! method name) rather than source spans: the checker operates on declared
//! class graphs, not on source text.

use std::fmt;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
    Hint,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Error => write!(f, "error"),
            DiagnosticSeverity::Warning => write!(f, "warning"),
            DiagnosticSeverity::Info => write!(f, "info"),
            DiagnosticSeverity::Hint => write!(f, "hint"),
        }
    }
}

/// A diagnostic message with severity, declaration identity, and extra text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub code: Option<String>,
    pub class_name: String,
    pub method_name: String,
    pub message: String,
    pub notes: Vec<String>,
    pub help: Vec<String>,
}

/// Collection of diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == DiagnosticSeverity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Warning)
    }
}

/// Builder for creating diagnostics
pub struct DiagnosticBuilder {
    severity: DiagnosticSeverity,
    code: Option<String>,
    class_name: String,
    method_name: String,
    message: String,
    notes: Vec<String>,
    help: Vec<String>,
}

impl DiagnosticBuilder {
    pub fn error(
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            code: None,
            class_name: class_name.into(),
            method_name: method_name.into(),
            message: message.into(),
            notes: vec![],
            help: vec![],
        }
    }

    pub fn warning(
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            code: None,
            class_name: class_name.into(),
            method_name: method_name.into(),
            message: message.into(),
            notes: vec![],
            help: vec![],
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn help(mut self, help_msg: impl Into<String>) -> Self {
        self.help.push(help_msg.into());
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            severity: self.severity,
            code: self.code,
            class_name: self.class_name,
            method_name: self.method_name,
            message: self.message,
            notes: self.notes,
            help: self.help,
        }
    }
}

/// Formatter for displaying diagnostics
pub struct ErrorFormatter {
    use_colors: bool,
}

impl ErrorFormatter {
    pub fn new() -> Self {
        Self { use_colors: false }
    }

    pub fn with_colors() -> Self {
        Self { use_colors: true }
    }

    pub fn format_diagnostics(&self, diagnostics: &Diagnostics) -> String {
        let mut output = String::new();

        for (i, diagnostic) in diagnostics.diagnostics.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&self.format_diagnostic(diagnostic));
        }

        output
    }

    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();

        // Header
        if self.use_colors {
            let color = match diagnostic.severity {
                DiagnosticSeverity::Error => "\x1b[31m",
                DiagnosticSeverity::Warning => "\x1b[33m",
                DiagnosticSeverity::Info => "\x1b[36m",
                DiagnosticSeverity::Hint => "\x1b[32m",
            };
            output.push_str(color);
            output.push_str(&format!("{}", diagnostic.severity));

            if let Some(code) = &diagnostic.code {
                output.push_str(&format!("[{}]", code));
            }

            // Use white/bright color for the message to make it stand out
            output.push_str("\x1b[0m: \x1b[1;97m");
            output.push_str(&diagnostic.message);
            output.push_str("\x1b[0m\n");
        } else {
            output.push_str(&format!("{}", diagnostic.severity));

            if let Some(code) = &diagnostic.code {
                output.push_str(&format!("[{}]", code));
            }

            output.push_str(&format!(": {}\n", diagnostic.message));
        }

        // Declaration the diagnostic points at
        if self.use_colors {
            output.push_str(&format!(
                "  \x1b[96m-->\x1b[0m {}.{}\n",
                diagnostic.class_name, diagnostic.method_name
            ));
        } else {
            output.push_str(&format!(
                "  --> {}.{}\n",
                diagnostic.class_name, diagnostic.method_name
            ));
        }

        // Help messages - indented with yellow/golden color
        for help_msg in &diagnostic.help {
            if self.use_colors {
                output.push_str("     \x1b[32mhelp\x1b[0m: \x1b[33m");
                output.push_str(help_msg);
                output.push_str("\x1b[0m\n");
            } else {
                output.push_str("     help: ");
                output.push_str(help_msg);
                output.push('\n');
            }
        }

        // Notes
        for note in &diagnostic.notes {
            if self.use_colors {
                output.push_str("\x1b[34mnote\x1b[0m: ");
            } else {
                output.push_str("note: ");
            }
            output.push_str(note);
            output.push('\n');
        }

        output
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}
