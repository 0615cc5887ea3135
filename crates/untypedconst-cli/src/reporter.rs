use colored::Colorize;
use serde::Serialize;

use untypedconst_common::{Diagnostic, DiagnosticCategory, LineMap, Position};

/// Renders diagnostics of one unit at a time, optionally against its source.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub const fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// Render `diagnostics` of a single unit, one block per diagnostic.
    pub fn render_unit(&self, diagnostics: &[Diagnostic], source: Option<&str>) -> Vec<String> {
        let source = source.map(|text| (text, LineMap::build(text)));
        diagnostics
            .iter()
            .map(|diagnostic| {
                let source = source.as_ref().map(|(text, map)| (*text, map));
                self.format_diagnostic(diagnostic, source)
            })
            .collect()
    }

    pub fn format_diagnostic(
        &self,
        diagnostic: &Diagnostic,
        source: Option<(&str, &LineMap)>,
    ) -> String {
        let mut output = String::new();
        match source {
            Some((_, map)) => {
                let Position { line, column } = map.position(diagnostic.start);
                output.push_str(&format!("{}:{}:{}", diagnostic.file, line, column));
            }
            None if !diagnostic.file.is_empty() => output.push_str(&diagnostic.file),
            None => output.push_str("<unknown>"),
        }

        output.push_str(" - ");
        output.push_str(&self.format_category(diagnostic.category));
        output.push(' ');
        output.push_str(&self.format_code(diagnostic.code));
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);

        if let Some((text, map)) = source {
            if let Some(snippet) = self.format_snippet(text, map, diagnostic) {
                output.push_str(&snippet);
            }
        }
        output
    }

    /// Source line with the reported range underlined:
    ///
    /// ```text
    ///     8       F(5)
    ///                   ~
    /// ```
    fn format_snippet(&self, text: &str, map: &LineMap, diagnostic: &Diagnostic) -> Option<String> {
        if diagnostic.length == 0 {
            return None;
        }

        let position = map.position(diagnostic.start);
        let line_start = map.line_start(position.line)?;
        let line_end = map
            .line_start(position.line + 1)
            .map_or(text.len(), |next| next as usize);
        let line_text = text
            .get(line_start as usize..line_end)?
            .trim_end_matches(['\n', '\r']);

        let column = (diagnostic.start - line_start) as usize;
        let span_end = (diagnostic.end() - line_start) as usize;

        let mut underline = String::new();
        for (offset, ch) in line_text.char_indices() {
            let width = if ch == '\t' { 4 } else { 1 };
            if offset < column {
                underline.push_str(&" ".repeat(width));
            } else if offset < span_end {
                underline.push_str(&"~".repeat(width));
            } else {
                break;
            }
        }
        if !underline.contains('~') {
            underline.push('~');
        }

        let underline = if self.color {
            underline.red().to_string()
        } else {
            underline
        };
        Some(format!(
            "\n  {:>3}   {}\n       {}",
            position.line,
            line_text.replace('\t', "    "),
            underline
        ))
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.as_str();
        if !self.color {
            return label.to_string();
        }

        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Suggestion => label.blue().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().bold().to_string(),
        }
    }

    fn format_code(&self, code: u32) -> String {
        let label = format!("UC{code}");
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }

    /// Closing line of text output.
    pub fn summary(&self, diagnostics: usize, units: usize) -> String {
        let noun = if diagnostics == 1 { "diagnostic" } else { "diagnostics" };
        let files = if units == 1 { "file" } else { "files" };
        let line = format!("Found {diagnostics} {noun} in {units} {files}.");
        if self.color && diagnostics > 0 {
            line.bold().to_string()
        } else {
            line
        }
    }
}

/// Machine-readable form of one diagnostic.
#[derive(Debug, Serialize)]
pub struct JsonDiagnostic<'a> {
    pub file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    pub start: u32,
    pub length: u32,
    pub code: u32,
    pub category: &'static str,
    pub message: &'a str,
}

impl<'a> JsonDiagnostic<'a> {
    pub fn new(diagnostic: &'a Diagnostic, map: Option<&LineMap>) -> Self {
        let position = map.map(|map| map.position(diagnostic.start));
        JsonDiagnostic {
            file: &diagnostic.file,
            line: position.map(|p| p.line),
            column: position.map(|p| p.column),
            start: diagnostic.start,
            length: diagnostic.length,
            code: diagnostic.code,
            category: diagnostic.category.as_str(),
            message: &diagnostic.message_text,
        }
    }
}
