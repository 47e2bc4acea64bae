use crate::syntax::TextRange;

/// An error found while loading a tree file or a config file, located in
/// the text it was found in.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub message: String,
    pub range: TextRange,
    pub notes: Vec<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(message: String, range: TextRange) -> Self {
        Self {
            message,
            range,
            notes: Vec::new(),
            help: None,
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_help(mut self, help: String) -> Self {
        self.help = Some(help);
        self
    }

    fn report<'a>(
        &self,
        filename: &'a str,
    ) -> ariadne::Report<'static, (&'a str, std::ops::Range<usize>)> {
        use ariadne::{Color, Label, Report, ReportKind};

        let mut report = Report::build(ReportKind::Error, filename, self.range.start as usize)
            .with_message(&self.message)
            .with_label(
                Label::new((filename, self.range.as_usize()))
                    .with_message(&self.message)
                    .with_color(Color::Red),
            );

        for note in &self.notes {
            report = report.with_note(note);
        }
        if let Some(help) = &self.help {
            report = report.with_help(help);
        }

        report.finish()
    }

    /// Render the diagnostic to stderr using ariadne.
    pub fn render(&self, filename: &str, source: &str) {
        use ariadne::Source;

        if let Err(e) = self
            .report(filename)
            .eprint((filename, Source::from(source)))
        {
            eprintln!("error: {} ({})", self.message, e);
        }
    }
}

/// Render a list of diagnostics.
pub fn render_diagnostics(diagnostics: &[Diagnostic], filename: &str, source: &str) {
    for diag in diagnostics {
        diag.render(filename, source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(d: &Diagnostic, filename: &str, source: &str) -> String {
        let mut buf = Vec::new();
        d.report(filename)
            .write((filename, ariadne::Source::from(source)), &mut buf)
            .unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn test_builders_accumulate() {
        let d = Diagnostic::error("child escapes parent".to_string(), TextRange::new(10, 15))
            .with_note("source text is 12 bytes".to_string())
            .with_help("child ranges must lie within the parent range".to_string())
            .with_note("second".to_string());
        assert_eq!(d.range, TextRange::new(10, 15));
        assert_eq!(d.notes, vec!["source text is 12 bytes", "second"]);
        assert_eq!(
            d.help.as_deref(),
            Some("child ranges must lie within the parent range")
        );
    }

    #[test]
    fn test_report_carries_message_and_note() {
        let source = "declare clas Foo {\n}\n";
        let d = Diagnostic::error("unknown node kind 'clas'".to_string(), TextRange::new(8, 12))
            .with_note("kind names are case-sensitive".to_string());
        let out = rendered(&d, "foo.ts", source);
        assert!(out.contains("unknown node kind 'clas'"));
        assert!(out.contains("kind names are case-sensitive"));
        assert!(out.contains("foo.ts"));
    }

    #[test]
    fn test_render_empty_range_does_not_panic() {
        let diagnostics = vec![
            Diagnostic::error("cannot read 'x.json'".to_string(), TextRange::empty()),
            Diagnostic::error("second".to_string(), TextRange::new(6, 7)),
        ];
        render_diagnostics(&diagnostics, "a.ts", "class A {}\n");
    }
}
