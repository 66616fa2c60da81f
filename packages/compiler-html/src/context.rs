use chrono::Datelike;

/// What to emit for media components that have no source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaceholderPolicy {
    /// Dashed placeholder box with icon and caption (editor preview)
    #[default]
    Visible,
    /// Emit nothing (final export to mail clients)
    Omit,
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print the document skeleton
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    pub placeholders: PlaceholderPolicy,
    /// Escape title, description and header/footer text. Turning this off
    /// lets operators put markup in those fields.
    pub escape_document_text: bool,
    /// Copyright year; the current local year when unset
    pub year: Option<i32>,
    /// `lang` attribute of the document
    pub lang: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            placeholders: PlaceholderPolicy::Visible,
            escape_document_text: true,
            year: None,
            lang: "es".to_string(),
        }
    }
}

impl CompileOptions {
    /// Options for the final email export: media placeholders are dropped
    pub fn export() -> Self {
        Self {
            placeholders: PlaceholderPolicy::Omit,
            ..Default::default()
        }
    }

    pub fn resolved_year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// Line-oriented output buffer for the document skeleton
pub(crate) struct HtmlWriter<'a> {
    options: &'a CompileOptions,
    depth: usize,
    buffer: String,
}

impl<'a> HtmlWriter<'a> {
    pub fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    pub fn options(&self) -> &CompileOptions {
        self.options
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    /// Writes `open`, runs `body` one level deeper, then writes `close`
    pub fn block(&mut self, open: &str, close: &str, body: impl FnOnce(&mut Self)) {
        self.add_line(open);
        self.indent();
        body(self);
        self.dedent();
        self.add_line(close);
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    pub fn get_output(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_indents_blocks() {
        let options = CompileOptions::default();
        let mut writer = HtmlWriter::new(&options);
        writer.block("<tr>", "</tr>", |w| w.add_line("<td></td>"));

        assert_eq!(writer.get_output(), "<tr>\n  <td></td>\n</tr>\n");
    }

    #[test]
    fn test_writer_compact() {
        let options = CompileOptions {
            pretty: false,
            ..Default::default()
        };
        let mut writer = HtmlWriter::new(&options);
        writer.block("<tr>", "</tr>", |w| w.add_line("<td></td>"));

        assert_eq!(writer.get_output(), "<tr><td></td></tr>");
    }

    #[test]
    fn test_pinned_year() {
        let options = CompileOptions {
            year: Some(2024),
            ..Default::default()
        };
        assert_eq!(options.resolved_year(), 2024);
    }
}
