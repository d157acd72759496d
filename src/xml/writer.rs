//! Output writer with indentation tracking
//!
//! Writes one element per line, indenting nested elements by the configured indent string.

use super::config::XmlConfig;

/// Writer that tracks element nesting and builds the XML document
pub struct XmlWriter {
    /// The output buffer
    output: String,
    /// Current nesting level
    indent_level: usize,
    /// Configuration
    config: XmlConfig,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl XmlWriter {
    /// Create a new writer with the given config
    pub fn new(config: XmlConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            at_line_start: true,
        }
    }

    /// Get the finished document
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase nesting level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease nesting level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.output.push_str(&self.config.indent);
            }
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write the `<?xml ...?>` declaration line
    pub fn declaration(&mut self) {
        self.writeln(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    }

    /// Open an element on its own line and nest everything after it
    pub fn start_element(&mut self, name: &str, attrs: &[(&str, &str)]) {
        let tag = open_tag(name, attrs, false);
        self.writeln(&tag);
        self.indent();
    }

    /// Close the element opened by the matching [`XmlWriter::start_element`]
    pub fn end_element(&mut self, name: &str) {
        self.dedent();
        self.writeln(&format!("</{name}>"));
    }

    /// Write an element without content (`<name attr="v"/>`)
    pub fn empty_element(&mut self, name: &str, attrs: &[(&str, &str)]) {
        let tag = open_tag(name, attrs, true);
        self.writeln(&tag);
    }

    /// Write an element with escaped text content on one line; empty text gives an empty element
    pub fn text_element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) {
        if text.is_empty() {
            self.empty_element(name, attrs);
            return;
        }
        let tag = open_tag(name, attrs, false);
        self.writeln(&format!("{tag}{}</{name}>", escape_xml(text)));
    }

    /// Get current nesting level
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get the configuration
    pub fn config(&self) -> &XmlConfig {
        &self.config
    }
}

/// Escape XML special characters in text and attribute values.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn open_tag(name: &str, attrs: &[(&str, &str)], self_closing: bool) -> String {
    let mut tag = format!("<{name}");
    for (key, value) in attrs {
        tag.push_str(&format!(" {key}=\"{}\"", escape_xml(value)));
    }
    tag.push_str(if self_closing { "/>" } else { ">" });
    tag
}
