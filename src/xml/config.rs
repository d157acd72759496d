//! XML output configuration.

use ippc_core::lang::LANGUAGE_NAME;

/// Serializer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlConfig {
    /// String written once per nesting level
    pub indent: String,
    /// Value of the root element's `language` attribute
    pub language: String,
    /// Whether to start the document with an `<?xml ...?>` declaration
    pub declaration: bool,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            language: LANGUAGE_NAME.to_string(),
            declaration: true,
        }
    }
}

impl XmlConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation string
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set the `language` attribute of the root element
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Enable or disable the XML declaration
    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }
}
