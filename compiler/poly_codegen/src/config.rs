//! Code generation settings.

/// Banner written at the top of every artifact.
pub const DEFAULT_HEADER: &str = "// *** GENERATED CODE: ANY EDITS WILL BE LOST ***";

/// Configuration for generating one interface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodegenConfig {
    /// Leading character stripped from the interface name.
    pub marker: char,
    /// Appended to interface names that carry no marker.
    pub fallback_suffix: String,
    /// First line of every artifact; empty for none.
    pub header: String,
    /// Derives on the merged type. `Default` is always added.
    pub derives: Vec<String>,
    /// One level of indentation.
    pub indent: String,
    /// Appended to artifact names.
    pub artifact_suffix: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        CodegenConfig {
            marker: 'I',
            fallback_suffix: "Union".to_string(),
            header: DEFAULT_HEADER.to_string(),
            derives: ["Clone", "Copy", "Debug", "Default", "PartialEq"]
                .into_iter()
                .map(String::from)
                .collect(),
            indent: "    ".to_string(),
            artifact_suffix: ".gen.rs".to_string(),
        }
    }
}

impl CodegenConfig {
    #[must_use]
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    #[must_use]
    pub fn with_derives<S: Into<String>>(mut self, derives: impl IntoIterator<Item = S>) -> Self {
        self.derives = derives.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    #[must_use]
    pub fn with_artifact_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.artifact_suffix = suffix.into();
        self
    }

    /// Derive list for the merged type, guaranteed to contain `Default`.
    ///
    /// The pack-by-value method starts from `Merged::default()`.
    pub fn merged_derives(&self) -> Vec<&str> {
        let mut derives: Vec<&str> = self.derives.iter().map(String::as_str).collect();
        if !derives.contains(&"Default") {
            derives.push("Default");
        }
        derives
    }
}
