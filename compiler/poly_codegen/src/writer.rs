//! Indentation-aware source writer.
//!
//! Blocks are opened with [`SourceWriter::block`], which takes the body as a
//! closure: the closing brace is written when the closure returns, so every
//! exit path out of a body (including `?` inside it) leaves the braces and
//! the indent level balanced.

/// Accumulates generated source text.
pub struct SourceWriter {
    /// One level of indentation.
    indent_unit: String,
    /// Current indentation level.
    indent: usize,
    /// Generated code output.
    output: String,
}

impl SourceWriter {
    /// Create a writer indenting with `indent_unit` per level.
    pub fn new(indent_unit: impl Into<String>) -> Self {
        SourceWriter {
            indent_unit: indent_unit.into(),
            indent: 0,
            output: String::with_capacity(4096),
        }
    }

    /// Write a line with indentation and newline.
    ///
    /// An empty line gets no trailing indentation.
    pub fn line(&mut self, s: &str) {
        if !s.is_empty() {
            for _ in 0..self.indent {
                self.output.push_str(&self.indent_unit);
            }
            self.output.push_str(s);
        }
        self.output.push('\n');
    }

    /// Write several lines at the current indentation.
    pub fn lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        for line in lines {
            self.line(line.as_ref());
        }
    }

    /// Write an empty line.
    pub fn blank_line(&mut self) {
        self.output.push('\n');
    }

    /// Write the artifact banner and `use` items, each followed by a blank
    /// line when present.
    pub fn preamble(&mut self, header: &str, imports: &[String]) {
        if !header.is_empty() {
            self.line(header);
            self.blank_line();
        }
        if !imports.is_empty() {
            for path in imports {
                self.line(&format!("use {path};"));
            }
            self.blank_line();
        }
    }

    /// Write `header {`, run `body` one level deeper, then write `}`.
    pub fn block<R>(&mut self, header: &str, body: impl FnOnce(&mut Self) -> R) -> R {
        if header.is_empty() {
            self.line("{");
        } else {
            self.line(&format!("{header} {{"));
        }
        self.indent += 1;
        let result = body(self);
        debug_assert!(self.indent > 0, "block body left the writer dedented");
        self.indent = self.indent.saturating_sub(1);
        self.line("}");
        result
    }

    /// Take the generated output.
    pub fn finish(self) -> String {
        self.output
    }
}

/// Pick a local variable name that no parameter of the surrounding method
/// already uses, by appending underscores to `base`.
pub fn fresh_local(base: &str, taken: impl Fn(&str) -> bool) -> String {
    let mut name = base.to_string();
    while taken(&name) {
        name.push('_');
    }
    name
}
