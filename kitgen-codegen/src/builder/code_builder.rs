//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One indentation level, as enforced by gofmt.
const INDENT: &str = "\t";

/// Accumulates lines of Go source at a tracked indentation level.
///
/// Nodes describe themselves as [`CodeFragment`]s through [`Renderable`];
/// the builder is the only place fragments turn into text.
///
/// # Example
///
/// ```
/// use kitgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::go();
/// builder
///     .push_comment("Greeter says hello.")
///     .push_line("type Greeter interface {")
///     .push_indent()
///     .push_line("Hello()")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(
///     builder.build(),
///     "// Greeter says hello.\ntype Greeter interface {\n\tHello()\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder with tab indentation.
    pub fn go() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `//` line comment, one comment line per text line.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.write_indent();
            if line.is_empty() {
                self.buffer.push_str("//");
            } else {
                self.buffer.push_str("// ");
                self.buffer.push_str(line);
            }
            self.buffer.push('\n');
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::go();
        builder.push_line("package service");
        assert_eq!(builder.build(), "package service\n");
    }

    #[test]
    fn test_tab_indentation() {
        let mut builder = CodeBuilder::go();
        builder
            .push_line("type A interface {")
            .push_indent()
            .push_line("Foo()")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "type A interface {\n\tFoo()\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::go();
        builder.push_dedent().push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_multiline_comment() {
        let mut builder = CodeBuilder::go();
        builder.push_indent().push_comment("first\n\nsecond");

        assert_eq!(builder.build(), "\t// first\n\t//\n\t// second\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::comment("A is a thing."),
                    CodeFragment::Block {
                        header: "type A interface {".to_string(),
                        body: vec![CodeFragment::line("Foo()"), CodeFragment::Blank],
                        close: Some("}".to_string()),
                    },
                ]
            }
        }

        let mut builder = CodeBuilder::go();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "// A is a thing.\ntype A interface {\n\tFoo()\n\n}\n"
        );
    }
}
