//! C++ source rendering.
//!
//! Produces the two text forms of an embedded file:
//!
//! - the definition, holding the full `std::vector<unsigned char>` literal
//! - the declaration, an `extern` forward declaration with no byte data
//!
//! Both share the same banner and include line, and both are wrapped in a
//! `namespace` block when one is given. Inside a namespace every line gains
//! one level of indentation.

mod literal;

use crate::identifier::Identifier;
use std::fmt::Write as FmtWrite;

pub use literal::{hex_token, parse_hex_tokens, push_hex_token, LiteralBuilder};

/// First line of every generated file
pub const GENERATED_BANNER: &str = "// Generated file - Do Not Modify";

/// Include line for the container type
pub const INCLUDE_LINE: &str = "#include <vector>";

/// Container type used for the embedded bytes
pub const CONTAINER_TYPE: &str = "std::vector<unsigned char>";

/// What to name the array, where to scope it, and how to indent it
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    /// Variable name of the array
    pub identifier: &'a Identifier,
    /// Enclosing namespace, inserted verbatim
    pub namespace: Option<&'a str>,
    /// One level of indentation
    pub indent: &'a str,
}

impl<'a> Layout<'a> {
    /// Creates a layout
    pub fn new(identifier: &'a Identifier, namespace: Option<&'a str>, indent: &'a str) -> Self {
        Self {
            identifier,
            namespace,
            indent,
        }
    }

    /// Prefix for the byte lines inside the braces
    pub fn body_prefix(&self) -> String {
        self.indent.repeat(self.base_level() + 1)
    }

    fn base_level(&self) -> usize {
        usize::from(self.namespace.is_some())
    }
}

/// Renders the definition around an already rendered literal body
pub fn render_definition(layout: &Layout<'_>, body: &str) -> String {
    let mut output = String::with_capacity(body.len() + 256);
    SourceWriter::new(&mut output, layout)
        .write_definition(body)
        .expect("String write cannot fail");
    output
}

/// Renders the `extern` declaration
pub fn render_declaration(layout: &Layout<'_>) -> String {
    let mut output = String::new();
    SourceWriter::new(&mut output, layout)
        .write_declaration()
        .expect("String write cannot fail");
    output
}

struct SourceWriter<'a, W: FmtWrite> {
    writer: &'a mut W,
    layout: &'a Layout<'a>,
    indent_level: usize,
}

impl<'a, W: FmtWrite> SourceWriter<'a, W> {
    fn new(writer: &'a mut W, layout: &'a Layout<'a>) -> Self {
        Self {
            writer,
            layout,
            indent_level: 0,
        }
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn write_indent(&mut self) -> std::fmt::Result {
        for _ in 0..self.indent_level {
            self.writer.write_str(self.layout.indent)?;
        }
        Ok(())
    }

    fn writeln(&mut self, s: &str) -> std::fmt::Result {
        self.write_indent()?;
        writeln!(self.writer, "{}", s)
    }

    fn write_prologue(&mut self) -> std::fmt::Result {
        writeln!(self.writer, "{}", GENERATED_BANNER)?;
        writeln!(self.writer, "{}", INCLUDE_LINE)?;
        writeln!(self.writer)?;

        if let Some(namespace) = self.layout.namespace {
            writeln!(self.writer, "namespace {}", namespace)?;
            writeln!(self.writer, "{{")?;
            self.indent();
        }
        Ok(())
    }

    fn write_epilogue(&mut self) -> std::fmt::Result {
        if self.layout.namespace.is_some() {
            self.dedent();
            self.writeln("}")?;
        }
        Ok(())
    }

    fn write_definition(&mut self, body: &str) -> std::fmt::Result {
        self.write_prologue()?;

        self.writeln(&format!(
            "const {} {} =",
            CONTAINER_TYPE, self.layout.identifier
        ))?;
        // the body opens with its own line break
        self.write_indent()?;
        self.writer.write_char('{')?;
        self.writer.write_str(body)?;
        writeln!(self.writer)?;
        self.writeln("};")?;

        self.write_epilogue()
    }

    fn write_declaration(&mut self) -> std::fmt::Result {
        self.write_prologue()?;
        self.writeln(&format!(
            "extern const {} {};",
            CONTAINER_TYPE, self.layout.identifier
        ))?;
        self.write_epilogue()
    }
}
