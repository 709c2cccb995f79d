//! Source-text building blocks.
//!
//! [`CodeBuilder`] is a small fluent API for emitting properly indented
//! source text. Generated Java uses two-space indentation, doubled for
//! continuation lines.

/// Indentation style for generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation for generated Java.
    pub const JAVA: Self = Self::Spaces(2);

    /// The string for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

/// Fluent builder for indented source text.
///
/// # Example
///
/// ```
/// use molde_codegen::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .block_with_close("public class Foo {", "}", |b| {
///         b.line("public int bar;")
///     })
///     .build();
///
/// assert_eq!(code, "public class Foo {\n  public int bar;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a builder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a builder with 2-space indentation (Java default).
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use molde_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::java()
    ///     .block_with_close("if (instance == null) {", "}", |b| {
    ///         b.line("instance = new Math();")
    ///     })
    ///     .build();
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }
}
