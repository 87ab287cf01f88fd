//! Render context and configuration.

use serde::Deserialize;
use std::io::{self, Write};

/// Default indentation step per nesting level.
pub const DEFAULT_INDENT_STEP: usize = 2;

/// Default indentation for top-level objects.
pub const DEFAULT_INDENT: usize = 2;

/// Indentation settings used when a document is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Spaces added per nesting level.
    pub indent_step: usize,
    /// Spaces written before each top-level object.
    pub indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_step: DEFAULT_INDENT_STEP,
            indent: DEFAULT_INDENT,
        }
    }
}

/// Output sink plus the current indentation, passed down the render chain.
pub struct RenderContext<'a> {
    pub out: &'a mut dyn Write,
    pub indent_step: usize,
    pub indent: usize,
}

impl<'a> RenderContext<'a> {
    /// Create a context with no indentation.
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self {
            out,
            indent_step: 0,
            indent: 0,
        }
    }

    pub fn with_indent(out: &'a mut dyn Write, indent_step: usize, indent: usize) -> Self {
        Self {
            out,
            indent_step,
            indent,
        }
    }

    /// Context for the next nesting level, writing to the same sink.
    pub fn indented(&mut self) -> RenderContext<'_> {
        RenderContext {
            out: &mut *self.out,
            indent_step: self.indent_step,
            indent: self.indent + self.indent_step,
        }
    }

    pub fn render_indent(&mut self) -> io::Result<()> {
        write!(self.out, "{:width$}", "", width = self.indent)
    }
}
