//! SVG document that owns and renders shape objects.

use crate::render::{RenderConfig, RenderContext};
use crate::shapes::{Object, ObjectContainer};
use std::fmt;
use std::io::{self, Write};
use std::string::FromUtf8Error;
use thiserror::Error;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;
const SVG_OPEN_TAG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;
const SVG_CLOSE_TAG: &str = "</svg>";

/// Errors from rendering a document into a string.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Rendered output is not UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// An SVG document.
///
/// Objects are appended and rendered in insertion order. Rendering does not
/// modify the document, so it can be repeated.
#[derive(Default)]
pub struct Document {
    objects: Vec<Box<dyn Object>>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("objects", &self.objects.len())
            .finish()
    }
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects in the document.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Render with the default indentation.
    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        self.render_with(out, &RenderConfig::default())
    }

    /// Render the XML declaration, the `<svg>` root and every object.
    ///
    /// Write errors are returned as soon as they happen; whatever was already
    /// written stays in the sink.
    pub fn render_with(&self, out: &mut dyn Write, config: &RenderConfig) -> io::Result<()> {
        log::debug!("Rendering document with {} objects", self.objects.len());

        writeln!(out, "{}", XML_DECLARATION)?;
        writeln!(out, "{}", SVG_OPEN_TAG)?;
        let mut context = RenderContext::with_indent(out, config.indent_step, config.indent);
        for object in &self.objects {
            object.render(&mut context)?;
        }
        write!(context.out, "{}", SVG_CLOSE_TAG)
    }

    /// Render into a string with the default indentation.
    pub fn render_to_string(&self) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.render(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

impl ObjectContainer for Document {
    fn add_boxed(&mut self, object: Box<dyn Object>) {
        self.objects.push(object);
        log::trace!("Added object #{} to document", self.objects.len());
    }
}
