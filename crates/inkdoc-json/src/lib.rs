//! inkdoc JSON Library
//!
//! A tree-data node (null, int, double, string, bool, array, map) with a
//! parser and a compact printer.

mod de;
mod node;
mod printer;

pub use node::{Array, Dict, Document, Node};
pub use printer::write_node;

use std::io::{self, Read, Write};
use thiserror::Error;

/// Malformed JSON input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parsing error: {message}")]
pub struct ParsingError {
    /// 1-based line of the problem.
    pub line: usize,
    /// 1-based column of the problem.
    pub column: usize,
    pub message: String,
}

impl From<serde_json::Error> for ParsingError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// A typed accessor was called on a node of another kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Type mismatch: expected {expected}, found {found}")]
pub struct TypeMismatch {
    pub expected: &'static str,
    pub found: &'static str,
}

/// Errors from loading JSON out of a reader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parsing(#[from] ParsingError),
}

/// Parse a JSON text.
///
/// Nesting deeper than 128 levels is rejected.
pub fn load(input: &str) -> Result<Document, ParsingError> {
    serde_json::from_str::<Node>(input)
        .map(Document::new)
        .map_err(ParsingError::from)
        .inspect_err(|e| log::debug!("Rejected JSON input: {}", e))
}

/// Parse JSON read from `reader`.
pub fn load_from_reader(reader: impl Read) -> Result<Document, LoadError> {
    match serde_json::from_reader::<_, Node>(reader) {
        Ok(root) => Ok(Document::new(root)),
        Err(err) if err.is_io() => Err(LoadError::Io(io::Error::from(err))),
        Err(err) => {
            log::debug!("Rejected JSON input: {}", err);
            Err(LoadError::Parsing(err.into()))
        }
    }
}

/// Print the document's root node.
pub fn print(doc: &Document, out: &mut dyn Write) -> io::Result<()> {
    write!(out, "{}", doc.root())
}
