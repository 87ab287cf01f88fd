//! Tree-data node.

use crate::TypeMismatch;
use std::collections::BTreeMap;

pub type Array = Vec<Node>;
pub type Dict = BTreeMap<String, Node>;

/// A parsed JSON value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    Int(i32),
    Double(f64),
    String(String),
    Bool(bool),
    Array(Array),
    Map(Dict),
}

impl Node {
    /// Name of the value kind, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Int(_) => "int",
            Node::Double(_) => "double",
            Node::String(_) => "string",
            Node::Bool(_) => "bool",
            Node::Array(_) => "array",
            Node::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Node::Int(_))
    }

    /// True for both ints and doubles.
    pub fn is_double(&self) -> bool {
        matches!(self, Node::Int(_) | Node::Double(_))
    }

    /// True only for values stored as a double.
    pub fn is_pure_double(&self) -> bool {
        matches!(self, Node::Double(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Node::String(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Node::Bool(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    pub fn as_int(&self) -> Result<i32, TypeMismatch> {
        match self {
            Node::Int(value) => Ok(*value),
            _ => Err(self.mismatch("int")),
        }
    }

    /// Get the value as a double. Ints are widened.
    pub fn as_double(&self) -> Result<f64, TypeMismatch> {
        match self {
            Node::Int(value) => Ok(f64::from(*value)),
            Node::Double(value) => Ok(*value),
            _ => Err(self.mismatch("double")),
        }
    }

    pub fn as_bool(&self) -> Result<bool, TypeMismatch> {
        match self {
            Node::Bool(value) => Ok(*value),
            _ => Err(self.mismatch("bool")),
        }
    }

    pub fn as_string(&self) -> Result<&str, TypeMismatch> {
        match self {
            Node::String(value) => Ok(value),
            _ => Err(self.mismatch("string")),
        }
    }

    pub fn as_array(&self) -> Result<&Array, TypeMismatch> {
        match self {
            Node::Array(value) => Ok(value),
            _ => Err(self.mismatch("array")),
        }
    }

    pub fn as_map(&self) -> Result<&Dict, TypeMismatch> {
        match self {
            Node::Map(value) => Ok(value),
            _ => Err(self.mismatch("map")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> TypeMismatch {
        TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::Null
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Int(value)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Double(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

impl From<Array> for Node {
    fn from(value: Array) -> Self {
        Node::Array(value)
    }
}

impl From<Dict> for Node {
    fn from(value: Dict) -> Self {
        Node::Map(value)
    }
}

/// A JSON document: a single root node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    root: Node,
}

impl Document {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        assert!(Node::default().is_null());
        assert!(Document::default().root().is_null());
    }

    #[test]
    fn test_int_is_also_double() {
        let node = Node::from(42);
        assert!(node.is_int());
        assert!(node.is_double());
        assert!(!node.is_pure_double());
        assert_eq!(node.as_int().unwrap(), 42);
        assert!((node.as_double().unwrap() - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pure_double_is_not_int() {
        let node = Node::from(1.5);
        assert!(node.is_pure_double());
        assert!(!node.is_int());
        assert_eq!(
            node.as_int().unwrap_err(),
            TypeMismatch {
                expected: "int",
                found: "double"
            }
        );
    }

    #[test]
    fn test_accessor_mismatch() {
        let node = Node::from("text");
        assert_eq!(node.as_string().unwrap(), "text");
        let err = node.as_map().unwrap_err();
        assert_eq!(err.to_string(), "Type mismatch: expected map, found string");
        assert!(node.as_bool().is_err());
        assert!(node.as_array().is_err());
        assert!(Node::Null.as_double().is_err());
    }

    #[test]
    fn test_structural_equality() {
        let mut left = Dict::new();
        left.insert("a".to_string(), Node::from(vec![Node::from(1), Node::from(true)]));
        let right = left.clone();
        assert_eq!(Node::from(left), Node::from(right));
        assert_ne!(Node::from(1), Node::from(1.0));
    }
}
