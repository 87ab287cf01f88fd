//! Compact JSON printer.

use crate::node::Node;
use std::fmt::{self, Write};

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self, f)
    }
}

/// Write a node as single-line JSON.
///
/// Arrays print as `[a, b]` and maps as `{"k": v}` in key order.
pub fn write_node(node: &Node, out: &mut impl Write) -> fmt::Result {
    match node {
        Node::Null => out.write_str("null"),
        Node::Bool(value) => out.write_str(if *value { "true" } else { "false" }),
        Node::Int(value) => write!(out, "{}", value),
        Node::Double(value) => write_double(*value, out),
        Node::String(value) => write_string(value, out),
        Node::Array(items) => {
            out.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_node(item, out)?;
            }
            out.write_char(']')
        }
        Node::Map(entries) => {
            out.write_char('{')?;
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_string(key, out)?;
                out.write_str(": ")?;
                write_node(value, out)?;
            }
            out.write_char('}')
        }
    }
}

fn write_double(value: f64, out: &mut impl Write) -> fmt::Result {
    if value.is_finite() {
        // Debug keeps a fraction or exponent so the value reads back as a double.
        write!(out, "{:?}", value)
    } else {
        out.write_str("null")
    }
}

fn write_string(value: &str, out: &mut impl Write) -> fmt::Result {
    out.write_char('"')?;
    for ch in value.chars() {
        match ch {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(out, "\\u{:04x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Dict;

    #[test]
    fn test_scalars() {
        assert_eq!(Node::Null.to_string(), "null");
        assert_eq!(Node::Bool(true).to_string(), "true");
        assert_eq!(Node::Int(-12).to_string(), "-12");
        assert_eq!(Node::Double(0.5).to_string(), "0.5");
        assert_eq!(Node::Double(2.0).to_string(), "2.0");
        assert_eq!(Node::Double(f64::NAN).to_string(), "null");
    }

    #[test]
    fn test_string_escaping() {
        let node = Node::from("quote \" slash \\ line\n tab\t bell\u{7}");
        assert_eq!(
            node.to_string(),
            r#""quote \" slash \\ line\n tab\t bell\u0007""#
        );
    }

    #[test]
    fn test_containers() {
        let mut map = Dict::new();
        map.insert("b".to_string(), Node::from(vec![Node::from(1), Node::Null]));
        map.insert("a".to_string(), Node::from(Dict::new()));
        assert_eq!(Node::from(map).to_string(), r#"{"a": {}, "b": [1, null]}"#);
        assert_eq!(Node::from(Vec::new()).to_string(), "[]");
    }

    #[test]
    fn test_print_then_parse() {
        let text = r#"{"name": "Snow \"man\"", "radius": 10, "scale": 1.5, "big": 1e300, "tags": [true, false, null, "é"]}"#;
        let node: Node = serde_json::from_str(text).unwrap();
        let printed = node.to_string();
        assert_eq!(serde_json::from_str::<Node>(&printed).unwrap(), node);
    }
}
