//! Parse exported device configurations into a read-only node tree.
//!
//! The tree is built once and only queried afterwards. Queries come in two
//! flavors: direct child paths ([`ConfigNode::child`], [`ConfigNode::text_at`])
//! and document-order descendant searches ([`ConfigNode::find`],
//! [`ConfigNode::find_all`]) that match a relative tag path anywhere below a
//! node.

pub mod parser;
pub mod tree;

pub use parser::{parse, parse_file, ParseError};
pub use tree::ConfigNode;
