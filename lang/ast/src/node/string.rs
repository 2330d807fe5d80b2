use super::Node;

/// A string literal, with the surrounding quotes already stripped.
///
/// Escape sequences are kept as written; unescaping is the consumer's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringNode {
    pub text: String,
}

impl StringNode {
    pub fn new(text: impl Into<String>) -> Self {
        StringNode { text: text.into() }
    }
}

impl From<StringNode> for Node {
    fn from(val: StringNode) -> Self {
        Node::String(val)
    }
}
