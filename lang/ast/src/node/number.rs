use super::Node;

/// A numeric literal.
///
/// The literal's original textual form is preserved verbatim; interpreting it
/// as an actual number is left to later stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberNode {
    pub number: String,
}

impl NumberNode {
    pub fn new(number: impl Into<String>) -> Self {
        NumberNode { number: number.into() }
    }
}

impl From<NumberNode> for Node {
    fn from(val: NumberNode) -> Self {
        Node::Number(val)
    }
}
