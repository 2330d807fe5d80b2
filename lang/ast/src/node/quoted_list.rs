use super::Node;

/// A quoted list `'(a b c)`.
///
/// Quotation suppresses interpretation: the contents are data, so rewriting
/// passes must not treat them as forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedListNode {
    pub children: Vec<Node>,
}

impl QuotedListNode {
    pub fn new(children: Vec<Node>) -> Self {
        QuotedListNode { children }
    }
}

impl From<QuotedListNode> for Node {
    fn from(val: QuotedListNode) -> Self {
        Node::QuotedList(val)
    }
}
