use super::Node;

/// A round-paren list `(a b c)`.
///
/// Unquoted lists are the call-shaped forms of the language; they are the
/// primary site for declaration lowering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub children: Vec<Node>,
}

impl ListNode {
    pub fn new(children: Vec<Node>) -> Self {
        ListNode { children }
    }
}

impl From<ListNode> for Node {
    fn from(val: ListNode) -> Self {
        Node::List(val)
    }
}
