use super::Node;

/// A set literal `#{a b c}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetNode {
    pub children: Vec<Node>,
}

impl SetNode {
    pub fn new(children: Vec<Node>) -> Self {
        SetNode { children }
    }
}

impl From<SetNode> for Node {
    fn from(val: SetNode) -> Self {
        Node::Set(val)
    }
}
