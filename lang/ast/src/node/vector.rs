use super::Node;

/// A square-bracket vector `[a b c]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorNode {
    pub children: Vec<Node>,
}

impl VectorNode {
    pub fn new(children: Vec<Node>) -> Self {
        VectorNode { children }
    }
}

impl From<VectorNode> for Node {
    fn from(val: VectorNode) -> Self {
        Node::Vector(val)
    }
}
