use super::Node;

/// A generic two-element construct.
///
/// Pairs hold exactly two ordered children. A pair that the builder has
/// recognized as a mapping entry becomes a [`super::KeyValuePairNode`]
/// instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairNode {
    pub first: Box<Node>,
    pub second: Box<Node>,
}

impl PairNode {
    pub fn new(first: Node, second: Node) -> Self {
        PairNode { first: Box::new(first), second: Box::new(second) }
    }
}

impl From<PairNode> for Node {
    fn from(val: PairNode) -> Self {
        Node::Pair(val)
    }
}
