use super::Node;

/// A mapping entry; participates in [`super::MapNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValuePairNode {
    pub key: Box<Node>,
    pub value: Box<Node>,
}

impl KeyValuePairNode {
    pub fn new(key: Node, value: Node) -> Self {
        KeyValuePairNode { key: Box::new(key), value: Box::new(value) }
    }
}

impl From<KeyValuePairNode> for Node {
    fn from(val: KeyValuePairNode) -> Self {
        Node::KeyValuePair(val)
    }
}
