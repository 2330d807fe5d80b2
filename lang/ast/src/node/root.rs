use super::Node;

/// The root of a parsed document.
///
/// Its children are the top-level forms in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootNode {
    pub children: Vec<Node>,
}

impl RootNode {
    pub fn new(children: Vec<Node>) -> Self {
        RootNode { children }
    }
}

impl From<RootNode> for Node {
    fn from(val: RootNode) -> Self {
        Node::Root(val)
    }
}
