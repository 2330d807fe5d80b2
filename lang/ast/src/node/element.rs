use super::Node;

/// The generic collection-of-elements node.
///
/// An element carries an ordered sequence of heterogeneous children. All
/// bracketed productions of the grammar (lists, vectors, sets, maps) share
/// this shape; `ElementNode` itself is what the builder produces for a form
/// it does not classify further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    pub children: Vec<Node>,
}

impl ElementNode {
    pub fn new(children: Vec<Node>) -> Self {
        ElementNode { children }
    }
}

impl From<ElementNode> for Node {
    fn from(val: ElementNode) -> Self {
        Node::Element(val)
    }
}
