use super::Node;

/// An operator atom, e.g. `+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorNode {
    pub operator: String,
}

impl OperatorNode {
    pub fn new(operator: impl Into<String>) -> Self {
        OperatorNode { operator: operator.into() }
    }
}

impl From<OperatorNode> for Node {
    fn from(val: OperatorNode) -> Self {
        Node::Operator(val)
    }
}
