use super::Node;

/// A named value declaration, introduced by lowering a `(def name value)`
/// form.
///
/// This is a semantic node: the builder never produces it. The declared name
/// is plain text; only the declared value participates in traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclarationNode {
    pub symbol: String,
    pub value: Box<Node>,
}

impl VariableDeclarationNode {
    pub fn new(symbol: impl Into<String>, value: Node) -> Self {
        VariableDeclarationNode { symbol: symbol.into(), value: Box::new(value) }
    }
}

impl From<VariableDeclarationNode> for Node {
    fn from(val: VariableDeclarationNode) -> Self {
        Node::VariableDeclaration(val)
    }
}
