use super::Node;

/// An identifier atom, e.g. `foo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolNode {
    pub symbol: String,
}

impl SymbolNode {
    pub fn new(symbol: impl Into<String>) -> Self {
        SymbolNode { symbol: symbol.into() }
    }
}

impl From<SymbolNode> for Node {
    fn from(val: SymbolNode) -> Self {
        Node::Symbol(val)
    }
}
