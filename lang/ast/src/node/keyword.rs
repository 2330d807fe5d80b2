use super::Node;

/// A keyword atom, e.g. `:key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordNode {
    pub keyword: String,
}

impl KeywordNode {
    pub fn new(keyword: impl Into<String>) -> Self {
        KeywordNode { keyword: keyword.into() }
    }
}

impl From<KeywordNode> for Node {
    fn from(val: KeywordNode) -> Self {
        Node::Keyword(val)
    }
}
