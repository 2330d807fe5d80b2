use std::fmt;

mod element;
mod key_value_pair;
mod keyword;
mod list;
mod map;
mod number;
mod operator;
mod pair;
mod quoted_list;
mod root;
mod set;
mod string;
mod symbol;
mod variable_declaration;
mod vector;

pub use element::ElementNode;
pub use key_value_pair::KeyValuePairNode;
pub use keyword::KeywordNode;
pub use list::ListNode;
pub use map::MapNode;
pub use number::NumberNode;
pub use operator::OperatorNode;
pub use pair::PairNode;
pub use quoted_list::QuotedListNode;
pub use root::RootNode;
pub use set::SetNode;
pub use string::StringNode;
pub use symbol::SymbolNode;
pub use variable_declaration::VariableDeclarationNode;
pub use vector::VectorNode;

/// A node in the larch syntax tree.
///
/// The tree is immutable once constructed: every rewrite builds new nodes
/// instead of mutating existing ones, and each node owns its children, so no
/// subtree is ever shared between two parents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Root(RootNode),
    Element(ElementNode),
    List(ListNode),
    QuotedList(QuotedListNode),
    Vector(VectorNode),
    Set(SetNode),
    Map(MapNode),
    Pair(PairNode),
    KeyValuePair(KeyValuePairNode),
    Symbol(SymbolNode),
    Keyword(KeywordNode),
    Operator(OperatorNode),
    Number(NumberNode),
    String(StringNode),
    VariableDeclaration(VariableDeclarationNode),
}

impl Node {
    /// The concrete kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root(_) => NodeKind::Root,
            Node::Element(_) => NodeKind::Element,
            Node::List(_) => NodeKind::List,
            Node::QuotedList(_) => NodeKind::QuotedList,
            Node::Vector(_) => NodeKind::Vector,
            Node::Set(_) => NodeKind::Set,
            Node::Map(_) => NodeKind::Map,
            Node::Pair(_) => NodeKind::Pair,
            Node::KeyValuePair(_) => NodeKind::KeyValuePair,
            Node::Symbol(_) => NodeKind::Symbol,
            Node::Keyword(_) => NodeKind::Keyword,
            Node::Operator(_) => NodeKind::Operator,
            Node::Number(_) => NodeKind::Number,
            Node::String(_) => NodeKind::String,
            Node::VariableDeclaration(_) => NodeKind::VariableDeclaration,
        }
    }

    /// An ordered view of the immediate children of this node.
    ///
    /// Leaves yield an empty view. A [`VariableDeclarationNode`] exposes only
    /// its value; the declared name is a plain string, not a child node.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Root(root) => root.children.iter().collect(),
            Node::Element(element) => element.children.iter().collect(),
            Node::List(list) => list.children.iter().collect(),
            Node::QuotedList(quoted) => quoted.children.iter().collect(),
            Node::Vector(vector) => vector.children.iter().collect(),
            Node::Set(set) => set.children.iter().collect(),
            Node::Map(map) => map.children.iter().collect(),
            Node::Pair(pair) => vec![&pair.first, &pair.second],
            Node::KeyValuePair(kvp) => vec![&kvp.key, &kvp.value],
            Node::Symbol(_)
            | Node::Keyword(_)
            | Node::Operator(_)
            | Node::Number(_)
            | Node::String(_) => Vec::new(),
            Node::VariableDeclaration(decl) => vec![&decl.value],
        }
    }

    /// Iterate over this node and all nodes below it in depth-first pre-order.
    ///
    /// The receiver comes first, then each child's subtree from left to right.
    /// Every call starts a fresh iteration.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// The discriminant of a [`Node`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Element,
    List,
    QuotedList,
    Vector,
    Set,
    Map,
    Pair,
    KeyValuePair,
    Symbol,
    Keyword,
    Operator,
    Number,
    String,
    VariableDeclaration,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Root => write!(f, "root"),
            NodeKind::Element => write!(f, "element"),
            NodeKind::List => write!(f, "list"),
            NodeKind::QuotedList => write!(f, "quoted list"),
            NodeKind::Vector => write!(f, "vector"),
            NodeKind::Set => write!(f, "set"),
            NodeKind::Map => write!(f, "map"),
            NodeKind::Pair => write!(f, "pair"),
            NodeKind::KeyValuePair => write!(f, "key/value pair"),
            NodeKind::Symbol => write!(f, "symbol"),
            NodeKind::Keyword => write!(f, "keyword"),
            NodeKind::Operator => write!(f, "operator"),
            NodeKind::Number => write!(f, "number"),
            NodeKind::String => write!(f, "string"),
            NodeKind::VariableDeclaration => write!(f, "variable declaration"),
        }
    }
}

/// Iterator returned by [`Node::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Children are pushed right to left so that the leftmost subtree is
        // visited first.
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod descendants_tests {
    use super::*;

    fn sample_tree() -> Node {
        ListNode::new(vec![
            SymbolNode::new("def").into(),
            SymbolNode::new("answer").into(),
            VectorNode::new(vec![NumberNode::new("4").into(), NumberNode::new("2").into()])
                .into(),
        ])
        .into()
    }

    #[test]
    fn visits_every_node_exactly_once() {
        let tree = sample_tree();
        let kinds: Vec<NodeKind> = tree.descendants().map(Node::kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::List,
                NodeKind::Symbol,
                NodeKind::Symbol,
                NodeKind::Vector,
                NodeKind::Number,
                NodeKind::Number,
            ]
        );
    }

    #[test]
    fn is_restartable() {
        let tree = sample_tree();
        assert_eq!(tree.descendants().count(), 6);
        assert_eq!(tree.descendants().count(), 6);
    }

    #[test]
    fn leaf_yields_only_itself() {
        let leaf: Node = SymbolNode::new("foo").into();
        let all: Vec<&Node> = leaf.descendants().collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], &leaf);
    }

    #[test]
    fn clone_is_deep_and_structurally_equal() {
        let tree = sample_tree();
        let copy = tree.clone();
        assert_eq!(tree, copy);
        for (original, cloned) in tree.descendants().zip(copy.descendants()).skip(1) {
            assert!(!std::ptr::eq(original, cloned));
        }
    }
}
