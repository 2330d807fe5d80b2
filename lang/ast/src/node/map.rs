use super::{KeyValuePairNode, Node};

/// A map literal `{k v ...}`.
///
/// The builder is expected to populate a map with [`KeyValuePairNode`]
/// children only. Anything else stays a structural child (it is still
/// reachable through [`Node::children`] and [`Node::descendants`]) but is
/// excluded from the logical [`entries`] view.
///
/// [`entries`]: MapNode::entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapNode {
    pub children: Vec<Node>,
}

impl MapNode {
    pub fn new(children: Vec<Node>) -> Self {
        MapNode { children }
    }

    /// The well-formed entries of this map, in source order.
    pub fn entries(&self) -> impl Iterator<Item = &KeyValuePairNode> {
        self.children.iter().filter_map(|child| match child {
            Node::KeyValuePair(kvp) => Some(kvp),
            _ => None,
        })
    }

    /// The number of children that are not key/value pairs.
    ///
    /// A non-zero count means the upstream builder handed us a malformed map.
    pub fn malformed_entries(&self) -> usize {
        self.children.len() - self.entries().count()
    }
}

impl From<MapNode> for Node {
    fn from(val: MapNode) -> Self {
        Node::Map(val)
    }
}

#[cfg(test)]
mod map_tests {
    use super::super::{NumberNode, StringNode, SymbolNode};
    use super::*;

    #[test]
    fn entries_exclude_malformed_children() {
        let map = MapNode::new(vec![
            KeyValuePairNode::new(
                SymbolNode::new("a").into(),
                NumberNode::new("1").into(),
            )
            .into(),
            StringNode::new("stray").into(),
            KeyValuePairNode::new(
                SymbolNode::new("b").into(),
                NumberNode::new("2").into(),
            )
            .into(),
        ]);

        assert_eq!(map.entries().count(), 2);
        assert_eq!(map.malformed_entries(), 1);

        // Traversal still sees the stray child.
        let node: Node = map.into();
        assert_eq!(node.descendants().count(), 8);
    }
}
