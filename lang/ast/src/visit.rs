use miette::Diagnostic;
use thiserror::Error;

use crate::node::*;

pub type VisitResult<T> = Result<T, VisitError>;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum VisitError {
    #[error("No applicable handler for {kind} nodes")]
    #[diagnostic(code("V-001"))]
    NoApplicableHandler { kind: NodeKind },
}

/// Node-kind-directed behavior over a syntax tree.
///
/// A visitor exposes one handler per node kind plus a fallback. Callers go
/// through [`Node::accept`], which selects the handler matching the node's
/// concrete kind; they never need to know that kind themselves. Every handler
/// defaults to [`Visitor::visit_unhandled`], which in turn fails with
/// [`VisitError::NoApplicableHandler`], so a visitor that is asked to handle
/// a kind it neither implements nor catches with a fallback surfaces the gap
/// immediately instead of silently defaulting.
///
/// The output type is chosen per visitor: a counting visitor may pick
/// `Out = usize` while a rewriting visitor picks `Out = Node`.
pub trait Visitor {
    type Out;

    fn visit_root(&mut self, _root: &RootNode) -> VisitResult<Self::Out> {
        self.visit_unhandled(NodeKind::Root)
    }

    fn visit_element(&mut self, _element: &ElementNode) -> VisitResult<Self::Out> {
        self.visit_unhandled(NodeKind::Element)
    }

    fn visit_list(&mut self, _list: &ListNode) -> VisitResult<Self::Out> {
        self.visit_unhandled(NodeKind::List)
    }

    fn visit_quoted_list(&mut self, _quoted: &QuotedListNode) -> VisitResult<Self::Out> {
        self.visit_unhandled(NodeKind::QuotedList)
    }

    fn visit_vector(&mut self, _vector: &VectorNode) -> VisitResult<Self::Out> {
        self.visit_unhandled(NodeKind::Vector)
    }

    fn visit_set(&mut self, _set: &SetNode) -> VisitResult<Self::Out> {
        self.visit_unhandled(NodeKind::Set)
    }

    fn visit_map(&mut self, _map: &MapNode) -> VisitResult<Self::Out> {
        self.visit_unhandled(NodeKind::Map)
    }

    fn visit_pair(&mut self, _pair: &PairNode) -> VisitResult<Self::Out> {
        self.visit_unhandled(NodeKind::Pair)
    }

    fn visit_key_value_pair(&mut self, _kvp: &KeyValuePairNode) -> VisitResult<Self::Out> {
        self.visit_unhandled(NodeKind::KeyValuePair)
    }

    fn visit_symbol(&mut self, _symbol: &SymbolNode) -> VisitResult<Self::Out> {
        self.visit_unhandled(NodeKind::Symbol)
    }

    fn visit_keyword(&mut self, _keyword: &KeywordNode) -> VisitResult<Self::Out> {
        self.visit_unhandled(NodeKind::Keyword)
    }

    fn visit_operator(&mut self, _operator: &OperatorNode) -> VisitResult<Self::Out> {
        self.visit_unhandled(NodeKind::Operator)
    }

    fn visit_number(&mut self, _number: &NumberNode) -> VisitResult<Self::Out> {
        self.visit_unhandled(NodeKind::Number)
    }

    fn visit_string(&mut self, _string: &StringNode) -> VisitResult<Self::Out> {
        self.visit_unhandled(NodeKind::String)
    }

    fn visit_variable_declaration(
        &mut self,
        _decl: &VariableDeclarationNode,
    ) -> VisitResult<Self::Out> {
        self.visit_unhandled(NodeKind::VariableDeclaration)
    }

    /// Fallback invoked for every kind without a dedicated handler.
    ///
    /// Overriding this registers a default handler in the sense of the
    /// dispatch contract; the default implementation reports the gap.
    fn visit_unhandled(&mut self, kind: NodeKind) -> VisitResult<Self::Out> {
        Err(VisitError::NoApplicableHandler { kind })
    }
}

impl Node {
    /// Dispatch `visitor` on the concrete kind of this node.
    ///
    /// Exactly one handler runs per call, the selection depends only on the
    /// node's kind, and the whole resolution is a single `match`, so there is
    /// no specificity rule to get wrong.
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> VisitResult<V::Out> {
        match self {
            Node::Root(root) => visitor.visit_root(root),
            Node::Element(element) => visitor.visit_element(element),
            Node::List(list) => visitor.visit_list(list),
            Node::QuotedList(quoted) => visitor.visit_quoted_list(quoted),
            Node::Vector(vector) => visitor.visit_vector(vector),
            Node::Set(set) => visitor.visit_set(set),
            Node::Map(map) => visitor.visit_map(map),
            Node::Pair(pair) => visitor.visit_pair(pair),
            Node::KeyValuePair(kvp) => visitor.visit_key_value_pair(kvp),
            Node::Symbol(symbol) => visitor.visit_symbol(symbol),
            Node::Keyword(keyword) => visitor.visit_keyword(keyword),
            Node::Operator(operator) => visitor.visit_operator(operator),
            Node::Number(number) => visitor.visit_number(number),
            Node::String(string) => visitor.visit_string(string),
            Node::VariableDeclaration(decl) => visitor.visit_variable_declaration(decl),
        }
    }
}
