use larch_ast::*;

/// Rewrites `(def name value)` forms into [`VariableDeclarationNode`]s.
///
/// The converter is a full-tree rewrite: every node is rebuilt with its
/// children lowered, so the output tree never aliases the input. Forms that
/// merely resemble a declaration (wrong arity, a non-`def` head, a name slot
/// that is not a symbol) are passed through as ordinary nodes; quoted lists
/// are data and are never inspected for the declaration shape.
#[derive(Debug, Default)]
pub struct VariableDeclarationConverter;

impl VariableDeclarationConverter {
    fn lower_all(&mut self, children: &[Node]) -> VisitResult<Vec<Node>> {
        children.iter().map(|child| child.accept(&mut *self)).collect()
    }

    /// Match the `(def name value)` shape against the children of an
    /// element-shaped node.
    fn match_declaration(children: &[Node]) -> Option<(&str, &Node)> {
        match children {
            [Node::Symbol(head), Node::Symbol(name), value] if head.symbol == "def" => {
                Some((&name.symbol, value))
            }
            _ => None,
        }
    }

    fn lower_declaration(&mut self, symbol: &str, value: &Node) -> VisitResult<Node> {
        log::trace!("Lowering declaration of `{symbol}`");
        // The value is lowered first, so declarations nested inside it are
        // converted as well.
        let value = value.accept(&mut *self)?;
        Ok(VariableDeclarationNode::new(symbol, value).into())
    }

    fn note_unconverted(children: &[Node]) {
        if let Some(Node::Symbol(head)) = children.first() {
            if head.symbol == "def" {
                log::trace!("`def` form does not match the declaration shape, leaving as is");
            }
        }
    }
}

impl Visitor for VariableDeclarationConverter {
    type Out = Node;

    fn visit_root(&mut self, root: &RootNode) -> VisitResult<Node> {
        Ok(RootNode::new(self.lower_all(&root.children)?).into())
    }

    fn visit_element(&mut self, element: &ElementNode) -> VisitResult<Node> {
        match Self::match_declaration(&element.children) {
            Some((symbol, value)) => self.lower_declaration(symbol, value),
            None => {
                Self::note_unconverted(&element.children);
                Ok(ElementNode::new(self.lower_all(&element.children)?).into())
            }
        }
    }

    fn visit_list(&mut self, list: &ListNode) -> VisitResult<Node> {
        match Self::match_declaration(&list.children) {
            Some((symbol, value)) => self.lower_declaration(symbol, value),
            None => {
                Self::note_unconverted(&list.children);
                Ok(ListNode::new(self.lower_all(&list.children)?).into())
            }
        }
    }

    fn visit_quoted_list(&mut self, quoted: &QuotedListNode) -> VisitResult<Node> {
        Ok(QuotedListNode::new(self.lower_all(&quoted.children)?).into())
    }

    fn visit_vector(&mut self, vector: &VectorNode) -> VisitResult<Node> {
        Ok(VectorNode::new(self.lower_all(&vector.children)?).into())
    }

    fn visit_set(&mut self, set: &SetNode) -> VisitResult<Node> {
        Ok(SetNode::new(self.lower_all(&set.children)?).into())
    }

    fn visit_map(&mut self, map: &MapNode) -> VisitResult<Node> {
        let malformed = map.malformed_entries();
        if malformed > 0 {
            log::warn!("Map literal carries {malformed} malformed entries");
        }
        Ok(MapNode::new(self.lower_all(&map.children)?).into())
    }

    fn visit_pair(&mut self, pair: &PairNode) -> VisitResult<Node> {
        let first = pair.first.accept(&mut *self)?;
        let second = pair.second.accept(&mut *self)?;
        Ok(PairNode::new(first, second).into())
    }

    fn visit_key_value_pair(&mut self, kvp: &KeyValuePairNode) -> VisitResult<Node> {
        let key = kvp.key.accept(&mut *self)?;
        let value = kvp.value.accept(&mut *self)?;
        Ok(KeyValuePairNode::new(key, value).into())
    }

    fn visit_symbol(&mut self, symbol: &SymbolNode) -> VisitResult<Node> {
        Ok(symbol.clone().into())
    }

    fn visit_keyword(&mut self, keyword: &KeywordNode) -> VisitResult<Node> {
        Ok(keyword.clone().into())
    }

    fn visit_operator(&mut self, operator: &OperatorNode) -> VisitResult<Node> {
        Ok(operator.clone().into())
    }

    fn visit_number(&mut self, number: &NumberNode) -> VisitResult<Node> {
        Ok(number.clone().into())
    }

    fn visit_string(&mut self, string: &StringNode) -> VisitResult<Node> {
        Ok(string.clone().into())
    }

    fn visit_variable_declaration(&mut self, decl: &VariableDeclarationNode) -> VisitResult<Node> {
        let value = decl.value.accept(&mut *self)?;
        Ok(VariableDeclarationNode::new(decl.symbol.clone(), value).into())
    }
}

#[cfg(test)]
mod converter_tests {
    use super::*;

    fn def(name: &str, value: Node) -> Node {
        ListNode::new(vec![
            SymbolNode::new("def").into(),
            SymbolNode::new(name).into(),
            value,
        ])
        .into()
    }

    fn lower(node: &Node) -> Node {
        let mut converter = VariableDeclarationConverter::default();
        node.accept(&mut converter).unwrap()
    }

    #[test]
    fn wrong_arity_is_passed_through() {
        let input: Node = ListNode::new(vec![
            SymbolNode::new("def").into(),
            SymbolNode::new("text").into(),
        ])
        .into();

        assert_eq!(lower(&input), input);
    }

    #[test]
    fn non_symbol_name_is_passed_through() {
        let input: Node = ListNode::new(vec![
            SymbolNode::new("def").into(),
            StringNode::new("text").into(),
            NumberNode::new("1").into(),
        ])
        .into();

        assert_eq!(lower(&input), input);
    }

    #[test]
    fn quoted_def_is_not_converted() {
        let input: Node = QuotedListNode::new(vec![
            SymbolNode::new("def").into(),
            SymbolNode::new("text").into(),
            NumberNode::new("1").into(),
        ])
        .into();

        assert_eq!(lower(&input), input);
    }

    #[test]
    fn def_nested_in_a_value_is_converted() {
        let input = def("outer", def("inner", NumberNode::new("7").into()));

        let expected: Node = VariableDeclarationNode::new(
            "outer",
            VariableDeclarationNode::new("inner", NumberNode::new("7").into()).into(),
        )
        .into();
        assert_eq!(lower(&input), expected);
    }

    #[test]
    fn def_nested_in_a_vector_is_converted() {
        let input: Node =
            VectorNode::new(vec![def("x", NumberNode::new("1").into())]).into();

        let expected: Node = VectorNode::new(vec![VariableDeclarationNode::new(
            "x",
            NumberNode::new("1").into(),
        )
        .into()])
        .into();
        assert_eq!(lower(&input), expected);
    }

    #[test]
    fn def_nested_in_a_set_is_converted() {
        let input: Node = SetNode::new(vec![def("x", NumberNode::new("1").into())]).into();

        let expected: Node = SetNode::new(vec![VariableDeclarationNode::new(
            "x",
            NumberNode::new("1").into(),
        )
        .into()])
        .into();
        assert_eq!(lower(&input), expected);
    }

    #[test]
    fn def_inside_a_map_value_is_converted() {
        let input: Node = MapNode::new(vec![KeyValuePairNode::new(
            KeywordNode::new(":x").into(),
            def("x", NumberNode::new("1").into()),
        )
        .into()])
        .into();

        let expected: Node = MapNode::new(vec![KeyValuePairNode::new(
            KeywordNode::new(":x").into(),
            VariableDeclarationNode::new("x", NumberNode::new("1").into()).into(),
        )
        .into()])
        .into();
        assert_eq!(lower(&input), expected);
    }

    #[test]
    fn element_shaped_def_is_converted() {
        let input: Node = ElementNode::new(vec![
            SymbolNode::new("def").into(),
            SymbolNode::new("text").into(),
            StringNode::new("Hello").into(),
        ])
        .into();

        let expected: Node =
            VariableDeclarationNode::new("text", StringNode::new("Hello").into()).into();
        assert_eq!(lower(&input), expected);
    }

    #[test]
    fn lowering_is_idempotent() {
        let input: Node = RootNode::new(vec![
            def("text", NumberNode::new("321").into()),
            PairNode::new(
                OperatorNode::new("+").into(),
                def("xyz", NumberNode::new("123").into()),
            )
            .into(),
        ])
        .into();

        let once = lower(&input);
        let twice = lower(&once);
        assert_eq!(once, twice);
    }
}
