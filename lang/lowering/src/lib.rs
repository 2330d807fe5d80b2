mod lower;
mod result;

pub use lower::VariableDeclarationConverter;
pub use result::*;

use larch_ast::Node;

/// Lower a syntax tree.
///
/// Every unquoted form shaped like `(def name value)` is replaced by a
/// semantic [`larch_ast::VariableDeclarationNode`]; everything else is rebuilt
/// unchanged. The result is a fresh tree that shares no nodes with the input.
pub fn lower(node: &Node) -> LoweringResult<Node> {
    let mut converter = VariableDeclarationConverter::default();
    let lowered = node.accept(&mut converter)?;
    Ok(lowered)
}
