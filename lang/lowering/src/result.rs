use miette::Diagnostic;
use thiserror::Error;

use larch_ast::VisitError;

pub type LoweringResult<T = ()> = Result<T, LoweringError>;

#[derive(Error, Diagnostic, Debug)]
pub enum LoweringError {
    /// The converter was handed a node kind it has no handler for.
    ///
    /// [`crate::VariableDeclarationConverter`] handles the full node
    /// vocabulary, so seeing this error means the vocabulary grew without the
    /// converter keeping up.
    #[error(transparent)]
    #[diagnostic(code("L-001"))]
    Visit(#[from] VisitError),
}

#[cfg(test)]
mod result_tests {
    use larch_ast::{NodeKind, VisitError};
    use miette::Diagnostic;

    use super::*;

    #[test]
    fn dispatch_failures_carry_a_lowering_code() {
        let err = LoweringError::from(VisitError::NoApplicableHandler { kind: NodeKind::Pair });
        assert_eq!(err.code().unwrap().to_string(), "L-001");
    }
}
