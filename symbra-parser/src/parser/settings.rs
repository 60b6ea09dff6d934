use std::sync::Arc;
use crate::symbol::{
    IrrationalRegistry,
    OperationId,
    Operator,
    OperatorRegistry,
    ParenthesisRegistry,
    SymbolTrie,
    Variable,
    DEFAULT_IRRATIONALS,
    DEFAULT_OPERATORS,
    DEFAULT_PARENTHESES,
};
use super::error::{kind, Error};

/// Options that control how a [`Parser`](super::Parser) reads expressions.
#[derive(Debug, Clone)]
pub struct ParserSettings {
    /// The operators and functions that can be used.
    pub operators: Arc<OperatorRegistry>,

    /// The named constants that can be used.
    pub irrationals: Arc<IrrationalRegistry>,

    /// The parenthesis pairs that can group subexpressions.
    pub parentheses: Arc<ParenthesisRegistry>,

    /// Variables declared ahead of time. Multi-character names can only be used if they are
    /// declared here; otherwise every unknown character is its own variable.
    pub custom_symbols: SymbolTrie<Variable>,

    /// If true, a closing parenthesis must be the pair of the innermost open parenthesis, so that
    /// `(1]` is an error. If false, any closing parenthesis closes the innermost group.
    pub match_exact_parenthesis: bool,

    /// If true, a character that matches no symbol becomes a single-character variable.
    /// Otherwise it is an error.
    pub allow_unknown_symbols: bool,

    implicit_operator: Option<Arc<Operator>>,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            operators: Arc::clone(&DEFAULT_OPERATORS),
            irrationals: Arc::clone(&DEFAULT_IRRATIONALS),
            parentheses: Arc::clone(&DEFAULT_PARENTHESES),
            custom_symbols: SymbolTrie::new(),
            match_exact_parenthesis: true,
            allow_unknown_symbols: true,
            implicit_operator: DEFAULT_OPERATORS.get(OperationId::Multiplication).cloned(),
        }
    }
}

impl ParserSettings {
    /// The binary operator inserted between adjacent operands, as in `2x` or `(a)(b)`. Multiplication
    /// by default.
    pub fn implicit_operator(&self) -> Option<&Arc<Operator>> {
        self.implicit_operator.as_ref()
    }

    /// Sets the implicit operator. [`None`] disables implicit insertion, which makes adjacent
    /// operands an error. Only binary operators are accepted.
    pub fn set_implicit_operator(&mut self, operator: Option<Arc<Operator>>) -> Result<(), Error> {
        if let Some(operator) = &operator {
            if !operator.is_binary() {
                return Err(Error::new(Vec::new(), kind::InvalidImplicitOperator {
                    text: operator.text.clone(),
                }));
            }
        }

        self.implicit_operator = operator;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implicit_operator_must_be_binary() {
        let mut settings = ParserSettings::default();
        let factorial = DEFAULT_OPERATORS.get(OperationId::Factorial).cloned();
        let err = settings.set_implicit_operator(factorial).unwrap_err();
        assert!(err.is::<kind::InvalidImplicitOperator>());
        assert_eq!(
            settings.implicit_operator().map(|op| op.operation),
            Some(OperationId::Multiplication),
        );

        settings.set_implicit_operator(None).unwrap();
        assert!(settings.implicit_operator().is_none());
    }

    #[test]
    fn implicit_operator_report_has_no_labels() {
        let mut settings = ParserSettings::default();
        let err = settings
            .set_implicit_operator(DEFAULT_OPERATORS.get(OperationId::Factorial).cloned())
            .unwrap_err();
        assert!(err.spans.is_empty());

        let mut buf = Vec::new();
        err.build_report("settings")
            .write(("settings", ariadne::Source::from("")), &mut buf)
            .unwrap();
        let report = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();
        assert!(report.contains("`!` cannot be used as the implicit operator"));
        assert!(report.contains("only binary operators can be inserted between adjacent operands"));
    }
}
