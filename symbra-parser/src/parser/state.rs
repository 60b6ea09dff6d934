use std::{ops::Range, sync::Arc};
use tracing::trace;
use crate::{
    ast::{Node, OperatorNode},
    symbol::{Associativity, Operator, OperatorKind, Parenthesis},
};
use super::{
    error::{kind::{self, ExpressionIssue, NumberIssue, ParenthesisIssue}, Error},
    Parser,
    ParserSettings,
};

/// The kind of the last token read, which decides how the next token is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Nothing,
    Rational,
    Operand,
    Prefix,
    Binary,
    Postfix,
    Function,
    OpenParen,
    CloseParen,
    Separator,
}

impl Last {
    /// Returns true if the last token completed an operand, so the next token may be a binary or
    /// postfix operator.
    fn ends_operand(self) -> bool {
        matches!(self, Self::Rational | Self::Operand | Self::Postfix | Self::CloseParen)
    }
}

/// An entry on the operator stack: an operator waiting for its operands, or an open parenthesis.
#[derive(Debug)]
struct Pending {
    node: Node,

    /// The operands at or above this height belong to this entry.
    base: usize,

    span: Range<usize>,
}

/// The state of one [`Parser::parse`] call.
pub(super) struct ParseState<'a> {
    parser: &'a Parser,
    text: &'a str,
    offset: usize,
    operands: Vec<Node>,
    operators: Vec<Pending>,
    last: Last,

    /// The span of the most recent argument separator.
    separator_span: Range<usize>,
}

fn expression_error(span: Range<usize>, issue: ExpressionIssue) -> Error {
    Error::new(vec![span], kind::InvalidExpression { issue })
}

fn parenthesis_error(span: Range<usize>, issue: ParenthesisIssue) -> Error {
    Error::new(vec![span], kind::InvalidParenthesis { issue })
}

impl<'a> ParseState<'a> {
    pub(super) fn new(parser: &'a Parser, text: &'a str) -> Self {
        Self {
            parser,
            text,
            offset: 0,
            operands: Vec::new(),
            operators: Vec::new(),
            last: Last::Nothing,
            separator_span: 0..0,
        }
    }

    fn settings(&self) -> &'a ParserSettings {
        &self.parser.settings
    }

    /// Reads the whole input and returns the finished tree.
    pub(super) fn run(mut self) -> Result<Node, Error> {
        while let Some(c) = self.text[self.offset..].chars().next() {
            if c.is_whitespace() {
                self.offset += c.len_utf8();
                continue;
            }

            let len = self.step(c)?;
            self.offset += len;
        }

        self.finish()
    }

    /// Returns true if a numeric literal starts at the current position. A sign is part of the
    /// literal only where an operand is expected and a digit or point follows it.
    fn starts_numeral(&self, c: char) -> bool {
        match c {
            '0'..='9' | '.' => true,
            '+' | '-' if !self.last.ends_operand() => matches!(
                self.text[self.offset + 1..].chars().next(),
                Some('0'..='9' | '.')
            ),
            _ => false,
        }
    }

    /// Reads one token starting with `c`, returning its length in bytes.
    fn step(&mut self, c: char) -> Result<usize, Error> {
        let (text, offset) = (self.text, self.offset);
        let parser = self.parser;
        let settings = self.settings();

        if c == ',' {
            self.separator(offset..offset + 1)?;
            return Ok(1);
        }

        if let Some(found) = settings.parentheses.find_longest_match(text, offset) {
            let (paren, len) = (Arc::clone(found.symbol), found.len);
            let span = offset..offset + len;
            if paren.is_open {
                self.open_paren(paren, span)?;
            } else {
                self.close_paren(paren, span)?;
            }
            return Ok(len);
        }

        if self.starts_numeral(c) {
            if self.last == Last::Rational {
                return Err(Error::at(offset, kind::InvalidNumberFormat {
                    issue: NumberIssue::AdjacentNumber,
                }));
            }
            let (value, len) = parser.extract_rational(text, offset)?;
            self.push_operand(Node::Rational(value), Last::Rational, offset)?;
            return Ok(len);
        }

        if let Some(found) = settings.irrationals.find_longest_match(text, offset) {
            let (irrational, len) = (Arc::clone(found.symbol), found.len);
            self.push_operand(Node::Irrational(irrational), Last::Operand, offset)?;
            return Ok(len);
        }

        if let Some((operator, len)) = parser.find_operator(text, offset, self.last.ends_operand())? {
            self.push_operator(operator, offset..offset + len)?;
            return Ok(len);
        }

        if let Some(found) = settings.custom_symbols.find_longest_match(text, offset, |_| true) {
            let (variable, len) = (Arc::clone(found.symbol), found.len);
            self.push_operand(Node::Variable(variable), Last::Operand, offset)?;
            return Ok(len);
        }

        let (variable, len) = parser.extract_unknown_variable(text, offset)?;
        self.push_operand(Node::Variable(variable), Last::Operand, offset)?;
        Ok(len)
    }

    /// Inserts the implicit operator if the last token ended an operand, so that the next
    /// operand does not dangle.
    fn insert_implicit(&mut self, position: usize) -> Result<(), Error> {
        if !self.last.ends_operand() {
            return Ok(());
        }

        match self.settings().implicit_operator() {
            Some(operator) => {
                trace!(target: "parse", position, operator = %operator.text, "implicit operator");
                self.push_binary(Arc::clone(operator), position..position)
            },
            None => Ok(()),
        }
    }

    fn push_operand(&mut self, node: Node, last: Last, position: usize) -> Result<(), Error> {
        self.insert_implicit(position)?;
        trace!(target: "parse", position, operand = %node, "operand");
        self.operands.push(node);
        self.last = last;
        Ok(())
    }

    fn push_pending(&mut self, node: Node, base: usize, span: Range<usize>) {
        self.operators.push(Pending { node, base, span });
    }

    fn push_operator(&mut self, operator: Arc<Operator>, span: Range<usize>) -> Result<(), Error> {
        trace!(target: "parse", position = span.start, operator = %operator.text, "operator");
        match operator.kind {
            OperatorKind::Binary => self.push_binary(operator, span),
            OperatorKind::Unary if operator.is_postfix() => self.apply_postfix(operator, span),
            OperatorKind::Unary => {
                self.push_pending(Node::operator(operator, Vec::new()), self.operands.len(), span);
                self.last = Last::Prefix;
                Ok(())
            },
            _ => {
                self.insert_implicit(span.start)?;
                self.push_pending(Node::operator(operator, Vec::new()), self.operands.len(), span);
                self.last = Last::Function;
                Ok(())
            },
        }
    }

    /// Reduces every stacked operator that binds at least as tightly as `operator`, stopping at
    /// the innermost open parenthesis.
    fn reduce_for(&mut self, operator: &Operator) -> Result<(), Error> {
        while let Some(Pending { node: Node::Operator(top), .. }) = self.operators.last() {
            let top = &top.operator;
            let binds_tighter = top.precedence > operator.precedence
                || (top.precedence == operator.precedence && operator.associativity == Associativity::Left);
            if !binds_tighter {
                break;
            }
            self.reduce_top()?;
        }
        Ok(())
    }

    fn push_binary(&mut self, operator: Arc<Operator>, span: Range<usize>) -> Result<(), Error> {
        self.reduce_for(&operator)?;
        // the left operand is already on the stack
        let base = self.operands.len().saturating_sub(1);
        self.push_pending(Node::operator(operator, Vec::new()), base, span);
        self.last = Last::Binary;
        Ok(())
    }

    fn apply_postfix(&mut self, operator: Arc<Operator>, span: Range<usize>) -> Result<(), Error> {
        self.reduce_for(&operator)?;
        let operand = self.operands
            .pop()
            .ok_or_else(|| expression_error(span, ExpressionIssue::MissingOperand))?;
        self.operands.push(Node::operator(operator, vec![operand]));
        self.last = Last::Postfix;
        Ok(())
    }

    /// Pops the top of the operator stack and applies it to its operands.
    fn reduce_top(&mut self) -> Result<(), Error> {
        let Some(Pending { node, base, span }) = self.operators.pop() else {
            return Ok(());
        };
        let Node::Operator(mut node) = node else {
            return Err(parenthesis_error(span, ParenthesisIssue::Unclosed));
        };

        let available = self.operands.len().saturating_sub(base);
        let count = match node.operator.kind.arity() {
            Some(expected) if node.operator.is_function() && available != expected => {
                return Err(expression_error(span, ExpressionIssue::ArgumentCount {
                    expected,
                    found: available,
                }));
            },
            Some(expected) if available < expected => {
                return Err(expression_error(span, ExpressionIssue::MissingOperand));
            },
            Some(expected) => expected,
            None if available == 0 => {
                return Err(expression_error(span, ExpressionIssue::MissingOperand));
            },
            None => available,
        };

        node.operands = self.operands.split_off(self.operands.len() - count);
        trace!(target: "parse", operator = %node.operator.text, operands = count, "reduce");
        self.operands.push(Node::Operator(node));
        Ok(())
    }

    fn open_paren(&mut self, paren: Arc<Parenthesis>, span: Range<usize>) -> Result<(), Error> {
        self.insert_implicit(span.start)?;
        self.push_pending(Node::Parenthesis(paren), self.operands.len(), span);
        self.last = Last::OpenParen;
        Ok(())
    }

    /// Reduces operators until the innermost open parenthesis, which stays on the stack. Returns
    /// the `missing` error if there is no open parenthesis.
    fn reduce_to_paren(&mut self, missing: impl FnOnce() -> Error) -> Result<(), Error> {
        loop {
            match self.operators.last() {
                None => return Err(missing()),
                Some(Pending { node: Node::Parenthesis(_), .. }) => return Ok(()),
                Some(_) => self.reduce_top()?,
            }
        }
    }

    fn close_paren(&mut self, close: Arc<Parenthesis>, span: Range<usize>) -> Result<(), Error> {
        // every separator must be followed by an argument
        if self.last == Last::Separator {
            return Err(expression_error(self.separator_span.clone(), ExpressionIssue::MisplacedSeparator));
        }

        self.reduce_to_paren(|| parenthesis_error(span.clone(), ParenthesisIssue::Unopened))?;
        let Some(Pending { node: Node::Parenthesis(open), base, span: open_span }) = self.operators.pop() else {
            return Err(parenthesis_error(span, ParenthesisIssue::Unopened));
        };

        if self.settings().match_exact_parenthesis && !open.is_opposite(&close) {
            let expected = self.settings().parentheses
                .opposite(&open)
                .map_or_else(String::new, |paren| paren.text.clone());
            return Err(parenthesis_error(span, ParenthesisIssue::Mismatched { expected }));
        }

        let count = self.operands.len().saturating_sub(base);
        if count == 0 {
            return Err(expression_error(open_span.start..span.end, ExpressionIssue::EmptyParenthesis));
        }

        let is_call = matches!(
            self.operators.last(),
            Some(Pending { node: Node::Operator(OperatorNode { operator, .. }), .. }) if operator.is_function()
        );
        if is_call {
            self.reduce_top()?;
        } else if count > 1 {
            return Err(expression_error(span, ExpressionIssue::MisplacedSeparator));
        }

        self.last = Last::CloseParen;
        Ok(())
    }

    fn separator(&mut self, span: Range<usize>) -> Result<(), Error> {
        if !self.last.ends_operand() {
            return Err(expression_error(span, ExpressionIssue::MisplacedSeparator));
        }

        self.reduce_to_paren(|| expression_error(span.clone(), ExpressionIssue::MisplacedSeparator))?;
        self.separator_span = span;
        self.last = Last::Separator;
        Ok(())
    }

    /// Reduces everything left on the operator stack and checks that exactly one operand remains.
    fn finish(mut self) -> Result<Node, Error> {
        while let Some(top) = self.operators.last() {
            if let Node::Parenthesis(_) = top.node {
                return Err(parenthesis_error(top.span.clone(), ParenthesisIssue::Unclosed));
            }
            self.reduce_top()?;
        }

        let whole = 0..self.text.len();
        match self.operands.len() {
            1 => self.operands.pop().ok_or_else(|| expression_error(whole, ExpressionIssue::MissingOperand)),
            0 => Err(expression_error(whole, ExpressionIssue::MissingOperand)),
            _ => Err(expression_error(whole, ExpressionIssue::DanglingOperands)),
        }
    }
}
