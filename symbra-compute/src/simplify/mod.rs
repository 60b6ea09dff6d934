//! Rule-based simplification of expression trees.
//!
//! A [`Simplifier`] walks a tree bottom-up. Operands are simplified first, then the rules bound to
//! the operator's [`OperationId`] are tried in order: ascending [`Rule::priority`], with rules of
//! equal priority tried in the order they were added. The first rule whose [`Rule::check`]
//! succeeds and whose [`Rule::simplify`] produces a node supplies the replacement. If no rule
//! applies, the operator is rebuilt over its simplified operands.
//!
//! Simplification never fails. Rules that hit an arithmetic error, such as overflow or a power
//! with no rational result, decline and leave the expression as it was.

pub mod rules;
pub mod step;

use once_cell::sync::Lazy;
use std::{collections::HashMap, fmt, sync::Arc};
use symbra_parser::{
    ast::Node,
    symbol::{OperationId, OperatorRegistry, DEFAULT_OPERATORS},
};
use tracing::{debug, trace};
use step::{Step, StepCollector};

/// A single rewrite rule for the operands of one operation.
pub trait Rule: Send + Sync {
    /// The step recorded when this rule is applied.
    fn step(&self) -> Step;

    /// Rules with a lower priority are tried first.
    fn priority(&self) -> i32 {
        0
    }

    /// Returns true if this rule may apply to the given (already simplified) operands.
    fn check(&self, operands: &[Node]) -> bool;

    /// Rewrites the operands. This is only called if [`Rule::check`] succeeded, and may still
    /// return [`None`] to decline, in which case the next rule is tried.
    fn simplify(
        &self,
        simplifier: &Simplifier,
        operands: &[Node],
        steps: &mut dyn StepCollector,
    ) -> Option<Node>;
}

/// The rules bound to one operation, kept in the order they are tried.
#[derive(Default)]
pub struct RuleList {
    rules: Vec<Box<dyn Rule>>,
}

impl fmt::Debug for RuleList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| (rule.priority(), rule.step())))
            .finish()
    }
}

impl RuleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule after every rule with the same or lower priority.
    pub fn add_rule(&mut self, rule: impl Rule + 'static) -> &mut Self {
        self.add_boxed(Box::new(rule))
    }

    /// Adds a boxed rule after every rule with the same or lower priority.
    pub fn add_boxed(&mut self, rule: Box<dyn Rule>) -> &mut Self {
        let priority = rule.priority();
        let index = self.rules
            .iter()
            .position(|existing| existing.priority() > priority)
            .unwrap_or(self.rules.len());
        self.rules.insert(index, rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the rules in the order they are tried.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Rule + 'static)> {
        self.rules.iter().map(Box::as_ref)
    }

    /// Applies the first rule that accepts the operands.
    fn apply(
        &self,
        simplifier: &Simplifier,
        operation: OperationId,
        operands: &[Node],
        steps: &mut dyn StepCollector,
    ) -> Option<Node> {
        for rule in self.iter() {
            if !rule.check(operands) {
                continue;
            }

            match rule.simplify(simplifier, operands, steps) {
                Some(node) => {
                    trace!(target: "simplify", ?operation, rule = ?rule.step(), result = %node, "rule applied");
                    steps.push(rule.step());
                    return Some(node);
                },
                None => trace!(target: "simplify", ?operation, rule = ?rule.step(), "rule declined"),
            }
        }

        None
    }
}

/// The simplifier with the default rules over the default operators.
static DEFAULT_SIMPLIFIER: Lazy<Simplifier> =
    Lazy::new(|| Simplifier::with_default_rules(Arc::clone(&DEFAULT_OPERATORS)));

/// Simplifies expression trees using the rules bound to each operation.
#[derive(Debug)]
pub struct Simplifier {
    /// The registry used to create new operator nodes.
    operators: Arc<OperatorRegistry>,

    rules: HashMap<OperationId, RuleList>,
}

impl Simplifier {
    /// Creates a simplifier with no rules, which only rebuilds the trees it is given.
    pub fn new(operators: Arc<OperatorRegistry>) -> Self {
        Self { operators, rules: HashMap::new() }
    }

    /// Creates a simplifier with the default rules for addition, subtraction, multiplication,
    /// division, exponentiation, square roots, and unary plus and minus.
    pub fn with_default_rules(operators: Arc<OperatorRegistry>) -> Self {
        let mut simplifier = Self::new(operators);
        rules::bind_defaults(&mut simplifier);
        simplifier
    }

    /// Returns the shared simplifier with the default rules.
    pub fn global() -> &'static Simplifier {
        &DEFAULT_SIMPLIFIER
    }

    pub fn operators(&self) -> &Arc<OperatorRegistry> {
        &self.operators
    }

    /// Binds the rules for an operation, replacing any previously bound rules.
    pub fn bind_rules(&mut self, operation: OperationId, rules: RuleList) {
        self.rules.insert(operation, rules);
    }

    /// Returns the rules bound to an operation.
    pub fn rules(&self, operation: OperationId) -> Option<&RuleList> {
        self.rules.get(&operation)
    }

    /// Simplifies a tree, returning a new tree.
    pub fn simplify(&self, node: &Node) -> Node {
        self.simplify_with_collector(node, &mut ())
    }

    /// Simplifies a tree, also returning the steps that were applied in order.
    pub fn simplify_with_steps(&self, node: &Node) -> (Node, Vec<Step>) {
        let mut steps = Vec::new();
        let node = self.simplify_with_collector(node, &mut steps);
        (node, steps)
    }

    /// Simplifies a tree, reporting each applied step to `steps`.
    pub fn simplify_with_collector(&self, node: &Node, steps: &mut dyn StepCollector) -> Node {
        debug!(target: "simplify", input = %node, "simplifying");
        let result = self.simplify_node(node, steps);
        debug!(target: "simplify", output = %result, "simplified");
        result
    }

    fn simplify_node(&self, node: &Node, steps: &mut dyn StepCollector) -> Node {
        let Node::Operator(operator) = node else {
            return node.clone();
        };

        let operands = operator.operands
            .iter()
            .map(|operand| self.simplify_node(operand, steps))
            .collect::<Vec<_>>();

        self.simplify_operation(operator.operation(), &operands, steps)
            .unwrap_or_else(|| Node::Operator(operator.with_operands(operands)))
    }

    /// Applies the rules bound to `operation` to operands that are already simplified. Returns
    /// [`None`] if no rule applies.
    pub fn simplify_operation(
        &self,
        operation: OperationId,
        operands: &[Node],
        steps: &mut dyn StepCollector,
    ) -> Option<Node> {
        self.rules.get(&operation)?.apply(self, operation, operands, steps)
    }

    /// Applies the rules bound to `operation` to operands that are already simplified, or builds
    /// the operator node if no rule applies. Returns [`None`] only if the operation is not in
    /// the operator registry.
    pub fn simplify_or_build(
        &self,
        operation: OperationId,
        operands: Vec<Node>,
        steps: &mut dyn StepCollector,
    ) -> Option<Node> {
        match self.simplify_operation(operation, &operands, steps) {
            Some(node) => Some(node),
            None => self.new_operator_node(operation, operands),
        }
    }

    /// Creates an operator node for `operation` using the operator registry.
    pub fn new_operator_node(&self, operation: OperationId, operands: Vec<Node>) -> Option<Node> {
        self.operators
            .get(operation)
            .map(|operator| Node::operator(Arc::clone(operator), operands))
    }
}
