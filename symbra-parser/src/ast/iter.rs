use super::Node;

/// Walks a tree in post-order: every operand, left to right, before the node that owns it.
///
/// Created by [`Node::post_order_iter`].
pub struct NodeIter<'a> {
    /// Each entry is a node still being walked, paired with the index of its next unvisited
    /// operand.
    pending: Vec<(&'a Node, usize)>,
}

impl<'a> NodeIter<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self { pending: vec![(root, 0)] }
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, cursor) = self.pending.last_mut()?;
            let node = *node;
            match node.operands().get(*cursor) {
                Some(child) => {
                    *cursor += 1;
                    self.pending.push((child, 0));
                },
                None => {
                    self.pending.pop();
                    return Some(node);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use symbra_rational::Rational;
    use crate::symbol::{OperationId, DEFAULT_OPERATORS};
    use super::*;

    #[test]
    fn post_order() {
        let add = Arc::clone(DEFAULT_OPERATORS.get(OperationId::Addition).unwrap());
        let neg = Arc::clone(DEFAULT_OPERATORS.get(OperationId::UnaryMinus).unwrap());
        let tree = Node::operator(Arc::clone(&add), vec![
            Node::operator(neg, vec![Node::variable("a")]),
            Node::operator(add, vec![Node::variable("b"), Rational::ONE.into()]),
        ]);

        let order = tree.post_order_iter()
            .map(|node| match node {
                Node::Variable(v) => v.name.clone(),
                Node::Rational(r) => r.to_string(),
                Node::Operator(op) => op.operator.text.clone(),
                _ => unreachable!(),
            })
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["a", "-", "b", "1", "+", "+"]);
    }

    #[test]
    fn repeated_operands_are_each_visited() {
        let mul = Arc::clone(DEFAULT_OPERATORS.get(OperationId::Multiplication).unwrap());
        let x = Node::variable("x");
        let square = Node::operator(Arc::clone(&mul), vec![x.clone(), x.clone()]);
        let tree = Node::operator(mul, vec![square.clone(), square]);

        assert_eq!(tree.post_order_iter().count(), 7);
        assert_eq!(Node::variable("y").post_order_iter().collect::<Vec<_>>(), vec![&Node::variable("y")]);
    }
}
