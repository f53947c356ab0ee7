//! Expression tree evaluator

use super::node::ExprNode;

/// Reduce a tree to a boolean, delegating every leaf to `literal`.
///
/// An absent tree — and any missing operand inside a degenerate tree —
/// evaluates as the empty literal. The left child is evaluated first and
/// `&&`/`||` short-circuit. The tree is not mutated and may be evaluated
/// repeatedly, against the same predicate or a different one.
pub fn evaluate<F>(node: Option<&ExprNode>, literal: &F) -> bool
where
    F: Fn(&str) -> bool,
{
    match node {
        None => literal(""),
        Some(ExprNode::Leaf(text)) => literal(text),
        Some(ExprNode::Not(child)) => !evaluate(child.as_deref(), literal),
        Some(ExprNode::And(left, right)) => {
            evaluate(left.as_deref(), literal) && evaluate(right.as_deref(), literal)
        }
        Some(ExprNode::Or(left, right)) => {
            evaluate(left.as_deref(), literal) || evaluate(right.as_deref(), literal)
        }
    }
}
