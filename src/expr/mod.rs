// SPDX-License-Identifier: MIT

//! Boolean rule-expression engine
//!
//! This module parses and evaluates grouping-rule expressions like:
//! - `tag[work]`
//! - `tag[work]&project[acme]`
//! - `!(draft|archive)`
//!
//! The pipeline is one-shot and stateless: the expression string is
//! tokenized, reordered into prefix ("Polish") order, assembled into a tree
//! and reduced to a boolean. What a literal such as `tag[work]` means is
//! decided entirely by the caller-supplied predicate.
//!
//! `&` and `|` carry no relative precedence: a flat `a&b|c` groups by source
//! order, and parentheses are the only way to group differing operators.
//! Malformed input never raises; it degrades into a partial or absent tree,
//! and an absent tree evaluates as the empty literal.

mod evaluator;
mod node;
mod polish;
mod token;

pub use evaluator::evaluate;
pub use node::{build, ExprNode};
pub use polish::{prefix_order, TokenCursor};
pub use token::{tokenize, Token};

/// Evaluate a rule expression against a literal predicate in one shot.
pub fn matches<F>(expression: &str, literal: F) -> bool
where
    F: Fn(&str) -> bool,
{
    let tokens = tokenize(expression);
    let prefix = prefix_order(tokens);
    let mut cursor = TokenCursor::new(prefix);
    let tree = build(&mut cursor);
    evaluate(tree.as_ref(), &literal)
}
