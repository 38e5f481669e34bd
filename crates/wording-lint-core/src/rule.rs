//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::syntax::SyntaxNode;
use crate::types::{Replacement, Severity, Violation};

/// A per-node lint rule over the lowered syntax tree.
///
/// The host walks every node of a file and calls [`Rule::check_node`] on
/// each one. Rules that can correct their findings also implement
/// [`Rule::autocorrect`], which the host calls only when fixing was
/// requested.
///
/// # Example
///
/// ```ignore
/// use wording_lint_core::{FileContext, Rule, SyntaxNode, Violation};
///
/// pub struct NoPending;
///
/// impl Rule for NoPending {
///     fn name(&self) -> &'static str { "no-pending" }
///     fn code(&self) -> &'static str { "EW100" }
///
///     fn check_node(&self, ctx: &FileContext, node: &SyntaxNode) -> Option<Violation> {
///         match node {
///             SyntaxNode::Block(b) if b.call.method == "xit" => { /* ... */ }
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "example-wording").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "EW001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether [`Rule::autocorrect`] can produce replacements.
    fn is_fixable(&self) -> bool {
        false
    }

    /// Checks a single node and returns a violation if it matches.
    fn check_node(&self, ctx: &FileContext<'_>, node: &SyntaxNode) -> Option<Violation>;

    /// Computes the replacement for a violation this rule reported.
    fn autocorrect(&self, _ctx: &FileContext<'_>, _violation: &Violation) -> Option<Replacement> {
        None
    }

    /// Checks every node of a tree in pre-order.
    fn check(&self, ctx: &FileContext<'_>, root: &SyntaxNode) -> Vec<Violation> {
        root.descendants()
            .filter_map(|node| self.check_node(ctx, node))
            .collect()
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
