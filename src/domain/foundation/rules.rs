//! Cross-field business rules.
//!
//! A record family declares its rules as an enum whose variants are listed
//! in evaluation order. [`check_rules`] runs them in that order against a
//! candidate whose fields already passed their own constraints, and stops
//! at the first rule that does not hold.

use super::RuleViolation;

/// A named invariant over a whole record.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Copy)]
/// enum OrderRule { HasItems }
///
/// impl BusinessRule<Order> for OrderRule {
///     fn name(&self) -> &'static str { "has_items" }
///     fn message(&self) -> &'static str { "Order must have at least one item" }
///     fn holds(&self, order: &Order) -> bool { !order.items.is_empty() }
/// }
///
/// check_rules(&[OrderRule::HasItems], &order)?;
/// ```
pub trait BusinessRule<T: ?Sized> {
    /// Stable machine-readable rule name.
    fn name(&self) -> &'static str;

    /// Human-readable text reported when the rule fails.
    fn message(&self) -> &'static str;

    /// Returns true if the candidate satisfies the rule.
    fn holds(&self, candidate: &T) -> bool;

    /// Evaluates the rule, producing a violation if it does not hold.
    fn check(&self, candidate: &T) -> Result<(), RuleViolation> {
        if self.holds(candidate) {
            Ok(())
        } else {
            Err(RuleViolation::new(self.name(), self.message()))
        }
    }
}

/// Evaluates `rules` in slice order, returning the first violation.
///
/// Rules after the first failing one are not evaluated.
pub fn check_rules<T, R>(rules: &[R], candidate: &T) -> Result<(), RuleViolation>
where
    T: ?Sized,
    R: BusinessRule<T>,
{
    for rule in rules {
        tracing::trace!(rule = rule.name(), "evaluating rule");
        rule.check(candidate)?;
    }
    Ok(())
}
