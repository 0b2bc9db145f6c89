use crate::solver::{domain::Domain, value::ValueEquality};

/// A trait for strategies that determine the order in which a variable's
/// remaining values are tried.
pub trait ValueOrderingHeuristic<V: ValueEquality> {
    /// Returns the values of `domain` in the order they should be attempted.
    fn order_values(&self, domain: &Domain<V>) -> Vec<V>;
}

/// Tries values in registration order, i.e. the order the domain was built
/// in. This is the deterministic default.
pub struct IdentityValueOrdering;

impl<V: ValueEquality> ValueOrderingHeuristic<V> for IdentityValueOrdering {
    fn order_values(&self, domain: &Domain<V>) -> Vec<V> {
        domain.iter().cloned().collect()
    }
}
