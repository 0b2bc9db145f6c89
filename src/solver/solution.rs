use std::collections::HashMap;

use im::Vector;

use crate::solver::{
    csp::{Csp, VariableId},
    domain::Domain,
    value::ValueEquality,
};

/// The mutable state of one search branch: the current domain of every
/// variable, indexed by [`VariableId`].
///
/// Cloning is cheap: the backing vector is persistent, so a clone is a
/// structural share. Each branch of the search works on its own clone, which
/// is what keeps sibling branches isolated from each other's pruning.
#[derive(Clone, Debug)]
pub struct Assignment<V: ValueEquality> {
    domains: Vector<Domain<V>>,
}

impl<V: ValueEquality> Assignment<V> {
    pub(crate) fn from_domains(domains: Vector<Domain<V>>) -> Self {
        Self { domains }
    }

    pub fn variable_count(&self) -> usize {
        self.domains.len()
    }

    pub fn domain(&self, var: VariableId) -> &Domain<V> {
        &self.domains[var as usize]
    }

    pub fn set_domain(&mut self, var: VariableId, domain: Domain<V>) {
        self.domains = self.domains.update(var as usize, domain);
    }

    /// Fixes a variable to a single value.
    pub fn fix(&mut self, var: VariableId, value: V) {
        self.set_domain(var, Domain::singleton(value));
    }

    /// Complete when every domain has exactly one element.
    pub fn is_complete(&self) -> bool {
        self.domains.iter().all(Domain::is_singleton)
    }

    pub fn has_empty_domain(&self) -> bool {
        self.domains.iter().any(Domain::is_empty)
    }

    /// Iterates domains in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &Domain<V>)> {
        self.domains
            .iter()
            .enumerate()
            .map(|(id, domain)| (id as VariableId, domain))
    }
}

/// A complete assignment: every variable mapped to exactly one value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<V: ValueEquality> {
    names: Vec<String>,
    index: HashMap<String, VariableId>,
    values: Vec<V>,
}

impl<V: ValueEquality> Solution<V> {
    pub(crate) fn from_assignment(csp: &Csp<V>, assignment: &Assignment<V>) -> Self {
        let values = (0..csp.variable_count())
            .map(|id| {
                assignment
                    .domain(id as VariableId)
                    .singleton_value()
                    .cloned()
                    .expect("solutions are only built from complete assignments")
            })
            .collect();
        Self {
            names: csp.names().to_vec(),
            index: csp.name_index().clone(),
            values,
        }
    }

    /// The assigned value of a variable, looked up by name.
    pub fn value(&self, name: &str) -> Option<&V> {
        self.index.get(name).map(|&id| &self.values[id as usize])
    }

    /// Iterates (name, value) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
