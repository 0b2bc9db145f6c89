use std::collections::{HashMap, HashSet};

use crate::{
    error::{Error, Result},
    solver::{domain::Domain, solution::Assignment, value::ValueEquality},
};

/// Dense index of a registered variable; assigned in registration order.
pub type VariableId = u32;
/// Index of a directed arc in the constraint graph.
pub type ArcId = usize;

/// One directed arc of the constraint graph.
///
/// The relation is materialized when the constraint is declared and never
/// changes afterwards; only domains shrink during solving.
#[derive(Debug, Clone)]
pub(crate) struct ArcRelation<V: ValueEquality> {
    pub(crate) from: VariableId,
    pub(crate) to: VariableId,
    pub(crate) allowed: HashSet<(V, V)>,
}

/// A constraint satisfaction problem under construction: named variables with
/// finite domains plus a directed constraint graph.
///
/// Every logical two-way constraint is stored as two arcs, (i,j) and (j,i),
/// each carrying the set of value pairs it allows. [`Csp::add_constraint`]
/// always populates both, so AC-3 can traverse arcs independently.
///
/// Construction is fail-fast: duplicate variable names and constraints over
/// unregistered variables are rejected here, before any search begins.
#[derive(Debug, Clone)]
pub struct Csp<V: ValueEquality> {
    names: Vec<String>,
    ids: HashMap<String, VariableId>,
    domains: Vec<Domain<V>>,
    arcs: Vec<ArcRelation<V>>,
    arc_index: HashMap<(VariableId, VariableId), ArcId>,
    outgoing: Vec<Vec<ArcId>>,
    incoming: Vec<Vec<ArcId>>,
}

impl<V: ValueEquality> Csp<V> {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            ids: HashMap::new(),
            domains: Vec::new(),
            arcs: Vec::new(),
            arc_index: HashMap::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Registers a new variable with its candidate value set and returns its
    /// id. Registration order is significant: it defines variable ids,
    /// deterministic iteration, and heuristic tie-breaking.
    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        domain: impl IntoIterator<Item = V>,
    ) -> Result<VariableId> {
        let name = name.into();
        if self.ids.contains_key(&name) {
            return Err(Error::DuplicateVariable(name));
        }
        let id = self.names.len() as VariableId;
        self.ids.insert(name.clone(), id);
        self.names.push(name);
        self.domains.push(Domain::new(domain));
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        Ok(id)
    }

    /// Declares a two-way constraint between `i` and `j`.
    ///
    /// The relation for arc (i,j) is the subset of domain(i) × domain(j)
    /// satisfying `predicate`; arc (j,i) gets the swapped predicate. Declaring
    /// a second constraint over the same pair tightens the existing relations
    /// to the conjunction of both predicates.
    pub fn add_constraint<F>(&mut self, i: &str, j: &str, predicate: F) -> Result<()>
    where
        F: Fn(&V, &V) -> bool,
    {
        let i = self.lookup(i)?;
        let j = self.lookup(j)?;
        self.add_arc(i, j, &|a, b| predicate(a, b));
        self.add_arc(j, i, &|a, b| predicate(b, a));
        Ok(())
    }

    /// Imposes pairwise inequality across every pair of distinct variables in
    /// `variables`. For n variables this yields n·(n−1) arcs.
    pub fn add_all_different<S: AsRef<str>>(&mut self, variables: &[S]) -> Result<()> {
        for a in 0..variables.len() {
            for b in (a + 1)..variables.len() {
                self.add_constraint(variables[a].as_ref(), variables[b].as_ref(), |x, y| x != y)?;
            }
        }
        Ok(())
    }

    fn add_arc(&mut self, from: VariableId, to: VariableId, predicate: &dyn Fn(&V, &V) -> bool) {
        match self.arc_index.get(&(from, to)) {
            Some(&arc) => {
                self.arcs[arc].allowed.retain(|(a, b)| predicate(a, b));
            }
            None => {
                let mut allowed = HashSet::new();
                for a in self.domains[from as usize].iter() {
                    for b in self.domains[to as usize].iter() {
                        if predicate(a, b) {
                            allowed.insert((a.clone(), b.clone()));
                        }
                    }
                }
                let arc = self.arcs.len();
                self.arcs.push(ArcRelation { from, to, allowed });
                self.arc_index.insert((from, to), arc);
                self.outgoing[from as usize].push(arc);
                self.incoming[to as usize].push(arc);
            }
        }
    }

    fn lookup(&self, name: &str) -> Result<VariableId> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownVariable(name.to_string()))
    }

    pub fn variable_count(&self) -> usize {
        self.names.len()
    }

    pub fn variable_id(&self, name: &str) -> Option<VariableId> {
        self.ids.get(name).copied()
    }

    pub fn variable_name(&self, id: VariableId) -> &str {
        &self.names[id as usize]
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// All arc ids, in declaration order. Useful as the seed queue for a full
    /// propagation pass.
    pub fn arc_ids(&self) -> std::ops::Range<ArcId> {
        0..self.arcs.len()
    }

    /// The (from, to) variable pair of an arc.
    pub fn arc_endpoints(&self, arc: ArcId) -> (VariableId, VariableId) {
        (self.arcs[arc].from, self.arcs[arc].to)
    }

    /// The arc from `i` to `j`, if such a constraint was declared.
    pub fn arc_between(&self, i: &str, j: &str) -> Option<ArcId> {
        let i = self.ids.get(i)?;
        let j = self.ids.get(j)?;
        self.arc_index.get(&(*i, *j)).copied()
    }

    /// Whether an arc's relation admits the value pair `(a, b)`.
    pub fn relation_allows(&self, arc: ArcId, a: &V, b: &V) -> bool {
        self.arcs[arc].allowed.contains(&(a.clone(), b.clone()))
    }

    pub(crate) fn arc(&self, arc: ArcId) -> &ArcRelation<V> {
        &self.arcs[arc]
    }

    /// Arcs originating from `var`, i.e. every arc (var, k).
    pub fn arcs_from(&self, var: VariableId) -> &[ArcId] {
        &self.outgoing[var as usize]
    }

    /// Arcs pointing into `var`, i.e. every arc (k, var).
    pub fn arcs_into(&self, var: VariableId) -> &[ArcId] {
        &self.incoming[var as usize]
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }

    pub(crate) fn name_index(&self) -> &HashMap<String, VariableId> {
        &self.ids
    }

    /// A fresh search state holding a copy of every initial domain.
    pub fn initial_assignment(&self) -> Assignment<V> {
        Assignment::from_domains(self.domains.iter().cloned().collect())
    }
}

impl<V: ValueEquality> Default for Csp<V> {
    fn default() -> Self {
        Self::new()
    }
}
