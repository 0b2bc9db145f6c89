use std::time::Instant;

use tracing::{debug, trace};

use crate::solver::{
    csp::{ArcId, ArcRelation, Csp},
    domain::Domain,
    solution::Assignment,
    stats::SearchStats,
    value::ValueEquality,
    work_list::WorkList,
};

/// The result of one propagation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Every arc is consistent; domains have been pruned in place.
    Consistent,
    /// Some domain was emptied: no completion of this assignment can satisfy
    /// all constraints.
    Inconsistent,
}

/// Enforces arc consistency (AC-3) over `assignment`, seeded with `seeds`.
///
/// Arcs are revised in FIFO order. Whenever revising arc (i,j) removes values
/// from domain(i), every arc pointing into i is re-enqueued so the reduced
/// domain is rechecked against its other constraints; when the queue empties,
/// no further pruning is possible. Revision order affects how much work is
/// done, not the final domains.
///
/// Returns [`Propagation::Inconsistent`] as soon as a domain becomes empty.
pub fn enforce_arc_consistency<V: ValueEquality>(
    csp: &Csp<V>,
    assignment: &mut Assignment<V>,
    seeds: impl IntoIterator<Item = ArcId>,
    stats: &mut SearchStats,
) -> Propagation {
    let mut worklist = WorkList::new();
    for arc in seeds {
        worklist.push_back(arc);
    }

    while let Some(arc_id) = worklist.pop_front() {
        let arc = csp.arc(arc_id);

        let start = Instant::now();
        let revised = revise(arc, assignment);
        let elapsed = start.elapsed().as_micros() as u64;

        let arc_stats = stats.arc_stats.entry(arc_id).or_default();
        arc_stats.revisions += 1;
        arc_stats.time_spent_micros += elapsed;

        if let Some(pruned) = revised {
            arc_stats.prunings += 1;
            trace!(
                from = csp.variable_name(arc.from),
                to = csp.variable_name(arc.to),
                remaining = pruned.len(),
                "revised domain"
            );

            if pruned.is_empty() {
                debug!(
                    variable = csp.variable_name(arc.from),
                    "domain emptied, propagation failed"
                );
                return Propagation::Inconsistent;
            }

            let target = arc.from;
            assignment.set_domain(target, pruned);
            for &incoming in csp.arcs_into(target) {
                worklist.push_back(incoming);
            }
        }
    }

    Propagation::Consistent
}

/// Keeps each value x of domain(from) only if some y in domain(to) makes
/// (x, y) an allowed pair of the arc. Returns the reduced domain if anything
/// was removed.
fn revise<V: ValueEquality>(
    arc: &ArcRelation<V>,
    assignment: &Assignment<V>,
) -> Option<Domain<V>> {
    let from = assignment.domain(arc.from);
    let to = assignment.domain(arc.to);

    let kept = from.retain(|x| {
        to.iter()
            .any(|y| arc.allowed.contains(&(x.clone(), y.clone())))
    });

    (kept.len() < from.len()).then_some(kept)
}
