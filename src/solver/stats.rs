use std::collections::HashMap;

use prettytable::{Cell, Row, Table};
use serde::Serialize;

use crate::solver::{
    csp::{ArcId, Csp},
    value::ValueEquality,
};

/// Counters accumulated across one whole search, returned alongside the
/// outcome rather than kept in any global state.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Total recursive calls made by the backtracking driver.
    pub nodes_visited: u64,
    /// Branches abandoned after every candidate value failed.
    pub backtracks: u64,
    /// Per-arc revision counters, keyed by arc id.
    pub arc_stats: HashMap<ArcId, ArcStats>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ArcStats {
    pub revisions: u64,
    pub prunings: u64,
    pub time_spent_micros: u64,
}

impl SearchStats {
    pub fn total_revisions(&self) -> u64 {
        self.arc_stats.values().map(|s| s.revisions).sum()
    }

    pub fn total_prunings(&self) -> u64 {
        self.arc_stats.values().map(|s| s.prunings).sum()
    }
}

/// Renders the per-arc revision counters as a text table, most expensive arcs
/// last.
pub fn render_stats_table<V: ValueEquality>(stats: &SearchStats, csp: &Csp<V>) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Arc"),
        Cell::new("Revisions"),
        Cell::new("Prunings"),
        Cell::new("Time / Call (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ArcId, &ArcStats)> = stats.arc_stats.iter().collect();
    sorted_stats.sort_by_key(|(_, s)| s.time_spent_micros);

    for (arc_id, arc_stats) in sorted_stats {
        let (from, to) = csp.arc_endpoints(*arc_id);
        let avg_time = if arc_stats.revisions > 0 {
            arc_stats.time_spent_micros as f64 / arc_stats.revisions as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&format!(
                "{} -> {}",
                csp.variable_name(from),
                csp.variable_name(to)
            )),
            Cell::new(&arc_stats.revisions.to_string()),
            Cell::new(&arc_stats.prunings.to_string()),
            Cell::new(&format!("{avg_time:.2}")),
            Cell::new(&format!(
                "{:.2}",
                arc_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}
