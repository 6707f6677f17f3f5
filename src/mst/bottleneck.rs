//! Minimum bottleneck spanning tree.
//!
//! The bottleneck value `B` is the smallest weight such that the edges of weight
//! `<= B` connect every vertex. It equals the heaviest edge of any minimum
//! spanning tree.
//!
//! Connectivity is monotone in the threshold (raising it only adds edges), so `B`
//! is found by binary search over the distinct edge weights, running a fresh
//! connectivity probe at each step.
//!
//! # Complexity
//!
//! O(E log E) for the sort plus O(E α(V) log E) for the probes.

use tracing::{debug, trace};

use super::graph::{Edge, Graph};
use super::kruskal;
use super::result::SpanningResult;
use super::union_find::DisjointSet;
use super::weight::Weight;

/// `true` if the edges of weight `<= limit` connect all vertices of `graph`.
pub fn is_connected_within<W: Weight>(graph: &Graph<W>, limit: W) -> bool {
    let mut ds = DisjointSet::new(graph.vertex_count());
    for edge in graph.edges() {
        if !limit.lighter_than(&edge.weight) {
            ds.merge(edge.u, edge.v);
            if ds.component_count() <= 1 {
                break;
            }
        }
    }
    ds.component_count() <= 1
}

/// Minimum bottleneck weight of `graph`.
///
/// Returns `None` if the graph is disconnected, and also for graphs with fewer
/// than two vertices, which need no edge at all.
pub fn bottleneck_weight<W: Weight>(graph: &Graph<W>) -> Option<W> {
    if graph.vertex_count() < 2 {
        return None;
    }

    let mut weights: Vec<W> = graph.edges().iter().map(|e| e.weight).collect();
    weights.sort_by(|a, b| a.cmp_weight(b));
    weights.dedup_by(|a, b| a.same_weight(b));

    let &heaviest = weights.last()?;
    if !is_connected_within(graph, heaviest) {
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "bottleneck: graph is disconnected"
        );
        return None;
    }

    // Invariant: weights[hi] connects; every index below lo does not.
    let (mut lo, mut hi) = (0, weights.len() - 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let connected = is_connected_within(graph, weights[mid]);
        trace!(probe = ?weights[mid], connected, "bottleneck: probe");
        if connected {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        candidates = weights.len(),
        bottleneck = ?weights[hi],
        "bottleneck found"
    );
    Some(weights[hi])
}

/// A spanning tree whose heaviest edge equals [`bottleneck_weight`].
///
/// Built by Kruskal over the edges of weight `<= B`, so it is also a minimum
/// spanning tree. Returns `None` when [`bottleneck_weight`] does.
pub fn bottleneck_spanning_tree<W: Weight>(graph: &Graph<W>) -> Option<SpanningResult<W>> {
    let limit = bottleneck_weight(graph)?;
    let eligible: Vec<Edge<W>> = graph
        .edges()
        .iter()
        .filter(|e| !limit.lighter_than(&e.weight))
        .copied()
        .collect();
    let n = graph.vertex_count();
    Some(SpanningResult::from_edges(n, kruskal::select(n, &eligible)))
}
