//! Edge membership oracle: is an edge part of *some* minimum spanning tree?
//!
//! By the cut property, an edge `{u, v}` of weight `w` belongs to some MST iff
//! `u` and `v` are still in different components after every edge of weight
//! strictly below `w` has been merged. Edges of equal weight must not be merged
//! against each other before the test, or the answer would depend on tie order.
//!
//! [`mst_membership`] answers for every edge at once by processing weight
//! batches: test each edge of a batch against the partition built from lighter
//! batches, then merge the whole batch. A single query only needs the lighter
//! edges, which is what [`is_edge_in_some_mst`] does.
//!
//! An edge with no lighter path between its endpoints (a bridge below its
//! weight) is always included.

use tracing::{debug, trace};

use super::graph::{Edge, Graph};
use super::kruskal::sorted_order;
use super::union_find::DisjointSet;
use super::weight::Weight;
use crate::error::{Error, Result};

/// `true` if `edge` belongs to at least one minimum spanning tree (or forest) of `graph`.
///
/// The query matches a graph edge with the same unordered endpoints and an
/// equal weight.
///
/// # Errors
///
/// [`Error::EdgeNotFound`] if `graph` has no such edge.
pub fn is_edge_in_some_mst<W: Weight>(graph: &Graph<W>, edge: &Edge<W>) -> Result<bool> {
    if !graph.edges().iter().any(|e| e.same_as(edge)) {
        return Err(Error::EdgeNotFound {
            u: edge.u,
            v: edge.v,
            weight: format!("{:?}", edge.weight),
        });
    }

    let mut ds = DisjointSet::new(graph.vertex_count());
    for e in graph.edges() {
        if e.weight.lighter_than(&edge.weight) {
            ds.merge(e.u, e.v);
        }
    }
    let included = !ds.same(edge.u, edge.v);
    debug!(
        u = edge.u,
        v = edge.v,
        weight = ?edge.weight,
        included,
        "membership query"
    );
    Ok(included)
}

/// For every edge of `graph` (input order), whether it belongs to some MST.
pub fn mst_membership<W: Weight>(graph: &Graph<W>) -> Vec<bool> {
    let edges = graph.edges();
    let order = sorted_order(edges);
    let mut ds = DisjointSet::new(graph.vertex_count());
    let mut member = vec![false; edges.len()];

    let mut start = 0;
    while start < order.len() {
        let weight = edges[order[start]].weight;
        let mut end = start + 1;
        while end < order.len() && edges[order[end]].weight.same_weight(&weight) {
            end += 1;
        }
        let batch = &order[start..end];

        for &i in batch {
            member[i] = !ds.same(edges[i].u, edges[i].v);
        }
        for &i in batch {
            ds.merge(edges[i].u, edges[i].v);
        }
        trace!(weight = ?weight, size = batch.len(), "membership: batch");
        start = end;
    }

    debug!(
        edges = edges.len(),
        members = member.iter().filter(|&&m| m).count(),
        "membership classified"
    );
    member
}
