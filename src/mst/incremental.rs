//! Extending an existing minimum spanning tree by one vertex.
//!
//! The new vertex gets id `V` (the existing result spans `[0, V)`). Its candidate
//! edges are processed in ascending weight order (ties in input order):
//!
//! - A candidate whose far endpoint lies in a component the new vertex has not
//!   reached yet is appended. The first such candidate is always the cheapest
//!   edge from the new vertex into the existing forest.
//! - A candidate that would close a cycle replaces the heaviest edge on that
//!   cycle if it is strictly lighter, and is dropped otherwise.
//!
//! Component membership comes from a [`DisjointSet`] over the existing edges,
//! never from comparing vertex ids, so vertices may have been added in any order.
//! Exchanges never change the partition, so the set stays valid throughout.
//!
//! If the existing result is a minimum spanning forest of the old graph, the
//! output is a minimum spanning forest of the old graph plus the new vertex and
//! its candidates. Only the `V - c` old forest edges and the candidates are
//! examined; the old graph is not needed.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::graph::Edge;
use super::kruskal::sorted_order;
use super::result::SpanningResult;
use super::union_find::DisjointSet;
use super::weight::Weight;
use crate::error::{Error, Result};

/// Add vertex `existing.vertex_count()` with the given incident edges.
///
/// Returns a new result; `existing` is left untouched. Kept edges stay in their
/// original order, followed by the attached candidates in the order they joined.
///
/// Candidates are plain edges. When the incident edges come as a [`Graph`] over
/// `existing.vertex_count() + 1` vertices, pass `graph.edges()`.
///
/// [`Graph`]: crate::mst::Graph
///
/// # Errors
///
/// - [`Error::InvalidVertex`] if an endpoint exceeds the new vertex id.
/// - [`Error::SelfLoop`] for an edge from the new vertex to itself.
/// - [`Error::NotIncident`] for an edge that does not touch the new vertex.
pub fn extend_with_vertex<W: Weight>(
    existing: &SpanningResult<W>,
    candidates: &[Edge<W>],
) -> Result<SpanningResult<W>> {
    let new_vertex = existing.vertex_count();
    let n = new_vertex + 1;

    let mut far_ends = Vec::with_capacity(candidates.len());
    for edge in candidates {
        for x in [edge.u, edge.v] {
            if x >= n {
                return Err(Error::invalid_vertex(x, n));
            }
        }
        if edge.u == edge.v {
            return Err(Error::SelfLoop { vertex: edge.u });
        }
        let far = edge.other(new_vertex).ok_or(Error::NotIncident {
            u: edge.u,
            v: edge.v,
            vertex: new_vertex,
        })?;
        far_ends.push(far);
    }

    let mut ds = DisjointSet::new(n);
    for edge in existing.edges() {
        ds.merge(edge.u, edge.v);
    }

    let mut slots: Vec<Option<Edge<W>>> = existing.edges().iter().copied().map(Some).collect();
    let mut attached = 0usize;
    let mut exchanged = 0usize;

    for i in sorted_order(candidates) {
        let edge = candidates[i];
        let far = far_ends[i];

        if ds.merge(new_vertex, far) {
            trace!(vertex = new_vertex, to = far, weight = ?edge.weight, "extend: attach");
            slots.push(Some(edge));
            attached += 1;
            continue;
        }

        let Some(heaviest) = heaviest_on_path(&slots, n, new_vertex, far) else {
            continue;
        };
        let Some(old) = slots[heaviest] else {
            continue;
        };
        if edge.weight.lighter_than(&old.weight) {
            trace!(
                removed_u = old.u,
                removed_v = old.v,
                removed_weight = ?old.weight,
                to = far,
                weight = ?edge.weight,
                "extend: exchange"
            );
            slots[heaviest] = None;
            slots.push(Some(edge));
            exchanged += 1;
        }
    }

    let edges: Vec<Edge<W>> = slots.into_iter().flatten().collect();
    debug!(
        vertex = new_vertex,
        candidates = candidates.len(),
        attached,
        exchanged,
        connected = edges.len() == n - 1,
        "extend finished"
    );
    Ok(SpanningResult::from_edges(n, edges))
}

/// Add several vertices in turn; `batches[k]` holds the incident edges of
/// vertex `existing.vertex_count() + k`.
pub fn extend_with_vertices<W, I>(
    existing: &SpanningResult<W>,
    batches: I,
) -> Result<SpanningResult<W>>
where
    W: Weight,
    I: IntoIterator,
    I::Item: AsRef<[Edge<W>]>,
{
    let mut current = existing.clone();
    for batch in batches {
        current = extend_with_vertex(&current, batch.as_ref())?;
    }
    Ok(current)
}

/// Slot index of the heaviest edge on the forest path from `from` to `to`.
///
/// Ties keep the edge nearest `to`. Returns `None` if no path exists.
fn heaviest_on_path<W: Weight>(
    slots: &[Option<Edge<W>>],
    n: usize,
    from: usize,
    to: usize,
) -> Option<usize> {
    let mut adjacency: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
    for (slot, edge) in slots.iter().enumerate() {
        if let Some(edge) = edge {
            adjacency[edge.u].push((edge.v, slot));
            adjacency[edge.v].push((edge.u, slot));
        }
    }

    // Parent link per vertex: (previous vertex, slot of the connecting edge).
    let mut parent: Vec<Option<(usize, usize)>> = vec![None; n];
    let mut seen = vec![false; n];
    let mut queue = VecDeque::from([from]);
    seen[from] = true;
    while let Some(x) = queue.pop_front() {
        if x == to {
            break;
        }
        for &(y, slot) in &adjacency[x] {
            if !seen[y] {
                seen[y] = true;
                parent[y] = Some((x, slot));
                queue.push_back(y);
            }
        }
    }
    if !seen[to] {
        return None;
    }

    let mut best: Option<(usize, W)> = None;
    let mut x = to;
    while let Some((prev, slot)) = parent[x] {
        let w = slots[slot].as_ref()?.weight;
        match best {
            Some((_, bw)) if !bw.lighter_than(&w) => {}
            _ => best = Some((slot, w)),
        }
        x = prev;
    }
    best.map(|(slot, _)| slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mst::graph::Graph;
    use crate::mst::kruskal::kruskal;

    fn path_tree() -> SpanningResult<i32> {
        kruskal(&Graph::from_tuples(3, &[(0, 1, 1), (1, 2, 2)]).unwrap())
    }

    #[test]
    fn attaches_cheapest_edge() {
        let candidates = [Edge::new(0, 3, 4), Edge::new(1, 3, 3), Edge::new(2, 3, 6)];
        let r = extend_with_vertex(&path_tree(), &candidates).unwrap();
        assert_eq!(
            r.edges(),
            &[Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(1, 3, 3)]
        );
        assert_eq!(r.vertex_count(), 4);
        assert_eq!(r.total_weight(), Ok(6));
        assert!(r.connected());
    }

    #[test]
    fn existing_result_is_not_mutated() {
        let tree = path_tree();
        let before = tree.clone();
        extend_with_vertex(&tree, &[Edge::new(3, 0, 1)]).unwrap();
        assert_eq!(tree, before);
    }

    #[test]
    fn no_candidates_leaves_vertex_isolated() {
        let r = extend_with_vertex(&path_tree(), &[]).unwrap();
        assert_eq!(r.len(), 2);
        assert!(!r.connected());
        assert_eq!(r.component_count(), 2);
    }

    #[test]
    fn replaces_heavier_cycle_edge() {
        let tree = kruskal(&Graph::from_tuples(2, &[(0, 1, 10)]).unwrap());
        let r = extend_with_vertex(&tree, &[Edge::new(2, 0, 1), Edge::new(2, 1, 1)]).unwrap();
        assert_eq!(r.edges(), &[Edge::new(2, 0, 1), Edge::new(2, 1, 1)]);
        assert_eq!(r.total_weight(), Ok(2));
    }

    #[test]
    fn equal_weight_does_not_exchange() {
        let tree = kruskal(&Graph::from_tuples(2, &[(0, 1, 5)]).unwrap());
        let r = extend_with_vertex(&tree, &[Edge::new(2, 0, 1), Edge::new(2, 1, 5)]).unwrap();
        assert_eq!(r.edges(), &[Edge::new(0, 1, 5), Edge::new(2, 0, 1)]);
    }

    #[test]
    fn joins_forest_components() {
        let forest = kruskal(&Graph::from_tuples(4, &[(0, 1, 1), (2, 3, 2)]).unwrap());
        assert!(!forest.connected());

        let r = extend_with_vertex(&forest, &[Edge::new(4, 3, 6), Edge::new(0, 4, 5)]).unwrap();
        assert!(r.connected());
        assert_eq!(r.total_weight(), Ok(14));
        assert_eq!(r.edges()[2], Edge::new(0, 4, 5));
    }

    #[test]
    fn membership_does_not_depend_on_vertex_ids() {
        // Vertex 0 is isolated in the existing forest; the lightest candidate
        // still attaches to it rather than being filtered by id.
        let forest = kruskal(&Graph::from_tuples(3, &[(1, 2, 4)]).unwrap());
        let r = extend_with_vertex(&forest, &[Edge::new(3, 2, 3), Edge::new(3, 0, 1)]).unwrap();
        assert_eq!(
            r.edges(),
            &[Edge::new(1, 2, 4), Edge::new(3, 0, 1), Edge::new(3, 2, 3)]
        );
        assert!(r.connected());
    }

    #[test]
    fn matches_full_rebuild() {
        let g = Graph::from_tuples(
            5,
            &[(0, 1, 4), (1, 2, 8), (2, 3, 7), (3, 4, 9), (0, 4, 10), (1, 3, 2)],
        )
        .unwrap();
        let incident = [Edge::new(5, 2, 1), Edge::new(5, 4, 3), Edge::new(0, 5, 6)];
        let extended = extend_with_vertex(&kruskal(&g), &incident).unwrap();
        let rebuilt = kruskal(&g.with_vertex(&incident).unwrap());
        assert_eq!(extended.total_weight(), rebuilt.total_weight());
        assert!(extended.connected());
    }

    #[test]
    fn candidates_from_graph() {
        let incident = Graph::from_tuples(4, &[(0, 3, 4), (3, 1, 3), (2, 3, 6)]).unwrap();
        let r = extend_with_vertex(&path_tree(), incident.edges()).unwrap();
        assert_eq!(r.edges()[2], Edge::new(3, 1, 3));
        assert_eq!(r.total_weight(), Ok(6));
    }

    #[test]
    fn several_vertices() {
        let batches = vec![
            vec![Edge::new(3, 2, 1)],
            vec![Edge::new(4, 3, 2), Edge::new(4, 0, 9)],
        ];
        let r = extend_with_vertices(&path_tree(), &batches).unwrap();
        assert_eq!(r.vertex_count(), 5);
        assert_eq!(r.total_weight(), Ok(6));
        assert!(r.connected());
    }

    #[test]
    fn rejects_bad_candidates() {
        let tree = path_tree();
        assert_eq!(
            extend_with_vertex(&tree, &[Edge::new(3, 4, 1)]).unwrap_err(),
            Error::InvalidVertex {
                vertex: 4,
                vertex_count: 4
            }
        );
        assert_eq!(
            extend_with_vertex(&tree, &[Edge::new(0, 2, 1)]).unwrap_err(),
            Error::NotIncident {
                u: 0,
                v: 2,
                vertex: 3
            }
        );
        assert_eq!(
            extend_with_vertex(&tree, &[Edge::new(3, 3, 1)]).unwrap_err(),
            Error::SelfLoop { vertex: 3 }
        );
    }
}
