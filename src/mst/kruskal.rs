//! Kruskal's algorithm.
//!
//! Edges are scanned in ascending weight order and kept whenever they join two
//! different components of a [`DisjointSet`]. The scan stops once `V - 1` edges
//! are selected or the edge list runs out; in the latter case the result is a
//! minimum spanning forest.
//!
//! Ties are broken by input position: the order comes from a stable sort, so the
//! same graph always yields the same edge sequence.
//!
//! # Complexity
//!
//! O(E log E) for the sort plus O(E α(V)) for the union-find scan.

use tracing::{debug, trace};

use super::graph::{Edge, Graph};
use super::result::SpanningResult;
use super::traits::SpanningTreeBuilder;
use super::union_find::DisjointSet;
use super::weight::Weight;
use crate::error::Result;

/// Kruskal minimum spanning tree builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl Kruskal {
    /// Create a Kruskal builder.
    pub fn new() -> Self {
        Self
    }
}

impl<W: Weight> SpanningTreeBuilder<W> for Kruskal {
    fn build(&self, graph: &Graph<W>) -> Result<SpanningResult<W>> {
        Ok(kruskal(graph))
    }

    fn name(&self) -> &'static str {
        "kruskal"
    }
}

/// Edge indices ordered by weight, ties kept in input order.
pub(crate) fn sorted_order<W: Weight>(edges: &[Edge<W>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..edges.len()).collect();
    // `sort_by` is stable.
    order.sort_by(|&a, &b| edges[a].weight.cmp_weight(&edges[b].weight));
    order
}

/// Run the Kruskal scan over `edges` (endpoints must lie in `[0, n)`).
pub(crate) fn select<W: Weight>(n: usize, edges: &[Edge<W>]) -> Vec<Edge<W>> {
    let target = n.saturating_sub(1);
    let mut ds = DisjointSet::new(n);
    let mut selected = Vec::with_capacity(target);

    for i in sorted_order(edges) {
        if selected.len() == target {
            break;
        }
        let edge = edges[i];
        if ds.merge(edge.u, edge.v) {
            trace!(u = edge.u, v = edge.v, weight = ?edge.weight, "kruskal: accept");
            selected.push(edge);
        } else {
            trace!(u = edge.u, v = edge.v, weight = ?edge.weight, "kruskal: cycle");
        }
    }
    selected
}

/// Minimum spanning tree (or forest) of `graph` by Kruskal's algorithm.
pub fn kruskal<W: Weight>(graph: &Graph<W>) -> SpanningResult<W> {
    let n = graph.vertex_count();
    let edges = select(n, graph.edges());
    debug!(
        vertices = n,
        edges = graph.edge_count(),
        selected = edges.len(),
        connected = edges.len() == n.saturating_sub(1),
        "kruskal finished"
    );
    SpanningResult::from_edges(n, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn diamond() -> Graph<i32> {
        Graph::from_tuples(4, &[(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 3)]).unwrap()
    }

    #[test]
    fn selects_lightest_acyclic_edges() {
        let r = kruskal(&diamond());
        assert_eq!(
            r.edges(),
            &[Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(2, 3, 3)]
        );
        assert_eq!(r.total_weight(), Ok(6));
        assert!(r.connected());
    }

    #[test]
    fn builder_matches_free_function() {
        let g = diamond();
        let built = Kruskal::new().build(&g).unwrap();
        assert_eq!(built, kruskal(&g));
        assert_eq!(SpanningTreeBuilder::<i32>::name(&Kruskal::new()), "kruskal");
    }

    #[test]
    fn ties_follow_input_order() {
        // Triangle with equal weights: the first two input edges win.
        let g = Graph::from_tuples(3, &[(1, 2, 7), (0, 2, 7), (0, 1, 7)]).unwrap();
        let r = kruskal(&g);
        assert_eq!(r.edges(), &[Edge::new(1, 2, 7), Edge::new(0, 2, 7)]);

        let g = Graph::from_tuples(3, &[(0, 1, 7), (0, 2, 7), (1, 2, 7)]).unwrap();
        let r = kruskal(&g);
        assert_eq!(r.edges(), &[Edge::new(0, 1, 7), Edge::new(0, 2, 7)]);
    }

    #[test]
    fn disconnected_graph_gives_forest() {
        let g = Graph::from_tuples(4, &[(0, 1, 1), (2, 3, 2)]).unwrap();
        let r = kruskal(&g);
        assert_eq!(r.len(), 2);
        assert!(!r.connected());
        assert_eq!(r.component_count(), 2);
    }

    #[test]
    fn parallel_edges_keep_lightest() {
        let g = Graph::from_tuples(2, &[(0, 1, 9), (1, 0, 3)]).unwrap();
        let r = kruskal(&g);
        assert_eq!(r.edges(), &[Edge::new(1, 0, 3)]);
    }

    #[test]
    fn float_weights() {
        let g = Graph::from_tuples(3, &[(0, 1, 0.5), (1, 2, -1.25), (0, 2, 0.25)]).unwrap();
        let r = kruskal(&g);
        assert_eq!(r.edges(), &[Edge::new(1, 2, -1.25), Edge::new(0, 2, 0.25)]);
        assert_eq!(r.total_weight(), Ok(-1.0));
    }

    #[test]
    fn narrow_weight_total_overflows_without_panic() {
        let g = Graph::<u8>::from_tuples(3, &[(0, 1, 200), (1, 2, 100)]).unwrap();
        let r = kruskal(&g);
        assert_eq!(r.edges(), &[Edge::new(1, 2, 100), Edge::new(0, 1, 200)]);
        assert!(r.connected());
        assert_eq!(r.total_weight(), Err(Error::WeightOverflow { edges: 2 }));
    }

    #[test]
    fn trivial_graphs() {
        let empty: Graph<u32> = Graph::new(0, []).unwrap();
        assert!(kruskal(&empty).connected());
        assert!(kruskal(&empty).is_empty());

        let single: Graph<u32> = Graph::new(1, []).unwrap();
        assert!(kruskal(&single).connected());
    }
}
