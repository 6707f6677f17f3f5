//! Immutable undirected weighted graph with edge-list and adjacency views.

use super::union_find::DisjointSet;
use super::weight::Weight;
use crate::error::{Error, Result};

/// An undirected weighted edge `{u, v}`.
///
/// `(u, v, w)` and `(v, u, w)` denote the same edge; [`Edge::connects`] and
/// [`Edge::same_as`] compare endpoints as an unordered pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    /// First endpoint.
    pub u: usize,
    /// Second endpoint.
    pub v: usize,
    /// Edge weight.
    pub weight: W,
}

impl<W: Weight> Edge<W> {
    /// Create an edge between `u` and `v`.
    pub fn new(u: usize, v: usize, weight: W) -> Self {
        Self { u, v, weight }
    }

    /// Both endpoints as a tuple.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.u, self.v)
    }

    /// Endpoints with the smaller id first.
    pub fn normalized(&self) -> (usize, usize) {
        (self.u.min(self.v), self.u.max(self.v))
    }

    /// The endpoint opposite `x`, or `None` if `x` is not an endpoint.
    pub fn other(&self, x: usize) -> Option<usize> {
        if self.u == x {
            Some(self.v)
        } else if self.v == x {
            Some(self.u)
        } else {
            None
        }
    }

    /// `true` if this edge joins `a` and `b` in either orientation.
    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }

    /// `true` if `other` has the same unordered endpoints and an equal weight.
    pub fn same_as(&self, other: &Edge<W>) -> bool {
        self.connects(other.u, other.v) && self.weight.same_weight(&other.weight)
    }
}

impl<W: Weight> From<(usize, usize, W)> for Edge<W> {
    fn from((u, v, weight): (usize, usize, W)) -> Self {
        Self::new(u, v, weight)
    }
}

/// One adjacency entry: the neighbouring vertex, the edge weight, and the index
/// of the originating edge in [`Graph::edges`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<W> {
    /// The vertex at the other end.
    pub vertex: usize,
    /// Weight of the connecting edge.
    pub weight: W,
    /// Index into [`Graph::edges`].
    pub edge: usize,
}

/// An undirected weighted graph over vertices `[0, vertex_count)`.
///
/// The graph is immutable once built. Both views are kept: the edge list in
/// input order (Kruskal, the oracle, the bottleneck solver) and an adjacency
/// list built once from it (Prim). Parallel edges are kept as given.
#[derive(Debug, Clone)]
pub struct Graph<W> {
    vertex_count: usize,
    edges: Vec<Edge<W>>,
    adjacency: Vec<Vec<Neighbor<W>>>,
}

impl<W: Weight> Graph<W> {
    /// Build a graph, validating every endpoint.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVertex`] if an endpoint is `>= vertex_count`,
    /// [`Error::SelfLoop`] if an edge joins a vertex to itself.
    pub fn new(vertex_count: usize, edges: impl IntoIterator<Item = Edge<W>>) -> Result<Self> {
        let edges: Vec<Edge<W>> = edges.into_iter().collect();
        let mut adjacency: Vec<Vec<Neighbor<W>>> = vec![Vec::new(); vertex_count];

        for (i, edge) in edges.iter().enumerate() {
            for x in [edge.u, edge.v] {
                if x >= vertex_count {
                    return Err(Error::invalid_vertex(x, vertex_count));
                }
            }
            if edge.u == edge.v {
                return Err(Error::SelfLoop { vertex: edge.u });
            }
            adjacency[edge.u].push(Neighbor {
                vertex: edge.v,
                weight: edge.weight,
                edge: i,
            });
            adjacency[edge.v].push(Neighbor {
                vertex: edge.u,
                weight: edge.weight,
                edge: i,
            });
        }

        Ok(Self {
            vertex_count,
            edges,
            adjacency,
        })
    }

    /// Build a graph from `(u, v, weight)` tuples.
    pub fn from_tuples(vertex_count: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        Self::new(vertex_count, edges.iter().copied().map(Edge::from))
    }

    /// Build a graph from signed endpoint ids, as scanned from untrusted input.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVertex`] for negative ids as well as ids `>= vertex_count`.
    pub fn from_signed(vertex_count: usize, edges: &[(i64, i64, W)]) -> Result<Self> {
        let to_index = |x: i64| {
            usize::try_from(x).map_err(|_| Error::InvalidVertex {
                vertex: x,
                vertex_count,
            })
        };
        let edges = edges
            .iter()
            .map(|&(u, v, w)| -> Result<Edge<W>> {
                Ok(Edge::new(to_index(u)?, to_index(v)?, w))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(vertex_count, edges)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges (parallel edges counted separately).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge list in input order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// The edge at input position `i`.
    pub fn edge(&self, i: usize) -> Option<&Edge<W>> {
        self.edges.get(i)
    }

    /// Neighbours of `vertex`, in edge input order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVertex`] if `vertex >= vertex_count`.
    pub fn neighbors(&self, vertex: usize) -> Result<&[Neighbor<W>]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::invalid_vertex(vertex, self.vertex_count))
    }

    pub(crate) fn adjacency(&self) -> &[Vec<Neighbor<W>>] {
        &self.adjacency
    }

    /// Validate a vertex id against this graph.
    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(Error::invalid_vertex(vertex, self.vertex_count))
        }
    }

    /// Number of connected components (isolated vertices count as one each).
    pub fn component_count(&self) -> usize {
        let mut ds = DisjointSet::new(self.vertex_count);
        for edge in &self.edges {
            ds.merge(edge.u, edge.v);
        }
        ds.component_count()
    }

    /// `true` if every vertex is reachable from every other.
    pub fn is_connected(&self) -> bool {
        self.component_count() <= 1
    }

    /// A copy of this graph with one more vertex (id `vertex_count`) and the
    /// given incident edges appended after the existing ones.
    pub fn with_vertex(&self, incident: &[Edge<W>]) -> Result<Self> {
        Self::new(
            self.vertex_count + 1,
            self.edges.iter().chain(incident.iter()).copied(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph<i32> {
        Graph::from_tuples(4, &[(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 3)]).unwrap()
    }

    #[test]
    fn builds_both_views() {
        let g = diamond();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 5);

        let n1: Vec<(usize, i32, usize)> = g
            .neighbors(1)
            .unwrap()
            .iter()
            .map(|n| (n.vertex, n.weight, n.edge))
            .collect();
        assert_eq!(n1, vec![(0, 1, 0), (2, 2, 2), (3, 5, 3)]);
    }

    #[test]
    fn rejects_out_of_range_endpoint() {
        let err = Graph::from_tuples(3, &[(0, 3, 1)]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidVertex {
                vertex: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn rejects_negative_endpoint() {
        let err = Graph::from_signed(3, &[(0, 1, 1), (-1, 2, 1)]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidVertex {
                vertex: -1,
                vertex_count: 3
            }
        );
        assert!(Graph::from_signed(3, &[(0, 2, 1)]).is_ok());
    }

    #[test]
    fn rejects_self_loop() {
        let err = Graph::from_tuples(2, &[(1, 1, 0)]).unwrap_err();
        assert_eq!(err, Error::SelfLoop { vertex: 1 });
    }

    #[test]
    fn neighbors_out_of_range() {
        assert!(diamond().neighbors(4).is_err());
    }

    #[test]
    fn parallel_edges_are_kept() {
        let g = Graph::from_tuples(2, &[(0, 1, 3), (1, 0, 1)]).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(0).unwrap().len(), 2);
    }

    #[test]
    fn components() {
        assert_eq!(diamond().component_count(), 1);
        assert!(diamond().is_connected());

        let g = Graph::from_tuples(5, &[(0, 1, 1), (2, 3, 2)]).unwrap();
        assert_eq!(g.component_count(), 3);
        assert!(!g.is_connected());

        let empty: Graph<i32> = Graph::new(0, []).unwrap();
        assert!(empty.is_connected());
    }

    #[test]
    fn edge_helpers() {
        let e = Edge::new(3, 1, 2.5f64);
        assert_eq!(e.normalized(), (1, 3));
        assert_eq!(e.other(3), Some(1));
        assert_eq!(e.other(2), None);
        assert!(e.connects(1, 3));
        assert!(e.same_as(&Edge::new(1, 3, 2.5)));
        assert!(!e.same_as(&Edge::new(1, 3, 2.0)));
    }

    #[test]
    fn with_vertex_appends() {
        let g = diamond().with_vertex(&[Edge::new(4, 0, 7)]).unwrap();
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge(5), Some(&Edge::new(4, 0, 7)));
    }
}
