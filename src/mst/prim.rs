//! Prim's algorithm.
//!
//! The tree grows from a start vertex. Every vertex outside the tree records the
//! lightest edge seen so far that connects it to the tree, together with the tree
//! vertex offering it. Each step moves the outside vertex with the lightest
//! recorded edge into the tree and relaxes its neighbours.
//!
//! Selection is deterministic: the lightest candidate wins and ties go to the
//! lowest vertex id. A recorded edge is replaced only by a strictly lighter one,
//! so among equally light offers the first one seen is kept.
//!
//! Two frontiers are available and produce identical edge sequences:
//!
//! - [`Frontier::Dense`] scans all vertices per step: O(V²), no allocation
//!   beyond the per-vertex arrays. Best for dense graphs.
//! - [`Frontier::Heap`] keeps candidates in a binary heap with lazy deletion:
//!   O(E log V). Best for sparse graphs.
//!
//! When no outside vertex has a recorded edge the remaining vertices are
//! unreachable from the start vertex, and the result is a spanning tree of the
//! start vertex's component only (`connected == false`).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use super::graph::{Edge, Graph};
use super::result::SpanningResult;
use super::traits::SpanningTreeBuilder;
use super::weight::Weight;
use crate::error::Result;

/// How Prim's algorithm finds the next vertex to add.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Frontier {
    /// Linear scan over all vertices per step.
    #[default]
    Dense,
    /// Binary heap with lazy deletion of stale entries.
    Heap,
}

/// Prim minimum spanning tree builder.
#[derive(Debug, Clone)]
pub struct Prim {
    start: usize,
    frontier: Frontier,
}

impl Prim {
    /// Create a Prim builder starting at vertex 0 with a dense frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start vertex.
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Set the frontier strategy.
    pub fn with_frontier(mut self, frontier: Frontier) -> Self {
        self.frontier = frontier;
        self
    }
}

impl Default for Prim {
    fn default() -> Self {
        Self {
            start: 0,
            frontier: Frontier::Dense,
        }
    }
}

impl<W: Weight> SpanningTreeBuilder<W> for Prim {
    fn build(&self, graph: &Graph<W>) -> Result<SpanningResult<W>> {
        graph.check_vertex(self.start)?;

        let n = graph.vertex_count();
        let edges = match self.frontier {
            Frontier::Dense => grow_dense(graph, self.start),
            Frontier::Heap => grow_heap(graph, self.start),
        };
        debug!(
            vertices = n,
            start = self.start,
            frontier = ?self.frontier,
            selected = edges.len(),
            connected = edges.len() == n.saturating_sub(1),
            "prim finished"
        );
        Ok(SpanningResult::from_edges(n, edges))
    }

    fn name(&self) -> &'static str {
        "prim"
    }
}

/// Lightest known connection from an outside vertex to the tree.
#[derive(Clone, Copy, Debug)]
struct Offer<W> {
    weight: W,
    from: usize,
}

/// Per-vertex state shared by both frontiers.
struct Tree<W> {
    in_tree: Vec<bool>,
    best: Vec<Option<Offer<W>>>,
    edges: Vec<Edge<W>>,
}

impl<W: Weight> Tree<W> {
    fn new(n: usize) -> Self {
        Self {
            in_tree: vec![false; n],
            best: vec![None; n],
            edges: Vec::with_capacity(n.saturating_sub(1)),
        }
    }

    /// Move `vertex` into the tree, relax its neighbours and report every
    /// improved offer to `improved`.
    fn add(&mut self, graph: &Graph<W>, vertex: usize, mut improved: impl FnMut(usize, W)) {
        self.in_tree[vertex] = true;
        if let Some(offer) = self.best[vertex] {
            trace!(vertex, from = offer.from, weight = ?offer.weight, "prim: add");
            self.edges.push(Edge::new(offer.from, vertex, offer.weight));
        }

        for nb in &graph.adjacency()[vertex] {
            if self.in_tree[nb.vertex] {
                continue;
            }
            let improves = match self.best[nb.vertex] {
                Some(offer) => nb.weight.lighter_than(&offer.weight),
                None => true,
            };
            if improves {
                self.best[nb.vertex] = Some(Offer {
                    weight: nb.weight,
                    from: vertex,
                });
                improved(nb.vertex, nb.weight);
            }
        }
    }
}

fn grow_dense<W: Weight>(graph: &Graph<W>, start: usize) -> Vec<Edge<W>> {
    let n = graph.vertex_count();
    let mut tree = Tree::new(n);
    tree.add(graph, start, |_, _| {});

    for _ in 1..n {
        let mut next: Option<(usize, W)> = None;
        for v in 0..n {
            if tree.in_tree[v] {
                continue;
            }
            let Some(offer) = tree.best[v] else {
                continue;
            };
            match next {
                Some((_, w)) if !offer.weight.lighter_than(&w) => {}
                _ => next = Some((v, offer.weight)),
            }
        }

        let Some((v, _)) = next else {
            trace!("prim: no reachable vertex left");
            break;
        };
        tree.add(graph, v, |_, _| {});
    }
    tree.edges
}

/// Heap entry ordered by weight, then vertex id.
struct Candidate<W> {
    weight: W,
    vertex: usize,
}

impl<W: Weight> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Candidate<W> {}

impl<W: Weight> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp_weight(&other.weight)
            .then(self.vertex.cmp(&other.vertex))
    }
}

fn grow_heap<W: Weight>(graph: &Graph<W>, start: usize) -> Vec<Edge<W>> {
    let n = graph.vertex_count();
    let target = n.saturating_sub(1);
    let mut tree = Tree::new(n);
    let mut heap: BinaryHeap<Reverse<Candidate<W>>> = BinaryHeap::new();

    tree.add(graph, start, |vertex, weight| {
        heap.push(Reverse(Candidate { weight, vertex }))
    });

    while let Some(Reverse(candidate)) = heap.pop() {
        if tree.edges.len() == target {
            break;
        }
        let vertex = candidate.vertex;
        if tree.in_tree[vertex] {
            continue;
        }
        // Superseded by a lighter offer pushed later.
        match tree.best[vertex] {
            Some(offer) if offer.weight.same_weight(&candidate.weight) => {}
            _ => continue,
        }
        tree.add(graph, vertex, |vertex, weight| {
            heap.push(Reverse(Candidate { weight, vertex }))
        });
    }
    tree.edges
}

/// Minimum spanning tree of `graph` by Prim's algorithm, grown from `start`.
///
/// # Errors
///
/// [`Error::InvalidVertex`](crate::Error::InvalidVertex) if `start` is not a vertex of `graph`.
pub fn prim<W: Weight>(graph: &Graph<W>, start: usize) -> Result<SpanningResult<W>> {
    Prim::new().with_start(start).build(graph)
}
