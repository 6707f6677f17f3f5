use super::graph::Edge;
use super::union_find::DisjointSet;
use super::weight::{self, Weight};
use crate::error::{Error, Result};

/// Edges selected by a spanning tree algorithm.
///
/// Edge order is the order in which the algorithm selected them. If the input
/// graph is disconnected the result is a spanning forest and [`connected`]
/// is `false`.
///
/// [`connected`]: SpanningResult::connected
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningResult<W> {
    vertex_count: usize,
    edges: Vec<Edge<W>>,
    total_weight: Option<W>,
}

/// One connected component of a spanning forest.
#[derive(Clone, Debug, PartialEq)]
pub struct Component<W> {
    /// Member vertices, ascending.
    pub vertices: Vec<usize>,
    /// Forest edges inside this component, in selection order.
    pub edges: Vec<Edge<W>>,
    /// Sum of `edges` weights.
    pub total_weight: W,
}

impl<W: Weight> SpanningResult<W> {
    pub(crate) fn from_edges(vertex_count: usize, edges: Vec<Edge<W>>) -> Self {
        let total_weight = weight::total(edges.iter().map(|e| e.weight));
        Self {
            vertex_count,
            edges,
            total_weight,
        }
    }

    /// Number of vertices the result spans (connected or not).
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Selected edges in construction order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Consume the result, returning its edges.
    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }

    /// Number of selected edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// `true` if no edge was selected.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// `true` if the edges form a single tree over all vertices
    /// (`len() == vertex_count - 1`; graphs with at most one vertex are trivially connected).
    pub fn connected(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }

    /// Sum of selected edge weights.
    ///
    /// # Errors
    ///
    /// [`Error::WeightOverflow`] if the sum does not fit in `W`. Only integer
    /// weights can overflow; the edges themselves are still valid.
    pub fn total_weight(&self) -> Result<W> {
        self.total_weight.ok_or(Error::WeightOverflow {
            edges: self.edges.len(),
        })
    }

    /// Heaviest selected edge weight, or `None` for an empty result.
    pub fn max_weight(&self) -> Option<W> {
        weight::max(self.edges.iter().map(|e| e.weight))
    }

    /// Number of trees in the forest (`vertex_count - len()`).
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }

    /// Return `self` only if it is a spanning tree.
    ///
    /// # Errors
    ///
    /// [`Error::DisconnectedGraph`] if the result is a forest of more than one tree.
    pub fn require_connected(self) -> Result<Self> {
        if self.connected() {
            Ok(self)
        } else {
            Err(Error::DisconnectedGraph {
                components: self.component_count(),
            })
        }
    }

    /// Split the forest into per-component results, ordered by smallest member vertex.
    ///
    /// # Errors
    ///
    /// [`Error::WeightOverflow`] if a component's total weight does not fit in `W`.
    pub fn components(&self) -> Result<Vec<Component<W>>> {
        let n = self.vertex_count;
        let mut ds = DisjointSet::new(n);
        for edge in &self.edges {
            ds.merge(edge.u, edge.v);
        }

        let mut slot_of_root: Vec<Option<usize>> = vec![None; n];
        let mut out: Vec<Component<W>> = Vec::with_capacity(ds.component_count());
        for vertex in 0..n {
            let root = ds.root(vertex);
            let slot = *slot_of_root[root].get_or_insert_with(|| {
                out.push(Component {
                    vertices: Vec::new(),
                    edges: Vec::new(),
                    total_weight: W::zero(),
                });
                out.len() - 1
            });
            out[slot].vertices.push(vertex);
        }

        for edge in &self.edges {
            let root = ds.root(edge.u);
            if let Some(slot) = slot_of_root[root] {
                let component = &mut out[slot];
                component.total_weight = component
                    .total_weight
                    .checked_add_weight(&edge.weight)
                    .ok_or(Error::WeightOverflow {
                        edges: component.edges.len() + 1,
                    })?;
                component.edges.push(*edge);
            }
        }
        Ok(out)
    }
}
