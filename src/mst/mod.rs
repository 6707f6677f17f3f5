//! Minimum spanning trees and related queries.
//!
//! All operations are pure functions of their inputs. Each call allocates its own
//! scratch state (disjoint sets, visited and key arrays), so a shared [`Graph`]
//! can be queried from several threads at once.
//!
//! ## Building a tree
//!
//! ### Kruskal
//!
//! Sort the edges by weight and keep every edge that joins two different
//! components. Ties are broken by input order, so output is reproducible.
//! On a disconnected graph the result is a minimum spanning *forest*.
//!
//! ### Prim
//!
//! Grow a single tree from a start vertex, always adding the lightest edge that
//! leaves it. On a disconnected graph only the start vertex's component is
//! spanned. The dense O(V²) frontier and the binary-heap frontier select the same
//! edges in the same order.
//!
//! Both report `connected == false` rather than failing when no spanning tree
//! exists; [`SpanningResult::require_connected`] turns that into an error for
//! callers that need a full tree.
//!
//! ## Queries
//!
//! - [`extend_with_vertex`]: add one vertex and its incident edges to an existing
//!   tree without rebuilding from the whole graph.
//! - [`is_edge_in_some_mst`] / [`mst_membership`]: cut-property membership test,
//!   exact under tied weights.
//! - [`bottleneck_weight`]: the smallest `B` such that edges of weight `<= B`
//!   connect the graph, found by binary search over connectivity probes.
//!
//! ## Usage
//!
//! ```rust
//! use spanning::mst::{bottleneck_weight, is_edge_in_some_mst, kruskal, prim, Edge, Graph};
//!
//! let edges = [(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 3)];
//! let g = Graph::from_tuples(4, &edges).unwrap();
//!
//! let k = kruskal(&g);
//! let p = prim(&g, 0).unwrap();
//! assert_eq!(k.total_weight(), Ok(6));
//! assert_eq!(p.total_weight(), Ok(6));
//! assert!(k.connected() && p.connected());
//!
//! assert!(is_edge_in_some_mst(&g, &Edge::new(1, 2, 2)).unwrap());
//! assert!(!is_edge_in_some_mst(&g, &Edge::new(1, 3, 5)).unwrap());
//! assert_eq!(bottleneck_weight(&g), Some(3));
//! ```

mod bottleneck;
mod graph;
mod incremental;
mod kruskal;
mod membership;
mod prim;
mod result;
mod traits;
mod union_find;
mod weight;

pub use bottleneck::{bottleneck_spanning_tree, bottleneck_weight, is_connected_within};
pub use graph::{Edge, Graph, Neighbor};
pub use incremental::{extend_with_vertex, extend_with_vertices};
pub use kruskal::{kruskal, Kruskal};
pub use membership::{is_edge_in_some_mst, mst_membership};
pub use prim::{prim, Frontier, Prim};
pub use result::{Component, SpanningResult};
pub use traits::SpanningTreeBuilder;
pub use union_find::DisjointSet;
pub use weight::Weight;
