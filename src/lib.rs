//! Minimum spanning trees on undirected weighted graphs.
//!
//! `spanning` is a small library for building and querying minimum spanning trees.
//!
//! The primary public API is under [`mst`], which provides:
//! - Kruskal and Prim builders (spanning forests for disconnected input)
//! - incremental extension of an existing tree by one new vertex
//! - an edge membership oracle ("is this edge in *some* MST?")
//! - the minimum bottleneck weight via binary search over connectivity probes

#![forbid(unsafe_code)]

pub mod error;
pub mod mst;

pub use error::{Error, Result};
pub use mst::{
    bottleneck_spanning_tree, bottleneck_weight, extend_with_vertex, extend_with_vertices,
    is_connected_within, is_edge_in_some_mst, kruskal, mst_membership, prim, Component,
    DisjointSet, Edge, Frontier, Graph, Kruskal, Neighbor, Prim, SpanningResult,
    SpanningTreeBuilder, Weight,
};
