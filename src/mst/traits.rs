use super::graph::Graph;
use super::result::SpanningResult;
use super::weight::Weight;
use crate::error::Result;

/// Common interface for minimum spanning tree builders.
pub trait SpanningTreeBuilder<W: Weight> {
    /// Build a minimum spanning tree (or forest, if `graph` is disconnected).
    fn build(&self, graph: &Graph<W>) -> Result<SpanningResult<W>>;

    /// Short algorithm name, for logs and reports.
    fn name(&self) -> &'static str;
}
