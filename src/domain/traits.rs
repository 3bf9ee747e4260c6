use crate::domain::graph::{Graph, SccResult};

/// Extension points called by [`DfsEngine`](crate::domain::dfs::DfsEngine) during a walk.
///
/// Every hook defaults to a no-op, so a visitor only implements the ones it needs.
/// Hooks receive the graph being walked so they can record traversal metadata on
/// its vertices.
pub trait DfsVisitor {
    /// Called on discovery, before `v` is marked.
    fn pre_visit(&mut self, _graph: &mut Graph, _v: usize) {}

    /// Called once every neighbor of `v` has been handled.
    fn post_visit(&mut self, _graph: &mut Graph, _v: usize) {}

    /// Neighbor `w` of `v` was already marked: a back, forward or cross edge.
    fn on_marked(&mut self, _graph: &mut Graph, _v: usize, _w: usize) {}

    /// Neighbor `w` of `v` is unmarked: a tree edge, walked right after this hook.
    fn on_unmarked(&mut self, _graph: &mut Graph, _v: usize, _w: usize) {}
}

pub trait SccDetector {
    fn compute_scc(&self, graph: &mut Graph) -> SccResult;
}
