use serde::Serialize;

/// Counters reported at the end of a run. Fields a command does not compute stay 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub vertices: usize,
    pub edges: usize,
    pub components: usize,
    pub cyclic_components: usize,
    pub largest_component: usize,
    pub dfs_trees: usize,
    pub tree_edges: usize,
    pub non_tree_edges: usize,
}
