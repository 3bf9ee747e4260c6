//! Domain layer: the graph model, the DFS engine and the algorithm ports.

pub mod dfs;
pub mod edge;
pub mod graph;
pub mod traits;
pub mod vertex;
