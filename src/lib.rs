//! Adjacency-list graphs, a visitor-driven depth-first search, and Kosaraju's
//! strongly connected components.

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;

pub use domain::dfs::{dfs_forest, DfsEngine, DfsNumbering};
pub use domain::edge::Edge;
pub use domain::graph::{Graph, SccResult};
pub use domain::traits::{DfsVisitor, SccDetector};
pub use domain::vertex::Vertex;
pub use infrastructure::graph_text::{parse_graph, read_graph_file, GraphParseError};
pub use infrastructure::scc_kosaraju::KosarajuSccDetector;
