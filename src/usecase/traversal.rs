use crate::domain::dfs::{dfs_forest, DfsNumbering};
use crate::domain::graph::Graph;
use crate::usecase::event::{announce_graph, emit, AppEvent};
use crate::usecase::stats::RunStats;
use serde::Serialize;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexNumbering {
    pub vertex: usize,
    pub pre: usize,
    pub post: usize,
    pub parent: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalReport {
    pub trees: usize,
    pub vertices: Vec<VertexNumbering>,
}

/// Runs a numbering DFS forest over `graph`, leaving parent and pre/post numbers
/// on its vertices, and returns them as a report.
pub async fn number_vertices(
    graph: &mut Graph,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> (TraversalReport, RunStats) {
    announce_graph(&sink, graph).await;

    emit(&sink, AppEvent::PhaseStarted { name: "dfs".into() }).await;
    graph.reset_traversal();
    let mut numbering = DfsNumbering::new();
    let trees = dfs_forest(graph, &mut numbering);
    emit(
        &sink,
        AppEvent::DfsNumbered {
            vertices: numbering.discovered(),
            trees,
            tree_edges: numbering.tree_edges(),
            non_tree_edges: numbering.non_tree_edges(),
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "dfs".into() }).await;

    let vertices = graph
        .vertices()
        .map(|v| VertexNumbering {
            vertex: v.index(),
            pre: v.pre_number(),
            post: v.post_number(),
            parent: v.parent(),
        })
        .collect();

    let stats = RunStats {
        vertices: graph.order(),
        edges: graph.edge_count(),
        dfs_trees: trees,
        tree_edges: numbering.tree_edges(),
        non_tree_edges: numbering.non_tree_edges(),
        ..RunStats::default()
    };

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;

    (TraversalReport { trees, vertices }, stats)
}
