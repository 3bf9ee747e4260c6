use crate::domain::graph::Graph;
use crate::usecase::stats::RunStats;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphLoaded {
        name: String,
        order: usize,
        size: usize,
        edges: usize,
        directed: bool,
        weighted: bool,
    },

    ComponentExtracted {
        index: usize,
        members: Vec<usize>,
    },

    SccComputed {
        nodes: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
    },

    DfsNumbered {
        vertices: usize,
        trees: usize,
        tree_edges: usize,
        non_tree_edges: usize,
    },

    Finished {
        stats: RunStats,
    },
}

pub(crate) async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}

pub(crate) async fn announce_graph(sink: &Option<mpsc::Sender<AppEvent>>, graph: &Graph) {
    emit(
        sink,
        AppEvent::GraphLoaded {
            name: graph.name().to_string(),
            order: graph.order(),
            size: graph.size(),
            edges: graph.edge_count(),
            directed: graph.is_directed(),
            weighted: graph.is_weighted(),
        },
    )
    .await;
}
