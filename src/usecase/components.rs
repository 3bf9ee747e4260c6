use crate::domain::graph::Graph;
use crate::domain::traits::SccDetector;
use crate::usecase::event::{announce_graph, emit, AppEvent};
use crate::usecase::stats::RunStats;
use serde::Serialize;
use tokio::sync::mpsc;

/// Component membership as consumers see it: members in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentsReport {
    pub count: usize,
    pub components: Vec<Vec<usize>>,
}

/// Partitions `graph` into strongly connected components.
///
/// The detector marks the graph's vertices; callers that traverse the same graph
/// afterwards must unmark it first.
pub async fn strongly_connected_components(
    graph: &mut Graph,
    scc: &dyn SccDetector,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> (ComponentsReport, RunStats) {
    announce_graph(&sink, graph).await;

    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let scc_res = scc.compute_scc(graph);
    let cyclic_components = scc_res.cyclic_component.iter().filter(|&&b| b).count();
    emit(
        &sink,
        AppEvent::SccComputed {
            nodes: graph.order(),
            edges: graph.edge_count(),
            components: scc_res.component_count(),
            cyclic_components,
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    for (index, members) in scc_res.components.iter().enumerate() {
        emit(
            &sink,
            AppEvent::ComponentExtracted {
                index: index + 1,
                members: members.clone(),
            },
        )
        .await;
    }

    let stats = RunStats {
        vertices: graph.order(),
        edges: graph.edge_count(),
        components: scc_res.component_count(),
        cyclic_components,
        largest_component: scc_res.components.iter().map(Vec::len).max().unwrap_or(0),
        ..RunStats::default()
    };

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;

    let report = ComponentsReport {
        count: scc_res.component_count(),
        components: scc_res.components,
    };
    (report, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;

    #[tokio::test]
    async fn reports_components_and_stats() {
        let mut g = Graph::new("g", 4, 4, true, false);
        for (u, v) in [(0, 1), (1, 0), (1, 2), (3, 3)] {
            g.add_edge(u, v);
        }

        let (report, stats) =
            strongly_connected_components(&mut g, &KosarajuSccDetector, None).await;

        assert_eq!(report.count, 3);
        assert_eq!(stats.vertices, 4);
        assert_eq!(stats.edges, 4);
        assert_eq!(stats.components, 3);
        assert_eq!(stats.cyclic_components, 2);
        assert_eq!(stats.largest_component, 2);
    }

    #[tokio::test]
    async fn emits_one_event_per_component() {
        let mut g = Graph::new("g", 3, 0, true, false);
        let (tx, mut rx) = mpsc::channel::<AppEvent>(64);

        strongly_connected_components(&mut g, &KosarajuSccDetector, Some(tx)).await;

        let mut extracted = Vec::new();
        let mut saw_loaded = false;
        let mut saw_finished = false;
        while let Some(ev) = rx.recv().await {
            match ev {
                AppEvent::GraphLoaded { order, .. } => {
                    saw_loaded = true;
                    assert_eq!(order, 3);
                }
                AppEvent::ComponentExtracted { index, members } => extracted.push((index, members)),
                AppEvent::Finished { stats } => {
                    saw_finished = true;
                    assert_eq!(stats.components, 3);
                }
                _ => {}
            }
        }

        assert!(saw_loaded);
        assert!(saw_finished);
        // Last finished vertex is extracted first.
        assert_eq!(extracted, vec![(1, vec![2]), (2, vec![1]), (3, vec![0])]);
    }
}
