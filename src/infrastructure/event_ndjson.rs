use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphLoaded {
            name,
            order,
            size,
            edges,
            directed,
            weighted,
        } => {
            json!({"type":"graph_loaded","name":name,"order":order,"size":size,"edges":edges,"directed":directed,"weighted":weighted})
        }
        AppEvent::ComponentExtracted { index, members } => {
            json!({"type":"component_extracted","index":index,"members":members})
        }
        AppEvent::SccComputed {
            nodes,
            edges,
            components,
            cyclic_components,
        } => {
            json!({"type":"scc_computed","nodes":nodes,"edges":edges,"components":components,"cyclic_components":cyclic_components})
        }
        AppEvent::DfsNumbered {
            vertices,
            trees,
            tree_edges,
            non_tree_edges,
        } => {
            json!({"type":"dfs_numbered","vertices":vertices,"trees":trees,"tree_edges":tree_edges,"non_tree_edges":non_tree_edges})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
