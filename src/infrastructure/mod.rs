// Infrastructure layer: text loader, algorithm adapters, eventing
pub mod event_ndjson;
pub mod graph_text;
pub mod scc_kosaraju;
