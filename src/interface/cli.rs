use crate::domain::graph::Graph;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::graph_text::read_graph_file;
use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
use crate::usecase::components::{strongly_connected_components, ComponentsReport};
use crate::usecase::event::AppEvent;
use crate::usecase::traversal::{number_vertices, TraversalReport};
use anyhow::{anyhow, Context, Result};
use std::env;
use std::fmt::Write as _;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::Scc {
            input,
            emit_events,
            json,
        } => {
            let mut graph = load(&input).await?;
            let (tx, printer) = event_channel(emit_events);

            let (report, stats) =
                strongly_connected_components(&mut graph, &KosarajuSccDetector, Some(tx)).await;

            if let Some(handle) = printer {
                handle.await.ok();
            } else if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_components(&graph, &report));
            }

            eprintln!(
                "summary: vertices={} edges={} components={} cyclic_components={} largest_component={}",
                stats.vertices,
                stats.edges,
                stats.components,
                stats.cyclic_components,
                stats.largest_component
            );
            Ok(())
        }

        Cli::Dfs {
            input,
            emit_events,
            json,
        } => {
            let mut graph = load(&input).await?;
            let (tx, printer) = event_channel(emit_events);

            let (report, stats) = number_vertices(&mut graph, Some(tx)).await;

            if let Some(handle) = printer {
                handle.await.ok();
            } else if json {
                println!("{}", serde_json::to_string_pretty(&report.vertices)?);
            } else {
                print!("{}", render_numbering(&report));
            }

            eprintln!(
                "summary: vertices={} trees={} tree_edges={} non_tree_edges={}",
                stats.vertices, stats.dfs_trees, stats.tree_edges, stats.non_tree_edges
            );
            Ok(())
        }

        Cli::Show { input } => {
            let graph = load(&input).await?;
            print!("{graph}");
            Ok(())
        }
    }
}

async fn load(input: &str) -> Result<Graph> {
    read_graph_file(input)
        .await
        .with_context(|| format!("reading graph: {input}"))
}

/// The sender always exists; without a printer its receiver is dropped and sends are no-ops.
fn event_channel(emit_events: bool) -> (mpsc::Sender<AppEvent>, Option<JoinHandle<()>>) {
    let (tx, rx) = mpsc::channel::<AppEvent>(1024);
    let printer = if emit_events {
        Some(spawn_ndjson_printer(rx))
    } else {
        drop(rx);
        None
    };
    (tx, printer)
}

fn render_components(graph: &Graph, report: &ComponentsReport) -> String {
    let mut out = graph.to_string();
    for (i, members) in report.components.iter().enumerate() {
        let members: Vec<String> = members.iter().map(|v| v.to_string()).collect();
        let _ = writeln!(out, "Component {}: {}", i + 1, members.join(" "));
    }
    out
}

fn render_numbering(report: &TraversalReport) -> String {
    let mut out = String::new();
    for row in &report.vertices {
        let parent = row
            .parent
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        let _ = writeln!(
            out,
            "v{} pre={} post={} parent={}",
            row.vertex, row.pre, row.post, parent
        );
    }
    out
}

#[derive(Debug)]
enum Cli {
    Scc {
        input: String,
        emit_events: bool,
        json: bool,
    },
    Dfs {
        input: String,
        emit_events: bool,
        json: bool,
    },
    Show {
        input: String,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> scc|dfs --in/--input <graph.txt> [--emit-events] [--json]
        // <bin> show --in/--input <graph.txt>
        if args.len() < 2 {
            return Err(anyhow!(usage()));
        }

        match args[1].as_str() {
            "scc" => {
                let (input, emit_events, json) = Self::parse_report_args(args)?;
                Ok(Cli::Scc {
                    input,
                    emit_events,
                    json,
                })
            }
            "dfs" => {
                let (input, emit_events, json) = Self::parse_report_args(args)?;
                Ok(Cli::Dfs {
                    input,
                    emit_events,
                    json,
                })
            }
            "show" => Self::parse_show(args),
            "-h" | "--help" => Err(anyhow!(usage())),
            other => Err(anyhow!(format!("unknown command: {other}\n\n{}", usage()))),
        }
    }

    fn parse_report_args(args: &[String]) -> Result<(String, bool, bool)> {
        let mut input: Option<String> = None;
        let mut emit_events = false;
        let mut json = false;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "--json" => {
                    json = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;
        Ok((input, emit_events, json))
    }

    fn parse_show(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::Show { input })
    }
}

fn usage() -> &'static str {
    "Usage:\n  graph-scc scc --in/--input <graph.txt> [--emit-events] [--json]\n  graph-scc dfs --in/--input <graph.txt> [--emit-events] [--json]\n  graph-scc show --in/--input <graph.txt>\n\nInput:\n  First line: <order> <size> <directed|undirected>, then <size> lines of <u> <v> [weight].\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout instead of the report; summary goes to stderr."
}
