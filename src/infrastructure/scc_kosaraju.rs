use crate::domain::dfs::{dfs_forest, DfsEngine};
use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::{DfsVisitor, SccDetector};

/// Kosaraju's two-pass strongly connected components.
///
/// Pass one walks the graph and records vertices by finish time. Pass two walks the
/// transpose, starting each tree at the latest-finished vertex not yet assigned;
/// every such tree is exactly one component.
pub struct KosarajuSccDetector;

impl SccDetector for KosarajuSccDetector {
    fn compute_scc(&self, graph: &mut Graph) -> SccResult {
        kosaraju_scc(graph)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SccPhase {
    FinishOrder,
    Transpose,
    Extraction,
    Complete,
}

/// State of one detector invocation. Nothing here outlives the call.
struct SccRun {
    phase: SccPhase,
    finish_order: Vec<usize>,
}

/// Pass-one visitor: pushes each vertex as it finishes.
struct FinishOrderRecorder<'a> {
    stack: &'a mut Vec<usize>,
}

impl DfsVisitor for FinishOrderRecorder<'_> {
    fn post_visit(&mut self, _graph: &mut Graph, v: usize) {
        self.stack.push(v);
    }
}

/// Pass-two visitor: every vertex discovered belongs to the current component.
#[derive(Default)]
struct ComponentCollector {
    members: Vec<usize>,
}

impl DfsVisitor for ComponentCollector {
    fn pre_visit(&mut self, _graph: &mut Graph, v: usize) {
        self.members.push(v);
    }
}

impl SccRun {
    fn new(order: usize) -> Self {
        Self {
            phase: SccPhase::FinishOrder,
            finish_order: Vec::with_capacity(order),
        }
    }

    fn advance(&mut self, expected: SccPhase, next: SccPhase) {
        debug_assert_eq!(self.phase, expected, "kosaraju phases ran out of order");
        self.phase = next;
    }

    fn record_finish_order(&mut self, graph: &mut Graph) {
        let mut recorder = FinishOrderRecorder {
            stack: &mut self.finish_order,
        };
        dfs_forest(graph, &mut recorder);
        self.advance(SccPhase::FinishOrder, SccPhase::Transpose);
    }

    fn build_transpose(&mut self, graph: &Graph) -> (Graph, Vec<usize>) {
        let transposed = graph.transpose();
        let stack = std::mem::take(&mut self.finish_order);
        self.advance(SccPhase::Transpose, SccPhase::Extraction);
        (transposed, stack)
    }

    fn extract_components(
        &mut self,
        transposed: &mut Graph,
        mut stack: Vec<usize>,
    ) -> Vec<Vec<usize>> {
        let mut engine = DfsEngine::new(transposed);
        let mut components = Vec::new();

        while let Some(v) = stack.pop() {
            if engine.graph().is_marked(v) {
                continue;
            }
            let mut collector = ComponentCollector::default();
            engine.dfs(v, &mut collector);
            components.push(collector.members);
        }

        self.advance(SccPhase::Extraction, SccPhase::Complete);
        components
    }
}

fn kosaraju_scc(graph: &mut Graph) -> SccResult {
    let n = graph.order();
    let mut run = SccRun::new(n);

    run.record_finish_order(graph);
    let (mut transposed, stack) = run.build_transpose(graph);
    let components = run.extract_components(&mut transposed, stack);

    let mut component_of = vec![usize::MAX; n];
    for (cid, comp) in components.iter().enumerate() {
        for &v in comp {
            component_of[v] = cid;
        }
    }

    let cyclic_component = components
        .iter()
        .map(|comp| match comp.as_slice() {
            [only] => graph.neighbors(*only).contains(only),
            _ => true,
        })
        .collect();

    SccResult {
        component_of,
        components,
        cyclic_component,
    }
}
