//! Recursive depth-first search with visitor hooks.
//!
//! [`DfsEngine`] only walks: it marks vertices and calls the four [`DfsVisitor`]
//! hooks in a fixed order. Which vertices start a tree is the caller's decision;
//! [`dfs_forest`] is the standard driver that covers every vertex.
//!
//! Recursion depth is bounded by the longest path a tree explores, at most the
//! graph order.

use crate::domain::graph::Graph;
use crate::domain::traits::DfsVisitor;

pub struct DfsEngine<'g> {
    graph: &'g mut Graph,
}

impl<'g> DfsEngine<'g> {
    pub fn new(graph: &'g mut Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Graph {
        &*self.graph
    }

    /// Walks the tree rooted at `v`, skipping anything already marked.
    pub fn dfs<V: DfsVisitor + ?Sized>(&mut self, v: usize, visitor: &mut V) {
        visitor.pre_visit(self.graph, v);
        self.graph.mark_vertex(v);

        // Indexed loop: hooks need the graph mutably while we walk v's adjacency.
        let mut i = 0;
        while i < self.graph.degree(v) {
            let w = self.graph.neighbors(v)[i];
            if self.graph.is_marked(w) {
                visitor.on_marked(self.graph, v, w);
            } else {
                visitor.on_unmarked(self.graph, v, w);
                self.dfs(w, visitor);
            }
            i += 1;
        }

        visitor.post_visit(self.graph, v);
    }
}

/// Runs a full DFS forest: unmarks every vertex, then starts a tree at each
/// still-unmarked vertex in ascending index order. Returns the number of trees.
pub fn dfs_forest<V: DfsVisitor + ?Sized>(graph: &mut Graph, visitor: &mut V) -> usize {
    graph.unmark_all();
    let order = graph.order();
    let mut engine = DfsEngine::new(graph);
    let mut trees = 0;
    for v in 0..order {
        if !engine.graph().is_marked(v) {
            engine.dfs(v, visitor);
            trees += 1;
        }
    }
    trees
}

/// Visitor that writes parent links and 1-based pre/post numbers onto the vertices.
#[derive(Debug, Default)]
pub struct DfsNumbering {
    next_pre: usize,
    next_post: usize,
    tree_edges: usize,
    non_tree_edges: usize,
}

impl DfsNumbering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices discovered so far.
    pub fn discovered(&self) -> usize {
        self.next_pre
    }

    /// Vertices finished so far.
    pub fn finished(&self) -> usize {
        self.next_post
    }

    pub fn tree_edges(&self) -> usize {
        self.tree_edges
    }

    /// Adjacency entries that led to an already-marked vertex.
    pub fn non_tree_edges(&self) -> usize {
        self.non_tree_edges
    }
}

impl DfsVisitor for DfsNumbering {
    fn pre_visit(&mut self, graph: &mut Graph, v: usize) {
        self.next_pre += 1;
        graph.set_pre_number(v, self.next_pre);
    }

    fn post_visit(&mut self, graph: &mut Graph, v: usize) {
        self.next_post += 1;
        graph.set_post_number(v, self.next_post);
    }

    fn on_marked(&mut self, _graph: &mut Graph, _v: usize, _w: usize) {
        self.non_tree_edges += 1;
    }

    fn on_unmarked(&mut self, graph: &mut Graph, v: usize, w: usize) {
        self.tree_edges += 1;
        graph.set_parent(w, Some(v));
    }
}
