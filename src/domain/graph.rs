use crate::domain::edge::Edge;
use crate::domain::vertex::Vertex;
use std::collections::BTreeMap;
use std::fmt;

/// Adjacency-list graph over the dense vertex range `0..order`.
///
/// Each vertex owns its neighbor sequence. Alongside the adjacency lists the graph
/// keeps an edge directory keyed by normalized endpoints, so edge enumeration is
/// ordered and a lookup costs O(log E).
///
/// Re-inserting an existing `(u, v)` replaces the directory entry but still appends
/// to the adjacency lists: degree counts calls, the directory counts distinct edges.
///
/// Vertex arguments are not bounds-checked beyond slice indexing; an index outside
/// `0..order` panics.
#[derive(Debug, Clone)]
pub struct Graph {
    name: String,
    order: usize,
    size: usize,
    directed: bool,
    weighted: bool,
    vertices: Vec<Vertex>,
    edges: BTreeMap<(usize, usize), Edge>,
}

impl Graph {
    /// Empty graph with `order` vertices and no edges. `size` is the declared edge
    /// count and is not checked against later inserts.
    pub fn new(
        name: impl Into<String>,
        order: usize,
        size: usize,
        directed: bool,
        weighted: bool,
    ) -> Self {
        Self {
            name: name.into(),
            order,
            size,
            directed,
            weighted,
            vertices: (0..order).map(Vertex::new).collect(),
            edges: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub(crate) fn set_weighted(&mut self, weighted: bool) {
        self.weighted = weighted;
    }

    /// Number of distinct edges held in the directory.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex(&self, v: usize) -> &Vertex {
        &self.vertices[v]
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    pub fn degree(&self, v: usize) -> usize {
        self.vertices[v].degree()
    }

    /// Largest vertex degree, 0 for a graph without vertices.
    pub fn max_degree(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).max().unwrap_or(0)
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.vertices[v].neighbors()
    }

    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.add_weighted_edge(u, v, 1.0);
    }

    pub fn add_weighted_edge(&mut self, u: usize, v: usize, weight: f64) {
        self.vertices[u].add_neighbor(v);
        if !self.directed {
            self.vertices[v].add_neighbor(u);
        }
        let edge = Edge::with_weight(u, v, self.directed, self.weighted, weight);
        self.edges.insert(edge.key(), edge);
    }

    pub fn edge(&self, u: usize, v: usize) -> Option<&Edge> {
        self.edges.get(&Edge::new(u, v, self.directed).key())
    }

    pub fn edge_mut(&mut self, u: usize, v: usize) -> Option<&mut Edge> {
        let key = Edge::new(u, v, self.directed).key();
        self.edges.get_mut(&key)
    }

    /// Looks up the stored record for an edge with the same endpoints as `edge`.
    pub fn find_edge(&self, edge: &Edge) -> Option<&Edge> {
        self.edges.get(&edge.key())
    }

    /// All edges in endpoint order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn mark_vertex(&mut self, v: usize) {
        self.vertices[v].set_marked(true);
    }

    pub fn is_marked(&self, v: usize) -> bool {
        self.vertices[v].is_marked()
    }

    pub fn unmark_all(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.set_marked(false);
        }
    }

    pub fn set_parent(&mut self, v: usize, parent: Option<usize>) {
        self.vertices[v].set_parent(parent);
    }

    pub fn set_pre_number(&mut self, v: usize, num: usize) {
        self.vertices[v].set_pre_number(num);
    }

    pub fn set_post_number(&mut self, v: usize, num: usize) {
        self.vertices[v].set_post_number(num);
    }

    /// Clears marks, parents and pre/post numbers on every vertex.
    pub fn reset_traversal(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.clear_traversal();
        }
    }

    /// Builds a fresh graph with every edge reversed.
    ///
    /// For directed graphs each adjacency entry `a -> b` becomes `b -> a`, parallel
    /// entries included, and the reversed edge carries the stored weight and weighted
    /// flag of `(a, b)`.
    /// An undirected graph is its own transpose. `self` is left untouched and the
    /// result starts with every vertex unmarked.
    pub fn transpose(&self) -> Graph {
        let mut reversed = Graph::new(
            format!("{}^T", self.name),
            self.order,
            self.size,
            self.directed,
            self.weighted,
        );

        if !self.directed {
            for (src, dst) in self.vertices.iter().zip(reversed.vertices.iter_mut()) {
                for &w in src.neighbors() {
                    dst.add_neighbor(w);
                }
            }
            reversed.edges = self.edges.clone();
            return reversed;
        }

        for a in 0..self.order {
            for &b in self.vertices[a].neighbors() {
                reversed.vertices[b].add_neighbor(a);
                let edge = match self.edges.get(&(a, b)) {
                    Some(e) => Edge::with_weight(b, a, true, e.is_weighted(), e.weight()),
                    None => Edge::with_weight(b, a, true, self.weighted, 1.0),
                };
                reversed.edges.insert(edge.key(), edge);
            }
        }
        reversed
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Name={}, order={}, size={}, directed={}, weighted={}",
            self.name, self.order, self.size, self.directed, self.weighted
        )?;
        for vertex in &self.vertices {
            writeln!(f, "   {} => {:?}", vertex.index(), vertex.neighbors())?;
        }
        Ok(())
    }
}

/// Partition of a graph's vertices into strongly connected components.
#[derive(Debug, Clone)]
pub struct SccResult {
    /// Component id of each vertex.
    pub component_of: Vec<usize>,
    /// Members of each component, in discovery order.
    pub components: Vec<Vec<usize>>,
    /// True when a component contains a cycle: several members, or one member with a self-loop.
    pub cyclic_component: Vec<bool>,
}

impl SccResult {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn same_component(&self, a: usize, b: usize) -> bool {
        self.component_of[a] == self.component_of[b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directed(order: usize, edges: &[(usize, usize)]) -> Graph {
        let mut g = Graph::new("t", order, edges.len(), true, false);
        for &(u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }

    #[test]
    fn new_graph_has_order_vertices_and_no_edges() {
        let g = Graph::new("empty", 4, 0, true, false);
        assert_eq!(g.order(), 4);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.max_degree(), 0);
        assert!(g.vertices().all(|v| !v.is_marked()));
    }

    #[test]
    fn neighbors_follow_insertion_order() {
        let g = directed(4, &[(0, 3), (0, 1), (0, 2), (0, 1)]);
        assert_eq!(g.neighbors(0), &[3, 1, 2, 1]);
        assert_eq!(g.degree(0), 4);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn duplicate_insert_replaces_weight_and_grows_adjacency() {
        let mut g = Graph::new("w", 2, 2, false, true);
        g.add_weighted_edge(0, 1, 2.0);
        g.add_weighted_edge(1, 0, 5.0);

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge(0, 1).map(Edge::weight), Some(5.0));
        assert_eq!(g.degree(0), 2);
        assert_eq!(g.degree(1), 2);
    }

    #[test]
    fn undirected_lookup_is_symmetric() {
        let mut g = Graph::new("u", 4, 1, false, false);
        g.add_edge(3, 1);

        let a = g.edge(1, 3).copied().expect("edge (1,3)");
        let b = g.edge(3, 1).copied().expect("edge (3,1)");
        assert_eq!(a, b);
        assert_eq!(a.key(), (1, 3));
        assert_eq!(g.neighbors(3), &[1]);
        assert_eq!(g.neighbors(1), &[3]);
    }

    #[test]
    fn directed_lookup_is_not_symmetric() {
        let g = directed(2, &[(0, 1)]);
        assert!(g.edge(0, 1).is_some());
        assert!(g.edge(1, 0).is_none());
        assert!(g.find_edge(&Edge::new(0, 1, true)).is_some());
    }

    #[test]
    fn edges_enumerate_in_endpoint_order() {
        let g = directed(3, &[(2, 0), (0, 2), (1, 0), (0, 1)]);
        let keys: Vec<_> = g.edges().map(Edge::key).collect();
        assert_eq!(keys, vec![(0, 1), (0, 2), (1, 0), (2, 0)]);
    }

    #[test]
    fn unweighted_edges_default_to_unit_weight() {
        let g = directed(2, &[(0, 1)]);
        let e = g.edge(0, 1).expect("edge");
        assert_eq!(e.weight(), 1.0);
        assert!(!e.is_weighted());
    }

    #[test]
    fn selection_flag_is_mutable_through_directory() {
        let mut g = directed(2, &[(0, 1)]);
        g.edge_mut(0, 1).expect("edge").set_selected(true);
        assert!(g.edge(0, 1).expect("edge").is_selected());
    }

    #[test]
    fn marking_primitives() {
        let mut g = directed(3, &[]);
        g.mark_vertex(1);
        assert!(g.is_marked(1));
        assert!(!g.is_marked(0));
        g.unmark_all();
        assert!(!g.is_marked(1));
    }

    #[test]
    fn transpose_reverses_edges_and_keeps_weights() {
        let mut g = Graph::new("g", 3, 2, true, true);
        g.add_weighted_edge(0, 1, 4.0);
        g.add_weighted_edge(1, 2, 7.0);
        g.mark_vertex(0);

        let h = g.transpose();

        assert_eq!(h.name(), "g^T");
        assert_eq!(h.order(), 3);
        assert!(h.is_directed());
        assert!(h.is_weighted());
        assert_eq!(h.edge(1, 0).map(Edge::weight), Some(4.0));
        assert_eq!(h.edge(2, 1).map(Edge::weight), Some(7.0));
        assert!(h.edge(0, 1).is_none());
        assert!(h.vertices().all(|v| !v.is_marked()));
        assert!(g.is_marked(0));
    }

    #[test]
    fn transpose_keeps_per_edge_weighted_flag() {
        let mut g = Graph::new("g", 2, 2, true, false);
        g.add_edge(0, 1);
        g.set_weighted(true);
        g.add_weighted_edge(1, 0, 2.0);

        let h = g.transpose();

        let plain = h.edge(1, 0).expect("reversed (0,1)");
        let weighted = h.edge(0, 1).expect("reversed (1,0)");
        assert!(!plain.is_weighted());
        assert_eq!(plain.weight(), 1.0);
        assert!(weighted.is_weighted());
        assert_eq!(weighted.weight(), 2.0);
        assert_eq!(h.neighbors(0), &[1]);
        assert_eq!(h.neighbors(1), &[0]);
    }

    #[test]
    fn transpose_preserves_parallel_adjacency() {
        let g = directed(2, &[(0, 1), (0, 1)]);
        let h = g.transpose();
        assert_eq!(h.neighbors(1), &[0, 0]);
        assert_eq!(h.edge_count(), 1);
    }

    #[test]
    fn transpose_of_undirected_graph_is_identical() {
        let mut g = Graph::new("u", 3, 2, false, false);
        g.add_edge(0, 1);
        g.add_edge(2, 1);

        let h = g.transpose();
        assert_eq!(h.edges().collect::<Vec<_>>(), g.edges().collect::<Vec<_>>());
        for v in 0..3 {
            assert_eq!(h.neighbors(v), g.neighbors(v));
        }
    }

    #[test]
    fn display_lists_header_and_adjacency() {
        let g = directed(2, &[(0, 1)]);
        let text = g.to_string();
        assert_eq!(
            text,
            "Name=t, order=2, size=1, directed=true, weighted=false\n   0 => [1]\n   1 => []\n"
        );
    }
}
