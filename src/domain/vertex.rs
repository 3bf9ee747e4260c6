use std::fmt;

/// One graph node: its adjacency sequence plus the bookkeeping a DFS sweep writes.
///
/// `pre_number` and `post_number` are 0 until a numbering traversal assigns them.
/// `parent` is `None` for tree roots and for vertices no traversal has reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    index: usize,
    marked: bool,
    parent: Option<usize>,
    pre_number: usize,
    post_number: usize,
    neighbors: Vec<usize>,
}

impl Vertex {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            marked: false,
            parent: None,
            pre_number: 0,
            post_number: 0,
            neighbors: Vec::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn set_marked(&mut self, marked: bool) {
        self.marked = marked;
    }

    /// Number of adjacency slots, parallel entries included.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn set_parent(&mut self, parent: Option<usize>) {
        self.parent = parent;
    }

    pub fn pre_number(&self) -> usize {
        self.pre_number
    }

    pub fn set_pre_number(&mut self, num: usize) {
        self.pre_number = num;
    }

    pub fn post_number(&self) -> usize {
        self.post_number
    }

    pub fn set_post_number(&mut self, num: usize) {
        self.post_number = num;
    }

    pub fn add_neighbor(&mut self, v: usize) {
        self.neighbors.push(v);
    }

    /// Neighbors in insertion order.
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    pub(crate) fn clear_traversal(&mut self) {
        self.marked = false;
        self.parent = None;
        self.pre_number = 0;
        self.post_number = 0;
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.index)
    }
}
