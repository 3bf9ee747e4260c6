use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An endpoint pair `(u, v)` with an optional weight.
///
/// Equality, hashing and ordering look at the endpoints only: two edges with the
/// same `(u, v)` are the same edge whatever their weight or selection state.
/// Undirected edges are stored with `u <= v`, so `(3, 1)` and `(1, 3)` coincide.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    u: usize,
    v: usize,
    directed: bool,
    weighted: bool,
    weight: f64,
    selected: bool,
}

impl Edge {
    /// Unweighted edge; the weight slot holds 0.0.
    pub fn new(u: usize, v: usize, directed: bool) -> Self {
        Self::with_weight(u, v, directed, false, 0.0)
    }

    pub fn with_weight(u: usize, v: usize, directed: bool, weighted: bool, weight: f64) -> Self {
        let (u, v) = if directed { (u, v) } else { (u.min(v), u.max(v)) };
        Self {
            u,
            v,
            directed,
            weighted,
            weight,
            selected: false,
        }
    }

    /// Normalized endpoint pair used as the directory key.
    pub fn key(&self) -> (usize, usize) {
        (self.u, self.v)
    }

    pub fn tail(&self) -> usize {
        self.u
    }

    pub fn head(&self) -> usize {
        self.v
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weighted {
            write!(f, "({},{},{})", self.u, self.v, self.weight)
        } else {
            write!(f, "({},{})", self.u, self.v)
        }
    }
}
