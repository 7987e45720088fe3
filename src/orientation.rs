/// Whether a graph's edges are directed or undirected.
///
/// Fixed when a [`Graph`](crate::Graph) is constructed.  Undirected graphs
/// mirror every edge mutation onto both endpoints so that `u` is adjacent to
/// `v` exactly when `v` is adjacent to `u`; directed graphs record only the
/// source-to-target entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Directed,
    Undirected,
}

impl Orientation {
    /// Returns true if edges have a distinct source and target.
    pub fn is_directed(self) -> bool {
        matches!(self, Orientation::Directed)
    }
}
