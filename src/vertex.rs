use std::fmt::{self, Debug, Display};

/// A trait representing a vertex identifier in a graph.
///
/// This trait has no methods but serves as a marker for types that can be
/// used as vertex identifiers.  It is blanket-implemented for every type
/// meeting the bounds, so plain types like `u32`, `String`, or `&str` work
/// directly.  `Ord` is required so that edge-list construction can group
/// edges deterministically.
pub trait VertexId: Eq + Ord + Clone + Debug {}

impl<T: Eq + Ord + Clone + Debug> VertexId for T {}

/// A single adjacency-list unit: an identifier plus the identifiers of its
/// neighboring vertices, in insertion order.
///
/// The neighbor list has insert semantics, not set semantics:
/// [`Vertex::add_adjacent`] never de-duplicates, and a neighbor appended
/// twice appears twice in [`Vertex::adjacent_ids`] and is counted twice by
/// [`Vertex::adjacent_count`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex<T: VertexId> {
    id: T,
    adjacent: Vec<T>,
}

impl<T: VertexId> Vertex<T> {
    /// Creates a vertex with no neighbors.
    pub fn new(id: T) -> Self {
        Self {
            id,
            adjacent: Vec::new(),
        }
    }

    /// Creates a vertex with an initial neighbor list.
    pub fn with_neighbors(id: T, neighbors: Vec<T>) -> Self {
        Self {
            id,
            adjacent: neighbors,
        }
    }

    /// Gets the immutable identifier of this vertex.
    pub fn id(&self) -> &T {
        &self.id
    }

    /// Gets the neighbor list in insertion order.
    pub fn adjacent_ids(&self) -> &[T] {
        &self.adjacent
    }

    /// Gets the number of stored neighbor entries, duplicates included.
    pub fn adjacent_count(&self) -> usize {
        self.adjacent.len()
    }

    /// Checks whether the given identifier appears in the neighbor list.
    pub fn has_adjacent(&self, id: &T) -> bool {
        self.adjacent.contains(id)
    }

    /// Appends an identifier to the neighbor list unconditionally.  Callers
    /// are responsible for not double-adding a neighbor.
    pub fn add_adjacent(&mut self, id: T) {
        self.adjacent.push(id);
    }

    /// Removes the first occurrence of the given identifier from the
    /// neighbor list, returning whether anything was removed.
    pub fn remove_adjacent(&mut self, id: &T) -> bool {
        match self.adjacent.iter().position(|n| n == id) {
            Some(index) => {
                self.adjacent.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every occurrence of the given identifier, returning how many
    /// entries were removed.  Used by the delete-vertex cascade, where a
    /// single first-occurrence removal could leave dangling duplicates.
    pub(crate) fn purge_adjacent(&mut self, id: &T) -> usize {
        let before = self.adjacent.len();
        self.adjacent.retain(|n| n != id);
        before - self.adjacent.len()
    }
}

impl<T: VertexId + Display> Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.id)?;
        for neighbor in &self.adjacent {
            write!(f, " {}", neighbor)?;
        }
        Ok(())
    }
}
