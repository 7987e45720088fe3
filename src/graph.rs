use std::collections::BTreeMap;
use std::fmt::{self, Display};

use crate::error::{GraphError, Result};
use crate::orientation::Orientation;
use crate::trace::trace_mutation;
use crate::vertex::{Vertex, VertexId};

/// A directed or undirected graph over an arbitrary comparable identifier
/// type, stored as a collection of [`Vertex`] adjacency lists.
///
/// The graph exclusively owns its vertices; every mutation goes through the
/// container so that two invariants hold at the API boundary:
///
/// - Undirected graphs stay mirrored: `u` is adjacent to `v` exactly when
///   `v` is adjacent to `u`.
/// - No adjacency entry dangles: every identifier appearing in a neighbor
///   list names a vertex present in the graph.
///
/// Edges have insert semantics: adding the same edge twice stores the
/// adjacency entry twice, which shows up in [`Graph::edge_count`] and in
/// per-vertex counts.  Callers wanting idempotent insertion can check
/// [`Graph::contains_edge`] first.
#[derive(Clone, Debug)]
pub struct Graph<T: VertexId> {
    vertices: Vec<Vertex<T>>,
    orientation: Orientation,
}

impl<T: VertexId> Graph<T> {
    /// Creates an empty graph with the given orientation.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            vertices: Vec::new(),
            orientation,
        }
    }

    /// Creates a graph from an explicit vertex set, stored as-is.
    ///
    /// The caller is responsible for internal consistency: adjacency
    /// symmetry for undirected graphs is not repaired by this constructor.
    pub fn from_vertices(vertices: Vec<Vertex<T>>, orientation: Orientation) -> Self {
        Self {
            vertices,
            orientation,
        }
    }

    /// Creates a graph from `(source, target)` pairs.  One vertex is
    /// synthesized per distinct identifier appearing in any edge; for an
    /// undirected graph each pair is recorded on both endpoints.
    ///
    /// Vertices end up in identifier sort order, not edge order; within a
    /// vertex, neighbors keep the order the edges were given in.
    pub fn from_edges<I>(edges: I, orientation: Orientation) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut grouped: BTreeMap<T, Vec<T>> = BTreeMap::new();
        for (source, target) in edges {
            if orientation.is_directed() {
                grouped.entry(target.clone()).or_default();
            } else {
                grouped.entry(target.clone()).or_default().push(source.clone());
            }
            grouped.entry(source).or_default().push(target);
        }
        let vertices = grouped
            .into_iter()
            .map(|(id, neighbors)| Vertex::with_neighbors(id, neighbors))
            .collect();
        Self {
            vertices,
            orientation,
        }
    }

    /// Gets the orientation fixed at construction.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns true if the graph is directed.
    pub fn is_directed(&self) -> bool {
        self.orientation.is_directed()
    }

    /// Gets the number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Gets the number of edges in the graph.  For an undirected graph each
    /// edge is stored as two mirrored entries, so the summed adjacency
    /// counts are halved.
    pub fn edge_count(&self) -> usize {
        let total: usize = self.vertices.iter().map(Vertex::adjacent_count).sum();
        if self.is_directed() { total } else { total / 2 }
    }

    /// Gets an iterator over all vertex identifiers in storage order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = &T> + '_ {
        self.vertices.iter().map(Vertex::id)
    }

    /// Gets the stored vertices in storage order.
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// Gets the neighbor list of the given vertex in insertion order.
    pub fn adjacent_ids(&self, id: &T) -> Result<&[T], T> {
        self.find(id)
            .map(Vertex::adjacent_ids)
            .ok_or_else(|| GraphError::NotFound(id.clone()))
    }

    /// Gets the number of adjacency entries on the given vertex, duplicates
    /// included.
    pub fn degree(&self, id: &T) -> Result<usize, T> {
        self.find(id)
            .map(Vertex::adjacent_count)
            .ok_or_else(|| GraphError::NotFound(id.clone()))
    }

    /// Checks whether a vertex with the given identifier exists.
    pub fn contains_vertex(&self, id: &T) -> bool {
        self.find(id).is_some()
    }

    /// Checks whether a stored vertex structurally matches the probe: same
    /// identifier, same adjacency count, and every neighbor of the probe
    /// present on the stored vertex.  With the counts equal this amounts to
    /// adjacency-set equality.
    pub fn contains_vertex_matching(&self, probe: &Vertex<T>) -> bool {
        self.find(probe.id()).is_some_and(|stored| {
            stored.adjacent_count() == probe.adjacent_count()
                && probe
                    .adjacent_ids()
                    .iter()
                    .all(|neighbor| stored.has_adjacent(neighbor))
        })
    }

    /// Checks whether an edge from `from` to `into` exists.  This is a
    /// strict directed check regardless of orientation; undirected graphs
    /// answer symmetrically because their mutations always mirror.
    pub fn contains_edge(&self, from: &T, into: &T) -> bool {
        self.find(from).is_some_and(|v| v.has_adjacent(into))
    }

    /// Adds a new, neighborless vertex.
    pub fn add_vertex(&mut self, id: T) -> Result<(), T> {
        if self.contains_vertex(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        trace_mutation!(?id, "vertex added");
        self.vertices.push(Vertex::new(id));
        Ok(())
    }

    /// Inserts a fully-formed vertex, including any pre-existing neighbor
    /// list.
    ///
    /// Neighbors not yet in the graph are created as isolated vertices
    /// first, so no adjacency entry dangles.  For an undirected graph the
    /// incoming identifier is then mirrored into each listed neighbor's
    /// adjacency list; a directed graph stores the vertex as given.
    pub fn insert_vertex(&mut self, vertex: Vertex<T>) -> Result<(), T> {
        if self.contains_vertex(vertex.id()) {
            return Err(GraphError::DuplicateVertex(vertex.id().clone()));
        }

        // Worklist of neighbors to synthesize; a self-referential neighbor
        // must not be created as a second vertex with the same identifier.
        let mut missing: Vec<T> = Vec::new();
        for neighbor in vertex.adjacent_ids() {
            if neighbor != vertex.id()
                && !self.contains_vertex(neighbor)
                && !missing.contains(neighbor)
            {
                missing.push(neighbor.clone());
            }
        }
        for neighbor in missing {
            trace_mutation!(id = ?neighbor, "isolated neighbor synthesized");
            self.vertices.push(Vertex::new(neighbor));
        }

        if !self.is_directed() {
            for neighbor in vertex.adjacent_ids() {
                if neighbor == vertex.id() {
                    continue;
                }
                match self.find_mut(neighbor) {
                    Some(stored) => stored.add_adjacent(vertex.id().clone()),
                    None => return Err(GraphError::AdjacentVertexNotFound(neighbor.clone())),
                }
            }
        }

        trace_mutation!(id = ?vertex.id(), neighbors = vertex.adjacent_count(), "vertex inserted");
        self.vertices.push(vertex);
        Ok(())
    }

    /// Adds an edge from `from` to `into`, creating either endpoint as an
    /// isolated vertex if it is missing.  Undirected graphs record the edge
    /// on both endpoints.
    ///
    /// Calling this twice with the same pair stores the entry twice; see the
    /// type-level note on insert semantics.
    pub fn add_edge(&mut self, from: T, into: T) {
        if !self.contains_vertex(&from) {
            self.vertices.push(Vertex::new(from.clone()));
        }
        if !self.contains_vertex(&into) {
            self.vertices.push(Vertex::new(into.clone()));
        }
        trace_mutation!(?from, ?into, "edge added");
        if let Some(v) = self.find_mut(&from) {
            v.add_adjacent(into.clone());
        }
        if !self.is_directed()
            && let Some(v) = self.find_mut(&into)
        {
            v.add_adjacent(from);
        }
    }

    /// Removes a vertex and every adjacency entry referencing it, returning
    /// the removed vertex.  The cascade purges all occurrences of the
    /// identifier from the remaining vertices, so no reference dangles even
    /// when edges were duplicated.
    pub fn delete_vertex(&mut self, id: &T) -> Result<Vertex<T>, T> {
        let index = self
            .vertices
            .iter()
            .position(|v| v.id() == id)
            .ok_or_else(|| GraphError::NotFound(id.clone()))?;
        trace_mutation!(?id, "vertex deleted");
        let removed = self.vertices.remove(index);
        for vertex in &mut self.vertices {
            vertex.purge_adjacent(id);
        }
        Ok(removed)
    }

    /// Removes the edge from `from` to `into`, and the mirrored entry as
    /// well for an undirected graph.  Fails with
    /// [`GraphError::NotFound`] if the source vertex is missing, or, for an
    /// undirected graph, if either endpoint is missing.  The removal itself
    /// is first-occurrence and a no-op when the entry is not present.
    pub fn delete_edge(&mut self, from: &T, into: &T) -> Result<(), T> {
        if !self.contains_vertex(from) {
            return Err(GraphError::NotFound(from.clone()));
        }
        if !self.is_directed() && !self.contains_vertex(into) {
            return Err(GraphError::NotFound(into.clone()));
        }
        trace_mutation!(?from, ?into, "edge deleted");
        if let Some(v) = self.find_mut(from) {
            v.remove_adjacent(into);
        }
        if !self.is_directed()
            && let Some(v) = self.find_mut(into)
        {
            v.remove_adjacent(from);
        }
        Ok(())
    }

    fn find(&self, id: &T) -> Option<&Vertex<T>> {
        self.vertices.iter().find(|v| v.id() == id)
    }

    fn find_mut(&mut self, id: &T) -> Option<&mut Vertex<T>> {
        self.vertices.iter_mut().find(|v| v.id() == id)
    }
}

/// Diagnostic adjacency dump, one line per vertex.  Not a stable format.
impl<T: VertexId + Display> Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            writeln!(f, "{}", vertex)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_has_no_vertices_or_edges() {
        let g: Graph<u32> = Graph::new(Orientation::Directed);
        assert!(g.is_empty());
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn from_empty_edge_list_is_empty() {
        let g: Graph<u32> = Graph::from_edges([], Orientation::Undirected);
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn from_edges_synthesizes_vertices_in_sort_order() {
        let g = Graph::from_edges([(3, 1), (2, 3)], Orientation::Directed);
        assert_eq!(g.vertex_ids().collect::<Vec<_>>(), vec![&1, &2, &3]);
        assert_eq!(g.adjacent_ids(&3).unwrap(), &[1]);
        assert_eq!(g.adjacent_ids(&2).unwrap(), &[3]);
        assert_eq!(g.adjacent_ids(&1).unwrap(), &[] as &[i32]);
    }

    #[test]
    fn from_edges_mirrors_when_undirected() {
        let g = Graph::from_edges([("a", "b"), ("b", "c")], Orientation::Undirected);
        assert_eq!(g.adjacent_ids(&"b").unwrap(), &["a", "c"]);
        assert_eq!(g.adjacent_ids(&"a").unwrap(), &["b"]);
        assert_eq!(g.adjacent_ids(&"c").unwrap(), &["b"]);
    }

    #[test]
    fn edge_count_halves_mirrored_entries() {
        let directed = Graph::from_edges([(1, 2), (2, 3)], Orientation::Directed);
        assert_eq!(directed.edge_count(), 2);

        let undirected = Graph::from_edges([(1, 2), (2, 3)], Orientation::Undirected);
        assert_eq!(undirected.edge_count(), 2);
    }

    #[test]
    fn add_vertex_rejects_duplicates() {
        let mut g = Graph::new(Orientation::Directed);
        g.add_vertex(1).unwrap();
        assert_eq!(g.add_vertex(1), Err(GraphError::DuplicateVertex(1)));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn add_edge_creates_missing_endpoints() {
        let mut g = Graph::new(Orientation::Undirected);
        g.add_edge("a", "b");
        assert!(g.contains_vertex(&"a"));
        assert!(g.contains_vertex(&"b"));
        assert!(g.contains_edge(&"a", &"b"));
        assert!(g.contains_edge(&"b", &"a"));
    }

    #[test]
    fn directed_add_edge_does_not_mirror() {
        let mut g = Graph::new(Orientation::Directed);
        g.add_edge(1, 2);
        assert!(g.contains_edge(&1, &2));
        assert!(!g.contains_edge(&2, &1));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn repeated_add_edge_duplicates_entries() {
        let mut g = Graph::new(Orientation::Undirected);
        g.add_edge(1, 2);
        g.add_edge(1, 2);
        assert_eq!(g.adjacent_ids(&1).unwrap(), &[2, 2]);
        assert_eq!(g.degree(&1).unwrap(), 2);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn undirected_self_loop_counts_as_one_edge() {
        let mut g = Graph::new(Orientation::Undirected);
        g.add_edge(1, 1);
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.adjacent_ids(&1).unwrap(), &[1, 1]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn insert_vertex_mirrors_and_synthesizes_neighbors() {
        let mut g = Graph::new(Orientation::Undirected);
        g.add_vertex("a").unwrap();
        g.insert_vertex(Vertex::with_neighbors("d", vec!["a", "b", "c"]))
            .unwrap();

        assert_eq!(g.vertex_count(), 4);
        for n in ["a", "b", "c"] {
            assert!(g.contains_edge(&n, &"d"));
            assert!(g.contains_edge(&"d", &n));
        }
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn directed_insert_vertex_stores_as_given() {
        let mut g = Graph::new(Orientation::Directed);
        g.insert_vertex(Vertex::with_neighbors(1, vec![2, 3])).unwrap();

        assert_eq!(g.vertex_count(), 3);
        assert!(g.contains_edge(&1, &2));
        assert!(!g.contains_edge(&2, &1));
        assert_eq!(g.adjacent_ids(&2).unwrap(), &[] as &[i32]);
    }

    #[test]
    fn insert_vertex_rejects_duplicate_id() {
        let mut g = Graph::new(Orientation::Undirected);
        g.add_vertex(1).unwrap();
        assert_eq!(
            g.insert_vertex(Vertex::with_neighbors(1, vec![2])),
            Err(GraphError::DuplicateVertex(1))
        );
        // The rejected insert must not have synthesized anything.
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn delete_vertex_cascades_to_all_references() {
        let mut g = Graph::from_edges(
            [(1, 2), (2, 3), (3, 1), (1, 3)],
            Orientation::Undirected,
        );
        let removed = g.delete_vertex(&3).unwrap();
        assert_eq!(removed.id(), &3);

        assert!(!g.contains_vertex(&3));
        for id in [1, 2] {
            assert!(!g.contains_edge(&id, &3));
        }
        assert!(g.contains_edge(&1, &2));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn delete_missing_vertex_fails_without_mutating() {
        let mut g = Graph::from_edges([(1, 2)], Orientation::Directed);
        assert_eq!(g.delete_vertex(&9), Err(GraphError::NotFound(9)));
        assert_eq!(g.vertex_count(), 2);
        assert!(g.contains_edge(&1, &2));
    }

    #[test]
    fn delete_edge_removes_both_mirrored_entries() {
        let mut g = Graph::from_edges([(1, 2), (2, 3)], Orientation::Undirected);
        g.delete_edge(&1, &2).unwrap();
        assert!(!g.contains_edge(&1, &2));
        assert!(!g.contains_edge(&2, &1));
        assert!(g.contains_edge(&2, &3));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn delete_edge_requires_source_vertex() {
        let mut g: Graph<u32> = Graph::new(Orientation::Directed);
        assert_eq!(g.delete_edge(&1, &2), Err(GraphError::NotFound(1)));
    }

    #[test]
    fn undirected_delete_edge_requires_both_endpoints() {
        let mut g = Graph::new(Orientation::Undirected);
        g.add_vertex(1).unwrap();
        assert_eq!(g.delete_edge(&1, &2), Err(GraphError::NotFound(2)));
    }

    #[test]
    fn delete_absent_edge_is_a_noop() {
        let mut g = Graph::from_edges([(1, 2)], Orientation::Undirected);
        g.delete_edge(&2, &1).unwrap();
        assert_eq!(g.edge_count(), 0);
        g.delete_edge(&2, &1).unwrap();
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn adjacent_ids_fails_on_missing_vertex() {
        let g: Graph<u32> = Graph::new(Orientation::Directed);
        assert_eq!(g.adjacent_ids(&5), Err(GraphError::NotFound(5)));
        assert_eq!(g.degree(&5), Err(GraphError::NotFound(5)));
    }

    #[test]
    fn contains_vertex_matching_compares_structure() {
        let g = Graph::from_edges([(1, 2), (1, 3)], Orientation::Directed);

        assert!(g.contains_vertex_matching(&Vertex::with_neighbors(1, vec![2, 3])));
        // Order within the adjacency list does not matter.
        assert!(g.contains_vertex_matching(&Vertex::with_neighbors(1, vec![3, 2])));
        // Count mismatch.
        assert!(!g.contains_vertex_matching(&Vertex::with_neighbors(1, vec![2])));
        // Neighbor mismatch with matching count.
        assert!(!g.contains_vertex_matching(&Vertex::with_neighbors(1, vec![2, 4])));
        // Unknown id.
        assert!(!g.contains_vertex_matching(&Vertex::new(9)));
    }

    #[test]
    fn from_vertices_stores_as_is() {
        let g = Graph::from_vertices(
            vec![Vertex::with_neighbors(1, vec![2]), Vertex::new(2)],
            Orientation::Undirected,
        );
        // Asymmetry supplied by the caller is not repaired.
        assert!(g.contains_edge(&1, &2));
        assert!(!g.contains_edge(&2, &1));
    }

    #[test]
    fn display_dumps_one_line_per_vertex() {
        let g = Graph::from_edges([("a", "b")], Orientation::Undirected);
        assert_eq!(g.to_string(), "a: b\nb: a\n");
    }
}
