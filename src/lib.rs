//! A generic, in-memory adjacency-list graph container.
//!
//! [`Graph`] owns a collection of [`Vertex`] units, each an identifier plus
//! an insertion-ordered list of neighboring identifiers.  Whether edge
//! mutations are mirrored onto both endpoints is controlled by the
//! [`Orientation`] chosen at construction time.
//!
//! ```
//! use vicinity::{Graph, Orientation};
//!
//! let mut graph = Graph::from_edges([("a", "b"), ("b", "c")], Orientation::Undirected);
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.adjacent_ids(&"b").unwrap(), &["a", "c"]);
//!
//! graph.delete_vertex(&"b").unwrap();
//! assert!(!graph.contains_edge(&"a", &"b"));
//! ```

mod error;
mod graph;
mod orientation;
mod trace;
mod vertex;

pub use error::{GraphError, Result};
pub use graph::Graph;
pub use orientation::Orientation;
pub use vertex::{Vertex, VertexId};
