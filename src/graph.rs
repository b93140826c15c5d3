use crate::error::Error;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::hash::Hash;
use tracing::debug;

/// An undirected graph stored as adjacency lists.
///
/// Vertices are kept in insertion order, which is also the order of
/// [`vertices`](Graph::vertices) and of the `Display` output. Each
/// neighbour list holds its neighbours in the order their edges were added.
///
/// # Examples
///
/// ```
/// use linked_seq::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_vertex("A");
/// graph.add_vertex("B");
/// graph.add_vertex("C");
/// graph.add_edge("A", "B")?;
/// graph.add_edge("B", "C")?;
/// graph.add_edge("A", "C")?;
///
/// assert!(graph.has_edge(&"A", &"B"));
/// assert_eq!(graph.to_string(), "A -> B, C\nB -> A, C\nC -> B, A\n");
///
/// graph.remove_vertex(&"B")?;
/// assert_eq!(graph.to_string(), "A -> C\nC -> A\n");
/// # Ok::<(), linked_seq::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V> {
    order: Vec<V>,
    adjacency: HashMap<V, Vec<V>>,
}

impl<V> Graph<V> {
    /// Creates a graph with no vertices.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates the vertices in insertion order.
    #[inline]
    pub fn vertices(&self) -> std::slice::Iter<'_, V> {
        self.order.iter()
    }
}

impl<V: Eq + Hash + Clone + Display> Graph<V> {
    /// Adds `vertex` with no edges. Adding a vertex that already exists does
    /// nothing, its edges are kept.
    pub fn add_vertex(&mut self, vertex: V) {
        if self.adjacency.contains_key(&vertex) {
            return;
        }
        self.order.push(vertex.clone());
        self.adjacency.insert(vertex, Vec::new());
    }

    #[inline]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns the neighbours of `vertex`, or `None` if it is not in the
    /// graph.
    #[inline]
    pub fn neighbours(&self, vertex: &V) -> Option<&[V]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Connects `a` and `b` in both directions.
    ///
    /// An edge that already exists is not added twice.
    ///
    /// # Errors
    ///
    /// [`Error::VertexNotFound`] if either endpoint is missing. The graph is
    /// left unchanged.
    pub fn add_edge(&mut self, a: V, b: V) -> Result<(), Error> {
        self.ensure_vertex(&a)?;
        self.ensure_vertex(&b)?;
        Self::link(&mut self.adjacency, &a, &b);
        Self::link(&mut self.adjacency, &b, &a);
        Ok(())
    }

    /// Removes the edge between `a` and `b`, if there is one.
    ///
    /// # Errors
    ///
    /// [`Error::VertexNotFound`] if either endpoint is missing.
    pub fn remove_edge(&mut self, a: &V, b: &V) -> Result<(), Error> {
        self.ensure_vertex(a)?;
        self.ensure_vertex(b)?;
        Self::unlink(&mut self.adjacency, a, b);
        Self::unlink(&mut self.adjacency, b, a);
        Ok(())
    }

    /// Removes `vertex` and every edge touching it.
    ///
    /// # Errors
    ///
    /// [`Error::VertexNotFound`] if `vertex` is missing.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<(), Error> {
        let neighbours = match self.adjacency.remove(vertex) {
            Some(neighbours) => neighbours,
            None => return Err(self.not_found(vertex)),
        };
        for neighbour in &neighbours {
            Self::unlink(&mut self.adjacency, neighbour, vertex);
        }
        self.order.retain(|v| v != vertex);
        Ok(())
    }

    /// Returns `true` if `a` and `b` are connected. A missing vertex has no
    /// edges, so this returns `false` for it.
    pub fn has_edge(&self, a: &V, b: &V) -> bool {
        if let Err(err) = self.ensure_vertex(a).and_then(|_| self.ensure_vertex(b)) {
            debug!("has_edge({}, {}): {}", a, b, err);
            return false;
        }
        self.adjacency
            .get(a)
            .map_or(false, |neighbours| neighbours.contains(b))
    }

    fn ensure_vertex(&self, vertex: &V) -> Result<(), Error> {
        if self.adjacency.contains_key(vertex) {
            Ok(())
        } else {
            Err(self.not_found(vertex))
        }
    }

    fn not_found(&self, vertex: &V) -> Error {
        debug!("vertex {} not in graph of {} vertices", vertex, self.order.len());
        Error::VertexNotFound {
            vertex: vertex.to_string(),
        }
    }

    fn link(adjacency: &mut HashMap<V, Vec<V>>, from: &V, to: &V) {
        if let Some(neighbours) = adjacency.get_mut(from) {
            if !neighbours.contains(to) {
                neighbours.push(to.clone());
            }
        }
    }

    fn unlink(adjacency: &mut HashMap<V, Vec<V>>, from: &V, to: &V) {
        if let Some(neighbours) = adjacency.get_mut(from) {
            neighbours.retain(|v| v != to);
        }
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash + Display> Display for Graph<V> {
    /// One line per vertex: `vertex -> n1, n2`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for vertex in &self.order {
            write!(f, "{} ->", vertex)?;
            let neighbours = self.adjacency.get(vertex).map_or(&[][..], Vec::as_slice);
            for (i, neighbour) in neighbours.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{}{}", sep, neighbour)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Graph};

    fn triangle() -> Graph<&'static str> {
        let mut graph = Graph::new();
        for v in ["A", "B", "C"] {
            graph.add_vertex(v);
        }
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("B", "C").unwrap();
        graph.add_edge("A", "C").unwrap();
        graph
    }

    #[test]
    fn build_and_print() {
        let graph = triangle();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(graph.neighbours(&"A"), Some(&["B", "C"][..]));
        assert_eq!(graph.to_string(), "A -> B, C\nB -> A, C\nC -> B, A\n");
        assert!(graph.has_edge(&"A", &"B"));
        assert!(graph.has_edge(&"C", &"A"));
    }

    #[test]
    fn remove_vertex_drops_its_edges() {
        let mut graph = triangle();
        graph.remove_vertex(&"B").unwrap();
        assert!(!graph.contains_vertex(&"B"));
        assert!(!graph.has_edge(&"A", &"B"));
        assert!(graph.has_edge(&"A", &"C"));
        assert_eq!(graph.to_string(), "A -> C\nC -> A\n");
    }

    #[test]
    fn remove_edge_both_directions() {
        let mut graph = triangle();
        graph.remove_edge(&"C", &"A").unwrap();
        assert!(!graph.has_edge(&"A", &"C"));
        assert!(!graph.has_edge(&"C", &"A"));
        assert_eq!(graph.neighbours(&"C"), Some(&["B"][..]));
        // removing a missing edge between present vertices is fine
        graph.remove_edge(&"C", &"A").unwrap();
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut graph = triangle();
        graph.add_vertex("A");
        graph.add_edge("B", "A").unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.neighbours(&"A"), Some(&["B", "C"][..]));
        assert_eq!(graph.neighbours(&"B"), Some(&["A", "C"][..]));
    }

    #[test]
    fn missing_vertices() {
        let mut graph = triangle();
        let missing = Error::VertexNotFound {
            vertex: "Z".to_string(),
        };
        assert_eq!(graph.add_edge("A", "Z"), Err(missing.clone()));
        assert_eq!(graph.remove_edge(&"Z", &"A"), Err(missing.clone()));
        assert_eq!(graph.remove_vertex(&"Z"), Err(missing));
        assert!(!graph.has_edge(&"Z", &"A"));
        assert_eq!(graph.neighbours(&"Z"), None);
        assert_eq!(graph.to_string(), triangle().to_string());
    }
}
