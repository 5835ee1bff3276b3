/// In-memory directed graph over the nodes `0..n`.
///
/// # Invariants
/// - `adjacency[i]` holds the out-neighbors of node `i`.
/// - Every neighbor entry is a valid index into `adjacency`.
/// - A node's neighbor list never contains the same node twice.
///
/// Neighbor order is insertion order and carries no meaning for the voting
/// model, but it does fix the order in which a BFS explores a node's edges.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Creates a graph of `n` isolated nodes.
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
        }
    }

    /// Builds a graph from `(u, v)` directed edges, ignoring duplicates.
    ///
    /// # Panics
    /// If an endpoint is not below `n`.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut graph = Self::new(n);
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Builds a graph with both `u -> v` and `v -> u` for every listed pair.
    pub fn from_undirected_edges(
        n: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let mut graph = Self::new(n);
        for (u, v) in edges {
            graph.add_edge(u, v);
            graph.add_edge(v, u);
        }
        graph
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Whether the directed edge `u -> v` is present. Linear in the out-degree of `u`.
    pub fn edge_exists(&self, u: usize, v: usize) -> bool {
        self.adjacency[u].contains(&v)
    }

    /// Inserts the directed edge `u -> v` unless it is already present.
    ///
    /// Returns `true` if the edge was added.
    ///
    /// # Panics
    /// If `u` or `v` is not a node of the graph.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        assert!(
            u < self.len() && v < self.len(),
            "edge ({u}, {v}) out of range for a graph of {} nodes",
            self.len()
        );

        if self.edge_exists(u, v) {
            return false;
        }
        self.adjacency[u].push(v);
        true
    }
}

impl std::fmt::Debug for AdjacencyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (node, neighbors) in self.adjacency.iter().enumerate() {
            map.entry(&node, neighbors);
        }
        map.finish()
    }
}
