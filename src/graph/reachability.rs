use crate::{
    error::Result,
    graph::AdjacencyGraph,
    sets::{frontier::FrontierQueue, matrix::BitMatrix},
};

/// Transitive closure of an [`AdjacencyGraph`].
///
/// `reaches(i, j)` is `true` iff there is a directed path from `i` to `j`.
/// Every node reaches itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ReachabilityMatrix {
    closure: BitMatrix,
}

impl ReachabilityMatrix {
    pub fn len(&self) -> usize {
        self.closure.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.closure.rows() == 0
    }

    pub fn reaches(&self, from: usize, to: usize) -> bool {
        self.closure.get(from, to)
    }

    /// Every node reachable from `from`, itself included, in ascending order.
    pub fn reachable_from(&self, from: usize) -> impl Iterator<Item = usize> + '_ {
        self.closure.row_ones(from)
    }

    pub fn reach_count(&self, from: usize) -> usize {
        self.closure.row_count(from)
    }

    /// Packed row of nodes reachable from `from`, laid out like a
    /// [`PackedSet`](crate::sets::visited::PackedSet) over the same nodes.
    pub fn row_words(&self, from: usize) -> &[u64] {
        self.closure.row_words(from)
    }
}

impl std::fmt::Debug for ReachabilityMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReachabilityMatrix")
            .field("closure", &self.closure)
            .finish()
    }
}

/// Computes the transitive closure of `graph` with one BFS per node.
///
/// O(n * (n + m)) time and n² bits of storage. The storage is reserved up
/// front and an allocation failure is reported rather than aborting.
pub fn compute_reachability(graph: &AdjacencyGraph) -> Result<ReachabilityMatrix> {
    let n = graph.len();
    let mut closure = BitMatrix::try_new(n, n, "reachability matrix")?;
    let mut frontier = FrontierQueue::with_capacity(n);

    for source in 0..n {
        closure.set(source, source);
        frontier.push(source);

        while let Some(node) = frontier.pop() {
            for &neighbor in graph.neighbors(node) {
                if closure.set(source, neighbor) {
                    frontier.push(neighbor);
                }
            }
        }
    }

    Ok(ReachabilityMatrix { closure })
}
