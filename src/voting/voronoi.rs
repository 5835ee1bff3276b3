use crate::{
    error::Result,
    graph::AdjacencyGraph,
    sets::{
        frontier::FrontierQueue,
        matrix::BitMatrix,
        visited::{PackedSet, VisitorSet},
    },
};

const UNREACHED: u32 = u32::MAX;

/// Outcome of a multi-source BFS from a set of candidate locations.
///
/// For every voter (node) it records the hop distance to the closest
/// candidate and the tie-set of candidate positions at that distance.
/// Positions index into the candidate slice the regions were computed for.
pub struct VoronoiRegions {
    distances: Vec<u32>,
    ties: BitMatrix,
}

impl VoronoiRegions {
    /// Number of candidates the regions were computed for.
    pub fn candidate_count(&self) -> usize {
        self.ties.cols()
    }

    /// Hop distance from `voter` to its nearest candidate, `None` if no
    /// candidate reaches it.
    pub fn distance(&self, voter: usize) -> Option<u32> {
        match self.distances[voter] {
            UNREACHED => None,
            distance => Some(distance),
        }
    }

    /// Candidate positions tied for nearest to `voter`, ascending.
    pub fn tie_set(&self, voter: usize) -> impl Iterator<Item = usize> + '_ {
        self.ties.row_ones(voter)
    }

    pub fn tie_count(&self, voter: usize) -> usize {
        self.ties.row_count(voter)
    }

    /// Voters reached by at least one candidate.
    pub fn reached_voters(&self) -> usize {
        self.distances.iter().filter(|&&d| d != UNREACHED).count()
    }

    /// Splits each reached voter's unit vote equally across its tie-set.
    ///
    /// Entry `i` is the vote mass of candidate position `i`. Unreached voters
    /// cast nothing, so the entries sum to the number of reached voters.
    ///
    /// Each entry is summed as `voters / c` over tie-set sizes `c` in
    /// ascending order, so candidates holding the same mix of shared voters
    /// get bit-identical totals whatever the voter numbering.
    pub fn vote_shares(&self) -> Vec<f64> {
        let mut splits = Vec::with_capacity(self.distances.len());
        for voter in 0..self.distances.len() {
            let count = self.ties.row_count(voter);
            splits.extend(self.ties.row_ones(voter).map(|position| (position, count)));
        }
        splits.sort_unstable();

        let mut votes = vec![0.0; self.candidate_count()];
        for run in splits.chunk_by(|a, b| a == b) {
            let (position, count) = run[0];
            votes[position] += run.len() as f64 / count as f64;
        }
        votes
    }
}

/// Runs a multi-source BFS from every candidate at once.
///
/// All candidates start at distance 0 with themselves as their tie-set and
/// the frontier is one FIFO shared by every source. When a node is expanded,
/// each neighbor either takes a copy of the node's tie-set (first discovery
/// or strictly shorter distance) or unions it in (equal distance). A node
/// enters the frontier at most once, and a tie-set that grows after its node
/// was expanded is not pushed any further.
///
/// # Panics
/// - If `candidates` is empty.
/// - If a candidate is not a node of `graph` or appears twice.
pub fn voronoi_regions(graph: &AdjacencyGraph, candidates: &[usize]) -> Result<VoronoiRegions> {
    let n = graph.len();
    let k = candidates.len();
    assert!(k >= 1, "at least one candidate is required");
    assert!(k <= n, "{k} candidates for a graph of {n} nodes");

    let mut distances = vec![UNREACHED; n];
    let mut ties = BitMatrix::try_new(n, k, "voronoi tie-sets")?;
    let mut enqueued = PackedSet::new(n);
    let mut frontier = FrontierQueue::with_capacity(n);

    for (position, &candidate) in candidates.iter().enumerate() {
        assert!(candidate < n, "candidate {candidate} is not a node");
        assert!(enqueued.set(candidate), "candidate {candidate} listed twice");

        distances[candidate] = 0;
        ties.set(candidate, position);
        frontier.push(candidate);
    }

    while let Some(node) = frontier.pop() {
        let next_distance = distances[node] + 1;

        for &neighbor in graph.neighbors(node) {
            let recorded = distances[neighbor];
            if recorded == UNREACHED || next_distance < recorded {
                distances[neighbor] = next_distance;
                ties.copy_row(node, neighbor);
                if enqueued.set(neighbor) {
                    frontier.push(neighbor);
                }
            } else if next_distance == recorded {
                ties.union_row(node, neighbor);
            }
        }
    }

    Ok(VoronoiRegions { distances, ties })
}

/// Vote share of every candidate position under the nearest-candidate rule.
///
/// See [`voronoi_regions`] for the traversal and its panics.
pub fn compute_vote_shares(graph: &AdjacencyGraph, candidates: &[usize]) -> Result<Vec<f64>> {
    Ok(voronoi_regions(graph, candidates)?.vote_shares())
}
