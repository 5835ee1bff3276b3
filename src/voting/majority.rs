use tqdm::tqdm;
use tracing::debug;

use crate::{error::Result, graph::AdjacencyGraph, voting::voronoi::compute_vote_shares};

/// Pairwise "loses-to" tournament over every node of a voting graph.
///
/// Edge `i -> j` means that in a head-to-head contest between candidates at
/// `i` and `j`, `i` receives no more votes than `j`. A tied contest yields
/// edges in both directions, so every pair of distinct nodes is joined by at
/// least one edge.
#[derive(Clone, Debug)]
pub struct MajorityGraph {
    losses: AdjacencyGraph,
}

impl MajorityGraph {
    /// The loss graph on the same nodes as the voting graph.
    pub fn graph(&self) -> &AdjacencyGraph {
        &self.losses
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }

    /// Whether `i` gets at most as many votes as `j` when they face off.
    pub fn loses_or_ties(&self, i: usize, j: usize) -> bool {
        self.losses.edge_exists(i, j)
    }

    /// Whether `i` gets strictly fewer votes than `j` when they face off.
    pub fn strictly_loses(&self, i: usize, j: usize) -> bool {
        self.losses.edge_exists(i, j) && !self.losses.edge_exists(j, i)
    }

    /// Nodes that never strictly lose a head-to-head contest.
    pub fn condorcet_winners(&self) -> Vec<usize> {
        (0..self.len())
            .filter(|&i| {
                self.losses
                    .neighbors(i)
                    .iter()
                    .all(|&j| self.losses.edge_exists(j, i))
            })
            .collect()
    }

    /// Nodes that never strictly win a head-to-head contest.
    pub fn condorcet_losers(&self) -> Vec<usize> {
        let n = self.len();
        (0..n)
            .filter(|&i| {
                self.losses
                    .neighbors(i)
                    .iter()
                    .filter(|&&j| j != i)
                    .count()
                    == n - 1
            })
            .collect()
    }
}

/// Builds the pairwise loss graph of `graph`.
///
/// Runs one two-candidate vote allocation for every unordered pair, so the
/// cost is O(n² · (n + m)).
pub fn build_majority_graph(graph: &AdjacencyGraph) -> Result<MajorityGraph> {
    build_majority_graph_with_progress(graph, false)
}

/// Same as [`build_majority_graph`], optionally drawing a progress bar over
/// the rows of the pair sweep.
pub fn build_majority_graph_with_progress(
    graph: &AdjacencyGraph,
    show_progress: bool,
) -> Result<MajorityGraph> {
    let n = graph.len();
    let mut losses = AdjacencyGraph::new(n);

    let rows: Box<dyn Iterator<Item = usize>> = if show_progress {
        Box::new(tqdm(0..n))
    } else {
        Box::new(0..n)
    };

    for i in rows {
        for j in (i + 1)..n {
            let votes = compute_vote_shares(graph, &[i, j])?;

            if votes[0] <= votes[1] {
                losses.add_edge(i, j);
            }
            if votes[1] <= votes[0] {
                losses.add_edge(j, i);
            }
        }
    }

    debug!(
        nodes = n,
        loss_edges = losses.edge_count(),
        "pairwise loss graph built"
    );
    Ok(MajorityGraph { losses })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize) -> AdjacencyGraph {
        AdjacencyGraph::from_undirected_edges(n, (0..n - 1).map(|i| (i, i + 1)))
    }

    fn star(leaves: usize) -> AdjacencyGraph {
        AdjacencyGraph::from_undirected_edges(leaves + 1, (1..=leaves).map(|leaf| (0, leaf)))
    }

    #[test]
    fn every_pair_is_decided_one_way_or_both() {
        let graph = path(7);
        let majority = build_majority_graph(&graph).unwrap();
        assert_eq!(majority.len(), 7);
        for i in 0..7 {
            for j in 0..7 {
                if i != j {
                    assert!(
                        majority.loses_or_ties(i, j) || majority.loses_or_ties(j, i),
                        "pair ({i}, {j}) missing"
                    );
                }
            }
        }
    }

    #[test]
    fn path_contests_favor_the_middle() {
        // 0 - 1 - 2 - 3 - 4
        let graph = path(5);
        let majority = build_majority_graph(&graph).unwrap();

        // 0 vs 2: 0 holds 0 and half of 1
        assert!(majority.strictly_loses(0, 2));
        assert!(!majority.loses_or_ties(2, 0));
        // 1 vs 3 splits evenly
        assert!(majority.loses_or_ties(1, 3) && majority.loses_or_ties(3, 1));
        // no self loops
        for i in 0..5 {
            assert!(!majority.loses_or_ties(i, i));
        }
    }

    #[test]
    fn star_center_is_the_condorcet_winner() {
        let majority = build_majority_graph(&star(5)).unwrap();
        assert_eq!(majority.condorcet_winners(), vec![0]);
        // every leaf loses to the center and ties the other leaves
        assert_eq!(majority.condorcet_losers(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn path_median_is_the_condorcet_winner() {
        let majority = build_majority_graph(&path(5)).unwrap();
        assert_eq!(majority.condorcet_winners(), vec![2]);
        assert_eq!(majority.condorcet_losers(), vec![0, 4]);
    }

    #[test]
    fn two_isolated_nodes_tie() {
        let graph = AdjacencyGraph::new(2);
        let majority = build_majority_graph(&graph).unwrap();
        assert!(majority.loses_or_ties(0, 1));
        assert!(majority.loses_or_ties(1, 0));
        assert_eq!(majority.condorcet_winners(), vec![0, 1]);
    }

    #[test]
    fn single_node_has_no_contests() {
        let majority = build_majority_graph(&AdjacencyGraph::new(1)).unwrap();
        assert_eq!(majority.graph().edge_count(), 0);
        assert_eq!(majority.condorcet_winners(), vec![0]);
        assert_eq!(majority.condorcet_losers(), vec![0]);
    }

    #[test]
    fn empty_graph_gives_empty_tournament() {
        let majority = build_majority_graph(&AdjacencyGraph::new(0)).unwrap();
        assert!(majority.is_empty());
        assert!(majority.condorcet_winners().is_empty());
    }
}
