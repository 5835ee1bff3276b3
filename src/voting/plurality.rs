use rand::Rng;

use crate::{
    error::Result,
    graph::AdjacencyGraph,
    voting::{tie_break::argmax_random, voronoi::compute_vote_shares},
};

/// Single-round plurality winner: the candidate with the largest vote share,
/// ties broken uniformly with `rng`.
pub fn plurality_winner<R: Rng + ?Sized>(
    graph: &AdjacencyGraph,
    candidates: &[usize],
    rng: &mut R,
) -> Result<usize> {
    let votes = compute_vote_shares(graph, candidates)?;
    Ok(candidates[argmax_random(&votes, rng)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voting::irv::irv_winner;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn largest_region_wins() {
        // 0 - 1 - 2 - 3 - 4 - 5, candidates 0 and 2: 2 holds 2..=5 and half of 1
        let graph = AdjacencyGraph::from_undirected_edges(6, (0..5).map(|i| (i, i + 1)));
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(plurality_winner(&graph, &[0, 2], &mut rng).unwrap(), 2);
    }

    #[test]
    fn plurality_and_irv_can_disagree() {
        // Path 0..=20 with candidates 0, 8, 14:
        // plurality shares 4.5 / 7 / 9.5, so 14 wins outright,
        // IRV drops 0 first and 8 then holds 0..=10 plus half of 11.
        let graph = AdjacencyGraph::from_undirected_edges(21, (0..20).map(|i| (i, i + 1)));
        let mut rng = StdRng::seed_from_u64(8);
        let candidates = [0, 8, 14];

        assert_eq!(plurality_winner(&graph, &candidates, &mut rng).unwrap(), 14);
        assert_eq!(irv_winner(&graph, &candidates, &mut rng).unwrap(), 8);
    }
}
