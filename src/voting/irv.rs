use rand::Rng;

use crate::{
    error::Result,
    graph::AdjacencyGraph,
    voting::{tie_break::argmin_random, voronoi::compute_vote_shares},
};

/// Runs instant-runoff voting over `candidates`, reordering them in place.
///
/// Each round computes the vote shares of the candidates still standing
/// (the first `k` positions), eliminates the one with the smallest share
/// (ties broken uniformly with `rng`) by swapping it into position `k - 1`,
/// and shrinks `k`. After `len - 1` rounds, `candidates[0]` is the winner and
/// `candidates[len - 1..=1]` read back to front give the elimination order.
///
/// Returns the winner.
///
/// # Panics
/// If `candidates` is empty, or on any precondition of
/// [`voronoi_regions`](crate::voting::voronoi_regions).
pub fn resolve_irv<R: Rng + ?Sized>(
    graph: &AdjacencyGraph,
    candidates: &mut [usize],
    rng: &mut R,
) -> Result<usize> {
    assert!(!candidates.is_empty(), "an election needs a candidate");

    for standing in (2..=candidates.len()).rev() {
        let votes = compute_vote_shares(graph, &candidates[..standing])?;
        let loser = argmin_random(&votes, rng);
        candidates.swap(loser, standing - 1);
    }

    Ok(candidates[0])
}

/// IRV winner of `candidates` without disturbing the caller's ordering.
pub fn irv_winner<R: Rng + ?Sized>(
    graph: &AdjacencyGraph,
    candidates: &[usize],
    rng: &mut R,
) -> Result<usize> {
    let mut ballot = candidates.to_vec();
    resolve_irv(graph, &mut ballot, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng, rngs::StdRng};

    // Always yields zero and counts how often it was asked.
    #[derive(Default)]
    struct CountingRng {
        draws: usize,
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            0
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            self.draws += 1;
            dst.fill(0);
        }
    }

    fn path(n: usize) -> AdjacencyGraph {
        AdjacencyGraph::from_undirected_edges(n, (0..n - 1).map(|i| (i, i + 1)))
    }

    fn star(leaves: usize) -> AdjacencyGraph {
        AdjacencyGraph::from_undirected_edges(leaves + 1, (1..=leaves).map(|leaf| (0, leaf)))
    }

    #[test]
    fn single_candidate_is_untouched() {
        let graph = path(4);
        let mut rng = StdRng::seed_from_u64(0);
        let mut candidates = vec![2];
        assert_eq!(resolve_irv(&graph, &mut candidates, &mut rng).unwrap(), 2);
        assert_eq!(candidates, vec![2]);
    }

    #[test]
    fn output_is_a_permutation_of_the_input() {
        let graph = path(12);
        let mut rng = StdRng::seed_from_u64(3);
        let original = vec![11, 0, 5, 7, 2, 9];
        let mut candidates = original.clone();

        resolve_irv(&graph, &mut candidates, &mut rng).unwrap();

        let mut sorted = candidates.clone();
        sorted.sort_unstable();
        let mut expected = original.clone();
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn median_wins_on_a_path() {
        // 0 1 2 3 4 5 6 7 8 with candidates at 0, 4, 8.
        // Round 1: shares 2.5 / 4 / 2.5 -> an end candidate goes.
        // Round 2: the survivor at an end faces 4, which holds the middle.
        let graph = path(9);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut candidates = vec![0, 4, 8];
            let winner = resolve_irv(&graph, &mut candidates, &mut rng).unwrap();
            assert_eq!(winner, 4);
            assert_eq!(candidates[0], 4);
        }
    }

    #[test]
    fn elimination_order_is_recorded_back_to_front() {
        // Candidates 0, 1, 5 on a path of 6 nodes:
        // round 1: 0 has 1 vote, 1 has 2.5, 5 has 2.5 -> 0 eliminated first.
        // round 2: 1 holds nodes 0-2 and half of 3 -> 5 eliminated.
        let graph = path(6);
        let mut rng = StdRng::seed_from_u64(11);
        let mut candidates = vec![0, 1, 5];
        resolve_irv(&graph, &mut candidates, &mut rng).unwrap();

        assert_eq!(candidates, vec![1, 5, 0]);
    }

    #[test]
    fn star_center_wins_against_leaves() {
        // the center collects the uncontested leaves 4, 5, 6
        let graph = star(6);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut candidates = vec![1, 0, 2, 3];
            assert_eq!(resolve_irv(&graph, &mut candidates, &mut rng).unwrap(), 0);
        }
    }

    #[test]
    fn irv_winner_keeps_caller_order() {
        let graph = path(9);
        let mut rng = StdRng::seed_from_u64(1);
        let candidates = vec![0, 4, 8];
        assert_eq!(irv_winner(&graph, &candidates, &mut rng).unwrap(), 4);
        assert_eq!(candidates, vec![0, 4, 8]);
    }

    #[test]
    fn deterministic_under_a_fixed_seed() {
        let graph = path(10);
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut candidates: Vec<usize> = (0..10).collect();
            resolve_irv(&graph, &mut candidates, &mut rng).unwrap();
            candidates
        };
        assert_eq!(run(77), run(77));
    }

    #[test]
    fn all_tied_field_takes_one_round_per_elimination() {
        // isolated nodes: every standing candidate holds exactly one vote, so
        // each round is a full tie and draws once
        let graph = AdjacencyGraph::new(5);
        let mut rng = CountingRng::default();
        let mut candidates: Vec<usize> = (0..5).collect();

        let winner = resolve_irv(&graph, &mut candidates, &mut rng).unwrap();

        assert_eq!(rng.draws, 4);
        // a zero draw always eliminates the first standing position
        assert_eq!(candidates, vec![1, 2, 3, 4, 0]);
        assert_eq!(winner, 1);
    }

    #[test]
    fn clear_losers_need_no_randomness() {
        let graph = path(6);
        let mut rng = CountingRng::default();
        let mut candidates = vec![0, 1, 5];
        resolve_irv(&graph, &mut candidates, &mut rng).unwrap();
        assert_eq!(rng.draws, 0);
        assert_eq!(candidates, vec![1, 5, 0]);
    }
}
